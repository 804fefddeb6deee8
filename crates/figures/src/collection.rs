//! Growable, insertion-ordered collection of shared shape handles.
//!
//! Invariants:
//! - `len <= capacity`; slots `[0, len)` are `Some`, slots `[len, capacity)` are `None`.
//! - Growth doubles the slot buffer (a zero-capacity buffer grows to
//!   `INITIAL_CAPACITY`), so `add` is amortized O(1).
//! - `erase` shifts the tail left by one; relative order is never changed.
//! - Handles are reference-counted; the collection holds one claim per slot.
//!
//! The collection is deliberately not `Clone`. `take()` moves the buffer out
//! and leaves the source empty with capacity 0.

use std::cell::{Ref, RefCell, RefMut};
use std::io::{self, Write};
use std::rc::Rc;

use tracing::{debug, trace};

use crate::cfg::{AREA_PRECISION, INITIAL_CAPACITY};
use crate::error::{Result, ShapeError};
use crate::scalar::Coord;
use crate::shape::Shape;

/// Shared, mutable handle to a shape. Cloning the handle shares the shape.
pub type ShapeHandle<N> = Rc<RefCell<Shape<N>>>;

/// Ordered sequence of [`ShapeHandle`]s over one coordinate type.
///
/// Copying is a type error:
///
/// ```compile_fail
/// let a = figures::ShapeCollection::<f64>::new();
/// let b = a.clone();
/// ```
#[derive(Debug)]
pub struct ShapeCollection<N> {
    len: usize,
    slots: Box<[Option<ShapeHandle<N>>]>,
}

fn empty_slots<N>(capacity: usize) -> Box<[Option<ShapeHandle<N>>]> {
    std::iter::repeat_with(|| None).take(capacity).collect()
}

impl<N: Coord> ShapeCollection<N> {
    pub fn new() -> Self {
        Self::with_capacity(INITIAL_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            len: 0,
            slots: empty_slots(capacity),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Append at the end, doubling the buffer when full.
    pub fn add(&mut self, shape: ShapeHandle<N>) {
        if self.len == self.capacity() {
            self.grow();
        }
        self.slots[self.len] = Some(shape);
        self.len += 1;
        trace!(len = self.len, "add");
    }

    fn grow(&mut self) {
        let new_capacity = (self.capacity() * 2).max(INITIAL_CAPACITY);
        let mut slots = empty_slots(new_capacity);
        for (dst, src) in slots.iter_mut().zip(self.slots[..self.len].iter_mut()) {
            *dst = src.take();
        }
        debug!(from = self.capacity(), to = new_capacity, "grow");
        self.slots = slots;
    }

    fn slot(&self, index: usize) -> Result<&ShapeHandle<N>> {
        self.slots[..self.len]
            .get(index)
            .and_then(Option::as_ref)
            .ok_or(ShapeError::IndexOutOfRange {
                index,
                len: self.len,
            })
    }

    /// Shared borrow of the shape at `index`.
    ///
    /// Fails with `Borrowed` while the same shape is mutably borrowed
    /// through another handle.
    pub fn at(&self, index: usize) -> Result<Ref<'_, Shape<N>>> {
        self.slot(index)?
            .try_borrow()
            .map_err(|_| ShapeError::Borrowed { index })
    }

    /// Mutable borrow of the shape at `index`; changes are visible through
    /// every handle to that shape.
    ///
    /// Fails with `Borrowed` while the same shape is borrowed through
    /// another handle.
    pub fn at_mut(&mut self, index: usize) -> Result<RefMut<'_, Shape<N>>> {
        self.slot(index)?
            .try_borrow_mut()
            .map_err(|_| ShapeError::Borrowed { index })
    }

    /// Another claim on the shape at `index`.
    pub fn handle(&self, index: usize) -> Result<ShapeHandle<N>> {
        self.slot(index).map(Rc::clone)
    }

    /// Remove the element at `index`, shifting the tail left by one.
    ///
    /// Returns the removed handle; dropping it releases the collection's claim.
    /// An out-of-range index leaves the collection untouched.
    pub fn erase(&mut self, index: usize) -> Result<ShapeHandle<N>> {
        let len = self.len;
        let Some(removed) = self.slots[..len].get_mut(index).and_then(Option::take) else {
            return Err(ShapeError::IndexOutOfRange { index, len });
        };
        // The emptied slot travels to `len - 1`.
        self.slots[index..len].rotate_left(1);
        self.len -= 1;
        debug!(index, len = self.len, "erase");
        Ok(removed)
    }

    /// Live handles in index order.
    pub fn iter(&self) -> impl Iterator<Item = &ShapeHandle<N>> + '_ {
        self.slots[..self.len].iter().flatten()
    }

    /// Sum of areas in index order; `0.0` when empty.
    pub fn total_area(&self) -> f64 {
        self.iter().map(|h| h.borrow().area()).sum()
    }

    /// One line per element: `"{i}: {shape} | Area = {area}"`.
    pub fn write_areas<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for (i, handle) in self.iter().enumerate() {
            let shape = handle.borrow();
            writeln!(
                out,
                "{i}: {shape:.prec$} | Area = {area:.prec$}",
                area = shape.area(),
                prec = AREA_PRECISION,
            )?;
        }
        Ok(())
    }

    /// One line per element: `"{i}: Centroid = (x, y)"`.
    pub fn write_centroids<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for (i, handle) in self.iter().enumerate() {
            let centroid = handle.borrow().centroid();
            writeln!(out, "{i}: Centroid = {centroid:.prec$}", prec = AREA_PRECISION)?;
        }
        Ok(())
    }

    pub fn display_areas(&self) -> Result<()> {
        self.write_areas(&mut io::stdout().lock())?;
        Ok(())
    }

    pub fn display_centroids(&self) -> Result<()> {
        self.write_centroids(&mut io::stdout().lock())?;
        Ok(())
    }

    /// Move every element into a new collection; `self` is left with
    /// length 0 and capacity 0 and stays usable.
    pub fn take(&mut self) -> Self {
        let taken = Self {
            len: self.len,
            slots: std::mem::take(&mut self.slots),
        };
        self.len = 0;
        debug!(len = taken.len, capacity = taken.capacity(), "take");
        taken
    }
}

impl<N: Coord> Default for ShapeCollection<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Coord> FromIterator<ShapeHandle<N>> for ShapeCollection<N> {
    fn from_iter<I: IntoIterator<Item = ShapeHandle<N>>>(iter: I) -> Self {
        let mut collection = Self::new();
        collection.extend(iter);
        collection
    }
}

impl<N: Coord> Extend<ShapeHandle<N>> for ShapeCollection<N> {
    fn extend<I: IntoIterator<Item = ShapeHandle<N>>>(&mut self, iter: I) {
        for handle in iter {
            self.add(handle);
        }
    }
}
