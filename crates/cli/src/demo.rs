//! Scripted walkthrough of the collection API over three element types.

use anyhow::{Context, Result};
use figures::{Coord, Shape, ShapeCollection, ShapeError, ShapeKind, TokenReader};

/// The six-shape sample used by `demo` and `report`.
pub(crate) const SAMPLE: [(ShapeKind, &str); 6] = [
    (ShapeKind::Square, "0 0  2 0  2 2  0 2"),
    (ShapeKind::Square, "1 1  3 1  3 3  1 3"),
    (ShapeKind::Rectangle, "0 0  4 0  4 1  0 1"),
    (ShapeKind::Rectangle, "2 2  6 2  6 4  2 4"),
    (ShapeKind::Triangle, "0 0  3 0  0 4"),
    (ShapeKind::Triangle, "1 1  5 1  3 5"),
];

/// Parse `(kind, text)` pairs into a validated collection.
pub(crate) fn collect<N: Coord>(entries: &[(ShapeKind, &str)]) -> Result<ShapeCollection<N>> {
    let mut shapes = ShapeCollection::new();
    for (i, &(kind, text)) in entries.iter().enumerate() {
        let shape = Shape::<N>::read(kind, &mut TokenReader::from_text(text))
            .with_context(|| format!("sample shape #{i} ({kind})"))?;
        shapes.add(shape.into_handle());
    }
    Ok(shapes)
}

fn list<N: Coord>(shapes: &ShapeCollection<N>) -> Result<()> {
    for i in 0..shapes.len() {
        let shape = shapes.at(i)?;
        println!("{i}: {shape:.2} | Area = {:.2}", shape.area());
    }
    Ok(())
}

pub fn run() -> Result<()> {
    tracing::info!("demo");
    let mut shapes = collect::<f64>(&SAMPLE)?;

    println!("=== FIGURES ===");
    for (i, handle) in shapes.iter().enumerate() {
        println!("{i}: {}", handle.borrow());
    }
    println!("\n--- Areas ---");
    shapes.display_areas()?;
    println!("\n--- Centroids ---");
    shapes.display_centroids()?;
    println!("\nTotal area: {:.2}", shapes.total_area());
    println!("Number of figures: {}", shapes.len());

    println!("\n=== ERASE ===");
    for index in [1, 2] {
        let removed = shapes.erase(index)?;
        tracing::info!(index, kind = %removed.borrow().kind(), "erased");
        println!("After erasing index {index}:");
        list(&shapes)?;
    }
    println!("Total area: {:.2}", shapes.total_area());

    match shapes.erase(10) {
        Err(e @ ShapeError::IndexOutOfRange { .. }) => println!("Caught expected error: {e}"),
        Err(e) => return Err(e.into()),
        Ok(_) => anyhow::bail!("erase(10) unexpectedly succeeded"),
    }

    println!("\n=== ELEMENT TYPES ===");
    let mut floats = collect::<f32>(&[
        (ShapeKind::Square, "0.5 0.5  2.5 0.5  2.5 2.5  0.5 2.5"),
        (ShapeKind::Triangle, "0 0  2 0  1 1.732"),
    ])?;
    println!("f32 figures: {}", floats.len());
    floats.display_areas()?;
    floats.erase(0)?;
    println!("f32 figures after erasing index 0: {}", floats.len());
    floats.display_areas()?;

    let ints = collect::<i32>(&[
        (ShapeKind::Square, "0 0  3 0  3 3  0 3"),
        (ShapeKind::Rectangle, "0 0  5 0  5 2  0 2"),
    ])?;
    println!("\ni32 figures: {}", ints.len());
    ints.display_areas()?;
    ints.display_centroids()?;

    println!("\n=== MOVE ===");
    let moved = shapes.take();
    println!("Moved collection: {} figures", moved.len());
    println!("Source after move: {} figures", shapes.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_is_valid_for_every_element_type() {
        assert_eq!(collect::<f64>(&SAMPLE).unwrap().len(), SAMPLE.len());
        assert_eq!(collect::<f32>(&SAMPLE).unwrap().len(), SAMPLE.len());
        assert_eq!(collect::<i32>(&SAMPLE).unwrap().len(), SAMPLE.len());
        assert_eq!(collect::<i64>(&SAMPLE).unwrap().len(), SAMPLE.len());
    }

    #[test]
    fn collect_reports_bad_entry() {
        let err = collect::<f64>(&[(ShapeKind::Triangle, "0 0 1 1 2 2")]).unwrap_err();
        assert!(err.to_string().contains("sample shape #0"));
        assert!(matches!(
            err.downcast_ref::<ShapeError>(),
            Some(ShapeError::InvalidGeometry { .. })
        ));
    }
}
