use anyhow::Result;
use figures::{Coord, Point, ShapeCollection};
use serde::Serialize;

use crate::demo::{collect, SAMPLE};
use crate::Elem;

/// JSON view of one collection element. Coordinates are widened to `f64`.
#[derive(Debug, Serialize)]
pub struct ShapeEntry {
    pub index: usize,
    pub kind: String,
    pub vertices: Vec<[f64; 2]>,
    pub centroid: [f64; 2],
    pub area: f64,
    pub valid: bool,
}

#[derive(Debug, Serialize)]
pub struct Summary {
    pub code_rev: String,
    pub version: &'static str,
    pub element_type: &'static str,
    pub len: usize,
    pub capacity: usize,
    pub total_area: f64,
    pub shapes: Vec<ShapeEntry>,
}

fn xy<N: Coord>(p: &Point<N>) -> [f64; 2] {
    [p.x().as_f64(), p.y().as_f64()]
}

pub fn summarize<N: Coord>(shapes: &ShapeCollection<N>, elem: Elem) -> Summary {
    let entries = shapes
        .iter()
        .enumerate()
        .map(|(index, handle)| {
            let shape = handle.borrow();
            ShapeEntry {
                index,
                kind: shape.kind().to_string(),
                vertices: shape.vertices().iter().map(xy).collect(),
                centroid: xy(&shape.centroid()),
                area: shape.area(),
                valid: shape.is_valid(),
            }
        })
        .collect();
    Summary {
        code_rev: option_env!("GIT_COMMIT").unwrap_or("unknown").to_string(),
        version: figures::VERSION,
        element_type: elem.name(),
        len: shapes.len(),
        capacity: shapes.capacity(),
        total_area: shapes.total_area(),
        shapes: entries,
    }
}

pub fn sample_summary<N: Coord>(elem: Elem) -> Result<Summary> {
    let shapes = collect::<N>(&SAMPLE)?;
    tracing::info!(elem = elem.name(), len = shapes.len(), "report");
    Ok(summarize(&shapes, elem))
}
