//! Scene Model - Composite shape tree and canvas
//!
//! This crate provides the data model for the shape canvas: drawable shape
//! nodes that nest arbitrarily inside container shapes, and the canvas tree
//! that owns them and supports lookup, insertion, and removal by id.

mod canvas;
mod error;
mod shape;
mod shape_id;

pub use canvas::*;
pub use error::*;
pub use shape::*;
pub use shape_id::*;
