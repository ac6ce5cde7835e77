//! Edit Engine - Command system and undo/redo
//!
//! This crate implements command-based editing of the shape canvas: every
//! mutation is a recorded command that the engine can apply, undo, and
//! redo against a [`scene_model::Canvas`].

mod command;
mod error;
mod event;
mod executor;
mod undo;

pub use command::*;
pub use error::*;
pub use event::*;
pub use executor::*;
pub use undo::*;
