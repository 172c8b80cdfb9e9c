//! Dual brush paint option.
//!
//! The dual brush combines a primary brush stroke with an ordered stack of
//! secondary presets, each compositing its dabs with its own blend mode,
//! opacity, fuzziness, and placement offsets. This crate provides:
//! - [`preset::StackedPreset`] - one entry of the stack
//! - [`controls::StackControls`] - the editable parameter controls
//! - [`editor::DualBrushEditor`] - list, selection, and control state
//! - [`icon`] - row thumbnail rendering
//! - [`option`] - the host option page adapter

pub mod controls;
pub mod editor;
pub mod icon;
pub mod option;
pub mod preset;

pub use controls::*;
pub use editor::*;
pub use icon::*;
pub use option::*;
pub use preset::*;
