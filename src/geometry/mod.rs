//! Parametric geometry: point-sequence shapes and tiling background patterns.

pub mod pattern;
pub mod shape;

pub use pattern::Pattern;
pub use shape::ArrowDirection;
