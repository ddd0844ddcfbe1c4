//! quiver: 2D vector-arithmetic diagrams.
//!
//! Computes the sum and difference of two 2D vectors and lays the result out
//! as a Cartesian arrow diagram:
//!
//! - the two input vectors, their sum, and their difference, drawn as arrows
//!   from the origin with labelled tips,
//! - a dashed construction arrow from the tip of `v2` to the tip of `v1`
//!   showing the subtraction geometrically,
//! - an integer grid, axis lines through the origin, a legend, and a title.
//!
//! The output is a [`quiver_scene::Scene`]; displaying it is a backend
//! concern (see the `quiver-tui` crate for the terminal viewer).
//!
//! # Example
//!
//! ```
//! use quiver::Figure;
//!
//! let figure = Figure::demo();
//! assert_eq!(figure.sum(), quiver::Vec2::new(5.0, 5.0));
//! let scene = figure.scene();
//! assert!(scene.title().is_some());
//! ```

pub mod arrow;
pub mod axes;
pub mod figure;
pub mod legend;

pub use arrow::Arrow;
pub use axes::AxisBounds;
pub use figure::{Figure, V1, V2};

pub use quiver_scene::Vec2;
