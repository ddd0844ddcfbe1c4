//! # quiver-scene - Typed 2D Vector Graphics for quiver
//!
//! A small scene model for building resolution-independent line drawings.
//!
//! ## Features
//!
//! - **Typed representation**: `Scene` struct with `Element`s, not draw calls
//! - **f32 coordinates**: compact, plenty for diagram-scale geometry
//! - **Incremental bounds**: bounding box tracked as elements are added
//! - **Backend-agnostic rendering**: implement [`Renderer`] for your target
//!
//! ## Architecture
//!
//! ```text
//! figure code              backend
//! ───────────              ───────
//! Scene { elements } ──render──► Renderer impl (terminal canvas, mock, ...)
//! ```
//!
//! The figure layer builds a `Scene` once; `render` walks it and dispatches
//! path, fill, stroke, and text calls to whatever backend is attached.

mod element;
mod path;
mod render;
mod scene;
mod style;
mod types;

pub use element::Element;
pub use path::{Path, PathCmd};
pub use render::{Renderer, render};
pub use scene::Scene;
pub use style::{LineStyle, Stroke, TextAnchor};
pub use types::{Color, Rect, Vec2};
