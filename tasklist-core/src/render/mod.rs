//! Row styling and viewport geometry
//!
//! Pure presentation logic shared by every frontend. The list is rendered
//! declaratively: after any insertion or deletion the frontend regenerates
//! all rows from the task list via [`StyleEngine::recolor_all`] and
//! [`Viewport::layout`], instead of patching individual rows.

mod style;
mod viewport;

pub use style::{Scheme, StyleConfig, StyleEngine, StyledRow};
pub use viewport::{Bounds, RowLayout, Viewport, ViewportConfig, WheelDelta};
