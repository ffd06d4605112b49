//! Scribble Render Library
//!
//! Hand-drawn render bridge for the Scribble core: rough stroke generation over
//! kurbo paths and a full-redraw SVG surface.

mod color;
mod rough;
mod surface;

pub use color::SerializableColor;
pub use rough::{RoughDrawable, RoughGenerator, RoughOptions};
pub use surface::{RenderResult, RendererError, SurfaceStyle, SvgSurface};
