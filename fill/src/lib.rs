//!
//! # flo_svg_fill
//!
//! `flo_svg_fill` converts the paint servers found in an SVG document into fills that can be rendered
//! by a mesh renderer.
//!
//! The main entry point is `build_gradient_ramp()`, which turns the (often malformed) list of stops
//! from a gradient element into a normalized ramp of colour and alpha keys. Ramps can be collected
//! into a `GradientAtlas`, which samples each one into a row of a lookup texture, and
//! `ConicalGradientBrush` shows how a gradient element becomes a `Fill` with a transform that maps
//! the gradient onto the shape it's painting.
//!
//! Nothing in this crate reports an error: stops that can't be used are dropped and a ramp is always
//! produced. `build_gradient_ramp_with_diagnostics()` can be used to find out what was dropped.
//!
//! `SvgTransform2D` and `decompose_matrix()` convert between scene-graph matrices and the
//! position/rotation/scale form used by imported shapes.
//!
#![warn(bare_trait_objects)]

#[macro_use]
extern crate serde_derive;

mod fill;
mod color;
mod gradient;
mod transform2d;
mod gradient_ramp;
mod svg_transform;
mod conical_gradient;

pub use self::fill::*;
pub use self::color::*;
pub use self::gradient::*;
pub use self::transform2d::*;
pub use self::gradient_ramp::*;
pub use self::svg_transform::*;
pub use self::conical_gradient::*;
