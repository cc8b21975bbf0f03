//!
//! # flo_svg_collider
//!
//! `flo_svg_collider` derives the outlines used for 2D physics colliders from the filled shapes in an
//! imported SVG document.
//!
//! `generate_collider_paths()` is a pure function that takes the outlines of a shape along with a
//! `ColliderSettings` and returns a new set of outlines: each one simplified according to the quality
//! setting, moved outwards or inwards by the offset and discarded if there's not enough of it left to
//! enclose an area.
//!
//! `SvgCollider` wraps this up using `flo_binding`: it follows a `ColliderShapeSource` and its own
//! quality and offset bindings, regenerating the outlines from scratch whenever any of them change.
//! `when_paths_changed()` can be used to find out when the outlines need to be installed again.
//!
//! Nothing here reports an error to the caller: degenerate outlines are left out and a missing shape
//! produces no outlines. `generate_collider_paths_with_diagnostics()` reports what was left out.
//!
#![warn(bare_trait_objects)]

#[macro_use]
extern crate serde_derive;

mod offset;
mod polygon;
mod collider;
mod optimise;
mod settings;
mod generator;

pub use self::offset::*;
pub use self::polygon::*;
pub use self::collider::*;
pub use self::optimise::*;
pub use self::settings::*;
pub use self::generator::*;

pub use flo_curves as curves;
pub use flo_curves::geo::{Coordinate2D, Coord2};
