use crate::color::*;
use crate::gradient::*;
use crate::gradient_ramp::*;
use crate::transform2d::*;

///
/// The kind of paint used by a fill
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum FillType {
    Solid,
    Gradient,
}

///
/// The shape of a gradient fill
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum GradientType {
    Linear,
    Radial,
    Conical,
}

///
/// An axis-aligned rectangle (used for viewports and shape bounds)
///
#[derive(Clone, Copy, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x:      f32,
    pub y:      f32,
    pub width:  f32,
    pub height: f32,
}

///
/// A length from an SVG attribute
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub enum SvgLength {
    /// A length in user units
    Absolute(f32),

    /// A percentage of a reference length (usually one of the dimensions of the shape's bounds)
    Percent(f32),
}

///
/// Describes how a shape should be filled
///
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Fill {
    /// The base colour (gradient fills multiply the gradient by this, so it's normally white)
    pub color:          Color,
    pub blend:          FillBlend,
    pub fill_type:      FillType,

    /// The gradient type, for gradient fills
    pub gradient_type:  Option<GradientType>,

    /// The row in the gradient atlas containing the ramp for this fill
    pub gradient:       Option<GradientId>,

    pub viewport:       Rect,

    /// Maps from the unit gradient space to the space of the shape being filled
    pub transform:      Transform2D,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Rect {
        Rect { x, y, width, height }
    }
}

impl SvgLength {
    ///
    /// Resolves this length against a reference length
    ///
    #[inline]
    pub fn resolve(&self, reference: f32) -> f32 {
        match self {
            SvgLength::Absolute(length) => *length,
            SvgLength::Percent(percent) => reference * percent * 0.01,
        }
    }
}

impl Fill {
    ///
    /// Creates a solid colour fill
    ///
    pub fn solid(color: Color) -> Fill {
        let blend = if color.is_translucent() { FillBlend::AlphaBlended } else { FillBlend::Opaque };

        Fill {
            color:          color,
            blend:          blend,
            fill_type:      FillType::Solid,
            gradient_type:  None,
            gradient:       None,
            viewport:       Rect::default(),
            transform:      Transform2D::identity(),
        }
    }

    ///
    /// Creates a gradient fill using a ramp that's already stored in an atlas
    ///
    pub fn gradient(gradient_type: GradientType, blend: FillBlend, gradient: GradientId) -> Fill {
        Fill {
            color:          Color::Rgba(1.0, 1.0, 1.0, 1.0),
            blend:          blend,
            fill_type:      FillType::Gradient,
            gradient_type:  Some(gradient_type),
            gradient:       Some(gradient),
            viewport:       Rect::default(),
            transform:      Transform2D::identity(),
        }
    }

    ///
    /// Maps a point in the space of the shape being filled back into the unit gradient space
    ///
    /// For a conical gradient, the distance of the result from the origin is the position along the ramp.
    /// Returns None if the fill transform can't be inverted (for example, a gradient with a radius of 0).
    ///
    pub fn gradient_point(&self, x: f32, y: f32) -> Option<(f32, f32)> {
        self.transform.invert()
            .map(|inverse| inverse.transform_point(x, y))
    }
}
