use crate::fill::*;
use crate::gradient::*;
use crate::gradient_ramp::*;
use crate::transform2d::*;

///
/// The values read from an SVG conical gradient element
///
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct ConicalGradientElement {
    pub cx:                 SvgLength,
    pub cy:                 SvgLength,
    pub r:                  SvgLength,
    pub gradient_transform: Transform2D,
    pub stops:              Vec<GradientStop>,
}

///
/// Turns a conical gradient element into a fill
///
/// The ramp for the gradient is added to the atlas when the brush is created.
///
#[derive(Clone, Debug)]
pub struct ConicalGradientBrush {
    ramp:   GradientRamp,
    fill:   Fill,
}

impl Default for ConicalGradientElement {
    fn default() -> ConicalGradientElement {
        ConicalGradientElement {
            cx:                 SvgLength::Percent(50.0),
            cy:                 SvgLength::Percent(50.0),
            r:                  SvgLength::Percent(50.0),
            gradient_transform: Transform2D::identity(),
            stops:              vec![],
        }
    }
}

impl ConicalGradientBrush {
    ///
    /// Creates a brush with an identity fill transform
    ///
    pub fn new(element: &ConicalGradientElement, atlas: &mut GradientAtlas) -> ConicalGradientBrush {
        let ramp        = build_gradient_ramp(&element.stops);
        let gradient    = atlas.add_gradient(ramp.clone());
        let fill        = Fill::gradient(GradientType::Conical, ramp.fill_blend(), gradient);

        ConicalGradientBrush { ramp, fill }
    }

    ///
    /// Creates a brush for a shape with the specified bounds, transform and viewport
    ///
    pub fn with_bounds(element: &ConicalGradientElement, bounds: Rect, matrix: Transform2D, viewport: Rect, atlas: &mut GradientAtlas) -> ConicalGradientBrush {
        let mut brush = Self::new(element, atlas);

        brush.fill.viewport     = viewport;
        brush.fill.transform    = conical_fill_transform(element, bounds, matrix);

        brush
    }

    #[inline] pub fn fill(&self) -> &Fill           { &self.fill }
    #[inline] pub fn ramp(&self) -> &GradientRamp   { &self.ramp }
    #[inline] pub fn alpha_blended(&self) -> bool   { self.ramp.alpha_blended() }

    ///
    /// Consumes this brush, returning its fill
    ///
    pub fn into_fill(self) -> Fill {
        self.fill
    }
}

///
/// Works out the transform that maps the unit circle of a conical gradient onto a shape
///
fn conical_fill_transform(element: &ConicalGradientElement, bounds: Rect, matrix: Transform2D) -> Transform2D {
    // Percentages are relative to the shape's bounding box, absolute lengths are already in user space
    let coordinate = |length: SvgLength, origin: f32, extent: f32| {
        match length {
            SvgLength::Percent(_)       => origin + length.resolve(extent),
            SvgLength::Absolute(pos)    => pos,
        }
    };

    let cx      = coordinate(element.cx, bounds.x, bounds.width);
    let cy      = coordinate(element.cy, bounds.y, bounds.height);
    let r       = element.r.resolve((bounds.width + bounds.height) * 0.5);

    matrix
        * element.gradient_transform
        * Transform2D::translate(cx, cy)
        * Transform2D::scale(r, r)
}
