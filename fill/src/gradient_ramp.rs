use crate::color::*;
use crate::gradient::*;

use log::{debug, trace};

/// Offset (as a percentage) that every ramp is extended to
const FINAL_OFFSET: f32 = 100.0;

///
/// A control point read from an SVG `<stop>` element
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct GradientStop {
    /// The offset of this stop as a percentage (nominally between 0 and 100, but not guaranteed to be sorted or in range)
    pub offset: f32,

    /// The colour at this stop
    pub color:  Color,
}

///
/// A colour key in a gradient ramp
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct GradientColorKey {
    pub color:      Color,
    pub position:   f32,
}

///
/// An alpha key in a gradient ramp
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct GradientAlphaKey {
    pub alpha:      f32,
    pub position:   f32,
}

///
/// How a fill should be composited
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum FillBlend {
    Opaque,
    AlphaBlended,
}

///
/// A normalized gradient ramp, ready to be sampled into a lookup texture
///
/// The color and alpha keys always have the same length and positions. When the ramp is not
/// empty, the first position is 0, the last is 1 and the positions in between never decrease.
///
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct GradientRamp {
    /// The percentage offset that each key was built from
    offsets:        Vec<f32>,

    color_keys:     Vec<GradientColorKey>,
    alpha_keys:     Vec<GradientAlphaKey>,
    alpha_blended:  bool,
}

///
/// Describes what happened to a stop while building a ramp
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GradientDiagnostic {
    /// The stop at this index was out of order or past 100% and was left out of the ramp
    DroppedStop { index: usize, offset: f32 },

    /// The stop at this index had the same offset as the previous stop and replaced its colour
    MergedStop { index: usize, offset: f32 },

    /// The stops did not reach 100% so the last colour was repeated at the end of the ramp
    SyntheticEnd,
}

///
/// State carried while folding over the stops in a gradient
///
struct RampFold {
    /// The accepted (offset, color) entries
    entries:        Vec<(f32, Color)>,

    /// True if any of the stops seen so far were translucent
    alpha_blended:  bool,

    /// What happened to the stops that were not simply appended
    diagnostics:    Vec<GradientDiagnostic>,
}

impl RampFold {
    ///
    /// Starts a fold with the colour of the first stop, which always goes at offset 0
    ///
    fn start(first: &GradientStop) -> RampFold {
        let TranslucentColor { color, was_translucent } = first.color.read_translucent();

        RampFold {
            entries:        vec![(0.0, color)],
            alpha_blended:  was_translucent,
            diagnostics:    vec![],
        }
    }

    #[inline]
    fn last_offset(&self) -> f32 {
        self.entries.last().map(|(offset, _)| *offset).unwrap_or(0.0)
    }

    ///
    /// Folds a stop into the ramp
    ///
    fn accept(mut self, index: usize, stop: &GradientStop) -> RampFold {
        let TranslucentColor { color, was_translucent } = stop.color.read_translucent();
        let last_offset = self.last_offset();

        self.alpha_blended = self.alpha_blended || was_translucent;

        if stop.offset > last_offset && stop.offset <= FINAL_OFFSET {
            self.entries.push((stop.offset, color));
        } else if stop.offset == last_offset {
            if let Some(last) = self.entries.last_mut() {
                last.1 = color;
            }

            self.diagnostics.push(GradientDiagnostic::MergedStop { index, offset: stop.offset });
        } else {
            trace!("Dropping gradient stop {} at offset {} (last accepted offset {})", index, stop.offset, last_offset);
            self.diagnostics.push(GradientDiagnostic::DroppedStop { index, offset: stop.offset });
        }

        self
    }

    ///
    /// Extends the ramp to 100% if the stops stopped short of it
    ///
    fn finish(mut self) -> RampFold {
        if let Some((last_offset, last_color)) = self.entries.last().copied() {
            if last_offset != FINAL_OFFSET {
                self.entries.push((FINAL_OFFSET, last_color));
                self.diagnostics.push(GradientDiagnostic::SyntheticEnd);
            }
        }

        self
    }
}

///
/// Converts a percentage offset to a position in the unit interval
///
#[inline]
fn offset_to_position(offset: f32) -> f32 {
    (offset * 0.01).max(0.0).min(1.0)
}

///
/// Builds a gradient ramp from the stops in an SVG gradient element
///
/// Malformed stops are never an error: stops that are out of order or beyond 100% are dropped, stops
/// that share an offset collapse to the colour of the last one, and the ramp is always extended to
/// cover the whole range.
///
pub fn build_gradient_ramp(stops: &[GradientStop]) -> GradientRamp {
    build_gradient_ramp_with_diagnostics(stops).0
}

///
/// As for `build_gradient_ramp()`, but also reports which stops were altered or dropped
///
pub fn build_gradient_ramp_with_diagnostics(stops: &[GradientStop]) -> (GradientRamp, Vec<GradientDiagnostic>) {
    let (first, remaining) = match stops.split_first() {
        Some(split) => split,
        None        => { return (GradientRamp::empty(), vec![]); }
    };

    let ramp = remaining.iter()
        .enumerate()
        .fold(RampFold::start(first), |ramp, (idx, stop)| ramp.accept(idx+1, stop))
        .finish();

    let RampFold { entries, alpha_blended, diagnostics } = ramp;

    let color_keys = entries.iter()
        .map(|(offset, color)| GradientColorKey { color: *color, position: offset_to_position(*offset) })
        .collect::<Vec<_>>();
    let alpha_keys = entries.iter()
        .map(|(offset, color)| GradientAlphaKey { alpha: color.alpha_component(), position: offset_to_position(*offset) })
        .collect::<Vec<_>>();

    let offsets = entries.iter()
        .map(|(offset, _)| *offset)
        .collect::<Vec<_>>();

    debug!("Built gradient ramp with {} keys from {} stops (alpha blended: {})", color_keys.len(), stops.len(), alpha_blended);

    (GradientRamp { offsets, color_keys, alpha_keys, alpha_blended }, diagnostics)
}

impl GradientRamp {
    ///
    /// A ramp with no colour data
    ///
    pub fn empty() -> GradientRamp {
        GradientRamp {
            offsets:        vec![],
            color_keys:     vec![],
            alpha_keys:     vec![],
            alpha_blended:  false,
        }
    }

    #[inline] pub fn is_empty(&self) -> bool                        { self.color_keys.is_empty() }
    #[inline] pub fn len(&self) -> usize                            { self.color_keys.len() }
    #[inline] pub fn color_keys(&self) -> &[GradientColorKey]       { &self.color_keys }
    #[inline] pub fn alpha_keys(&self) -> &[GradientAlphaKey]       { &self.alpha_keys }
    #[inline] pub fn alpha_blended(&self) -> bool                   { self.alpha_blended }

    ///
    /// The compositing mode a fill using this ramp needs
    ///
    pub fn fill_blend(&self) -> FillBlend {
        if self.alpha_blended {
            FillBlend::AlphaBlended
        } else {
            FillBlend::Opaque
        }
    }

    ///
    /// Converts this ramp back into a list of percentage stops
    ///
    /// The stops use the offsets and colours exactly as they were accepted, so building a ramp from
    /// them produces the same keys again.
    ///
    pub fn to_stops(&self) -> Vec<GradientStop> {
        self.offsets.iter()
            .zip(self.color_keys.iter())
            .map(|(offset, color_key)| GradientStop {
                offset: *offset,
                color:  color_key.color,
            })
            .collect()
    }

    ///
    /// Returns the operations that define this ramp as a gradient
    ///
    pub fn gradient_ops(&self) -> Vec<GradientOp> {
        self.color_keys.iter()
            .zip(self.alpha_keys.iter())
            .enumerate()
            .map(|(idx, (color_key, alpha_key))| {
                let color = color_key.color.with_alpha(alpha_key.alpha);

                if idx == 0 {
                    GradientOp::New(color)
                } else {
                    GradientOp::AddStop(color_key.position, color)
                }
            })
            .collect()
    }

    ///
    /// Samples this ramp into a row of 8-bit RGBA texels
    ///
    pub fn to_scale<const N: usize>(&self) -> [[u8; 4]; N] {
        gradient_scale::<_, N>(self.gradient_ops())
    }
}

impl Default for GradientRamp {
    fn default() -> GradientRamp {
        GradientRamp::empty()
    }
}
