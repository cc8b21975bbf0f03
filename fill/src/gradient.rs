use crate::color::*;
use crate::gradient_ramp::*;

use itertools::*;
use log::{debug};

use std::cmp::{Ordering};

///
/// Identifies a gradient stored in a gradient atlas
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GradientId(pub u64);

///
/// Operations that can be applied to a gradient
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GradientOp {
    /// Clears the gradient and starts a new one with the given initial colour
    New(Color),

    /// Adds a new gradient stop of the specified colour
    AddStop(f32, Color)
}

///
/// Converts a f32 value between 0 and 1 to a byte
///
#[inline]
fn colour_component_to_byte(component: f32) -> u8 {
    if component < 0.0 {
        0
    } else if component > 1.0 {
        255
    } else {
        (component * 255.0) as u8
    }
}

///
/// Converts a floating point quad to a set of RGBA bytes
///
#[inline]
fn components_to_bytes(components: (f32, f32, f32, f32)) -> [u8; 4] {
    [
        colour_component_to_byte(components.0),
        colour_component_to_byte(components.1),
        colour_component_to_byte(components.2),
        colour_component_to_byte(components.3)
    ]
}

///
/// Creates a gradient scale, as 8-bit RGBA quads from a set of gradient operations
///
/// This is the row that's written to the lookup texture for a gradient fill.
///
pub fn gradient_scale<GradientIter: IntoIterator<Item=GradientOp>, const N: usize>(description: GradientIter) -> [[u8; 4]; N] {
    let mut scale = [[0, 0, 0, 0]; N];

    // Order the stops by position
    let mut stops = description.into_iter()
        .map(|op| match op {
            GradientOp::New(col)            => (0.0, col.to_rgba_components()),
            GradientOp::AddStop(pos, col)   => (pos, col.to_rgba_components())
        })
        .collect::<Vec<_>>();

    stops.sort_by(|(pos_a, _), (pos_b, _)| pos_a.partial_cmp(pos_b).unwrap_or(Ordering::Equal));

    let min_pos = stops.first().map(|(pos, _)| *pos as f64);
    let max_pos = stops.last().map(|(pos, _)| *pos as f64);

    match (min_pos, max_pos) {
        // No stops means we return the blank scale
        (None, _) | (_, None)                           => scale,

        // Stops that all share a position produce a flat colour
        (Some(min_pos), Some(max_pos)) if max_pos <= min_pos  => [components_to_bytes(stops[stops.len()-1].1); N],

        (Some(min_pos), Some(max_pos)) => {
            if N == 0 { return scale; }

            let distance_per_step   = (max_pos - min_pos) / ((N.max(2)-1) as f64);
            let final_color         = components_to_bytes(stops[stops.len()-1].1);
            let mut idx             = 0;
            let mut stop_iter       = stops.into_iter().tuple_windows();
            let mut current_stop    = stop_iter.next();

            while idx < (N-1) {
                let pos = ((idx as f64) * distance_per_step) + min_pos;

                let ((start_pos, (r1, g1, b1, a1)), (end_pos, (r2, g2, b2, a2))) = match &current_stop {
                    Some(stop)  => stop,
                    None        => break,
                };

                let start_pos   = *start_pos as f64;
                let end_pos     = *end_pos as f64;

                // Move to the next stop if the current position is already past the end
                if pos >= end_pos {
                    current_stop = stop_iter.next();
                    continue;
                }

                // Blend the colour between the end position and the start position
                let ratio           = ((pos-start_pos)/(end_pos-start_pos)) as f32;
                let (r, g, b, a)    = (
                    (r2-r1)*ratio + r1,
                    (g2-g1)*ratio + g1,
                    (b2-b1)*ratio + b1,
                    (a2-a1)*ratio + a1
                );

                scale[idx]  = components_to_bytes((r, g, b, a));
                idx         += 1;
            }

            // Anything left over (including the last texel) is the final colour
            for texel in scale[idx..].iter_mut() {
                *texel = final_color;
            }

            scale
        }
    }
}

///
/// Collects the gradient ramps used by an imported document so they can be uploaded as a single texture
///
/// Each gradient occupies one row of the texture. Identical ramps share a row.
///
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct GradientAtlas {
    ramps: Vec<GradientRamp>,
}

impl GradientAtlas {
    ///
    /// Creates an empty atlas
    ///
    pub fn new() -> GradientAtlas {
        GradientAtlas { ramps: vec![] }
    }

    ///
    /// Adds a ramp to this atlas, returning the ID of the row it's stored in
    ///
    pub fn add_gradient(&mut self, ramp: GradientRamp) -> GradientId {
        if let Some(existing) = self.ramps.iter().position(|stored| stored == &ramp) {
            GradientId(existing as u64)
        } else {
            self.ramps.push(ramp);
            debug!("Gradient atlas now has {} rows", self.ramps.len());

            GradientId((self.ramps.len()-1) as u64)
        }
    }

    ///
    /// Retrieves the ramp with the specified ID
    ///
    pub fn get(&self, id: GradientId) -> Option<&GradientRamp> {
        self.ramps.get(id.0 as usize)
    }

    #[inline] pub fn len(&self) -> usize        { self.ramps.len() }
    #[inline] pub fn is_empty(&self) -> bool    { self.ramps.is_empty() }

    ///
    /// Samples every ramp in this atlas into a texture row of width N
    ///
    pub fn rows<const N: usize>(&self) -> Vec<[[u8; 4]; N]> {
        self.ramps.iter()
            .map(|ramp| ramp.to_scale::<N>())
            .collect()
    }
}
