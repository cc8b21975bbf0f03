use crate::polygon::*;
use crate::optimise::*;

use std::error::{Error};
use std::fmt;

/// Quality values below this are clamped so the tolerance calculation never divides by zero
pub const MIN_QUALITY: f64 = 0.001;

/// The smallest size-relative tolerance used when simplifying
pub const MIN_TOLERANCE: f64 = 0.001;

/// Converts the size-relative tolerance into a distance
pub const TOLERANCE_SCALE: f64 = 0.05;

///
/// Settings that control how collider outlines are generated
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ColliderSettings {
    /// How closely the collider follows the shape: 1.0 uses the outlines exactly, lower values simplify more
    pub quality:        f64,

    /// Distance to move the outlines outwards (positive) or inwards (negative)
    pub offset:         f64,

    /// The algorithm used to simplify outlines when quality is below 1
    pub simplification: SimplificationMode,
}

///
/// Reasons that a set of collider settings might be rejected by `ColliderSettings::validate()`
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SettingsError {
    /// The quality was not between 0 and 1
    QualityOutOfRange(f64),

    /// The offset was infinite or NaN
    NonFiniteOffset(f64),
}

impl Default for ColliderSettings {
    fn default() -> ColliderSettings {
        ColliderSettings {
            quality:        0.9,
            offset:         0.0,
            simplification: SimplificationMode::Vertices,
        }
    }
}

impl ColliderSettings {
    ///
    /// The distance within which points are simplified away for a shape with the specified bounds
    ///
    /// Returns None when the quality is 1 (or above), which means the outlines should not be simplified at all.
    ///
    pub fn simplification_tolerance(&self, bounds: &Bounds) -> Option<f64> {
        if self.quality < 1.0 {
            let quality     = self.quality.max(MIN_QUALITY);
            let tolerance   = bounds.max_extent() / quality;
            let tolerance   = tolerance.max(MIN_TOLERANCE);

            Some(tolerance * TOLERANCE_SCALE)
        } else {
            None
        }
    }

    ///
    /// True if the quality will be clamped when generating outlines
    ///
    pub fn quality_is_clamped(&self) -> bool {
        self.quality < MIN_QUALITY
    }

    ///
    /// Checks that these settings are in range
    ///
    /// Collider generation accepts any settings (clamping where it needs to), so this is only needed by
    /// callers that want to report bad values.
    ///
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(self.quality >= 0.0 && self.quality <= 1.0) {
            return Err(SettingsError::QualityOutOfRange(self.quality));
        }

        if !self.offset.is_finite() {
            return Err(SettingsError::NonFiniteOffset(self.offset));
        }

        Ok(())
    }
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SettingsError::QualityOutOfRange(quality)   => write!(f, "collider quality {} is not between 0 and 1", quality),
            SettingsError::NonFiniteOffset(offset)      => write!(f, "collider offset {} is not a finite number", offset),
        }
    }
}

impl Error for SettingsError { }
