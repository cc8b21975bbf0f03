use crate::polygon::*;
use crate::optimise::*;
use crate::settings::*;
use crate::generator::*;

use flo_binding::*;
use log::{debug, warn};

use std::sync::{Arc};

///
/// Supplies the shape that a collider is generated from
///
/// Cloning a source produces another handle to the same shape. Replacing the shape notifies every
/// collider generated from it.
///
#[derive(Clone)]
pub struct ColliderShapeSource {
    shape: Binding<Option<ColliderShape>>,
}

///
/// A set of collider outlines that's kept up to date with its source shape and settings
///
/// Any change to the quality, offset, simplification mode or source shape regenerates all of the outlines
/// from the source shape: outlines are never updated incrementally.
///
pub struct SvgCollider {
    source:         ColliderShapeSource,
    quality:        Binding<f64>,
    offset:         Binding<f64>,
    simplification: Binding<SimplificationMode>,
    paths:          BindRef<Vec<Polygon2D>>,
}

impl ColliderShapeSource {
    ///
    /// Creates a source with no shape
    ///
    pub fn new() -> ColliderShapeSource {
        ColliderShapeSource { shape: bind(None) }
    }

    ///
    /// Creates a source with an initial shape
    ///
    pub fn with_shape(shape: ColliderShape) -> ColliderShapeSource {
        ColliderShapeSource { shape: bind(Some(shape)) }
    }

    ///
    /// Replaces the shape
    ///
    pub fn set_shape(&self, shape: ColliderShape) {
        self.shape.set(Some(shape));
    }

    ///
    /// Removes the shape, leaving colliders with no outlines
    ///
    pub fn clear(&self) {
        self.shape.set(None);
    }

    ///
    /// The current shape
    ///
    pub fn shape(&self) -> Option<ColliderShape> {
        self.shape.get()
    }

    ///
    /// Calls a notifiable when the shape changes
    ///
    pub fn when_changed(&self, what: Arc<dyn Notifiable>) -> Box<dyn Releasable> {
        self.shape.when_changed(what)
    }
}

impl Default for ColliderShapeSource {
    fn default() -> ColliderShapeSource {
        ColliderShapeSource::new()
    }
}

impl SvgCollider {
    ///
    /// Creates a collider using the default settings
    ///
    pub fn new(source: &ColliderShapeSource) -> SvgCollider {
        Self::with_settings(source, ColliderSettings::default())
    }

    ///
    /// Creates a collider with the specified settings
    ///
    pub fn with_settings(source: &ColliderShapeSource, settings: ColliderSettings) -> SvgCollider {
        let quality         = bind(clamp_quality(settings.quality).unwrap_or(1.0));
        let offset          = bind(if settings.offset.is_finite() { settings.offset } else { 0.0 });
        let simplification  = bind(settings.simplification);

        let paths = {
            let shape           = source.shape.clone();
            let quality         = quality.clone();
            let offset          = offset.clone();
            let simplification  = simplification.clone();

            computed(move || {
                let settings = ColliderSettings {
                    quality:        quality.get(),
                    offset:         offset.get(),
                    simplification: simplification.get(),
                };

                generate_collider_paths(shape.get().as_ref(), &settings)
            })
        };

        SvgCollider {
            source:         source.clone(),
            quality:        quality,
            offset:         offset,
            simplification: simplification,
            paths:          BindRef::from(paths),
        }
    }

    ///
    /// Sets the quality (clamped to between 0 and 1)
    ///
    pub fn set_quality(&self, quality: f64) {
        match clamp_quality(quality) {
            Some(quality) => {
                if self.quality.get() != quality {
                    debug!("Collider quality changed to {}", quality);
                    self.quality.set(quality);
                }
            }

            None => { warn!("Ignoring collider quality {}", quality); }
        }
    }

    ///
    /// Sets the distance that the outlines are moved outwards (or inwards, if negative)
    ///
    pub fn set_offset(&self, offset: f64) {
        if !offset.is_finite() {
            warn!("Ignoring collider offset {}", offset);
        } else if self.offset.get() != offset {
            debug!("Collider offset changed to {}", offset);
            self.offset.set(offset);
        }
    }

    ///
    /// Changes how outlines are simplified
    ///
    pub fn set_simplification(&self, simplification: SimplificationMode) {
        self.simplification.set(simplification);
    }

    ///
    /// The source this collider is generated from
    ///
    pub fn source(&self) -> &ColliderShapeSource {
        &self.source
    }

    ///
    /// The current settings for this collider
    ///
    pub fn settings(&self) -> ColliderSettings {
        ColliderSettings {
            quality:        self.quality.get(),
            offset:         self.offset.get(),
            simplification: self.simplification.get(),
        }
    }

    ///
    /// The current collider outlines
    ///
    pub fn paths(&self) -> Vec<Polygon2D> {
        self.paths.get()
    }

    ///
    /// A binding that follows the collider outlines
    ///
    pub fn paths_binding(&self) -> BindRef<Vec<Polygon2D>> {
        self.paths.clone()
    }

    ///
    /// Calls a notifiable when the outlines need to be regenerated
    ///
    /// The notification is sent once per change: read `paths()` to receive the next one. Call `done()` on
    /// the returned value to stop receiving notifications (dropping it without calling `keep_alive()` also
    /// stops them).
    ///
    pub fn when_paths_changed(&self, what: Arc<dyn Notifiable>) -> Box<dyn Releasable> {
        self.paths.when_changed(what)
    }
}

///
/// Clamps a quality value to the range 0-1, or returns None if it's not a number
///
fn clamp_quality(quality: f64) -> Option<f64> {
    if quality.is_nan() {
        None
    } else {
        Some(quality.max(0.0).min(1.0))
    }
}
