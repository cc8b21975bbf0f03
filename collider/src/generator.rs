use crate::polygon::*;
use crate::offset::*;
use crate::settings::*;

use flo_curves::geo::{Coord2};

use log::{debug, trace};

///
/// The source outlines for a collider
///
#[derive(Clone, PartialEq, Debug)]
pub struct ColliderShape {
    pub polygons:   Vec<Polygon2D>,

    /// The bounds of the whole shape (used to scale the simplification tolerance)
    pub bounds:     Bounds,
}

///
/// Describes something that was discarded or adjusted while generating collider outlines
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ColliderDiagnostic {
    /// There was no shape to generate outlines from
    NoShapeData,

    /// The quality was below the minimum and was clamped
    QualityClamped(f64),

    /// The polygon at this index had too few points after simplifying and offsetting
    RejectedPolygon { index: usize, points: usize },
}

impl ColliderShape {
    ///
    /// Creates a shape from a set of polygons, using their combined bounds
    ///
    pub fn new(polygons: Vec<Polygon2D>) -> ColliderShape {
        let bounds = Bounds::from_polygons(&polygons).unwrap_or_else(|| Bounds::new(Coord2(0.0, 0.0), Coord2(0.0, 0.0)));

        ColliderShape { polygons, bounds }
    }

    ///
    /// Creates a shape with bounds supplied by the caller
    ///
    pub fn with_bounds(polygons: Vec<Polygon2D>, bounds: Bounds) -> ColliderShape {
        ColliderShape { polygons, bounds }
    }
}

///
/// Generates the collider outlines for a shape
///
/// Each polygon is simplified (unless the quality is 1), offset (unless the offset is 0) and then
/// discarded if it has fewer than 3 points left. Polygons are processed independently, so a
/// degenerate polygon never affects the others. No shape produces no outlines.
///
pub fn generate_collider_paths(shape: Option<&ColliderShape>, settings: &ColliderSettings) -> Vec<Polygon2D> {
    generate_collider_paths_with_diagnostics(shape, settings).0
}

///
/// As for `generate_collider_paths()`, but also reports what was discarded
///
pub fn generate_collider_paths_with_diagnostics(shape: Option<&ColliderShape>, settings: &ColliderSettings) -> (Vec<Polygon2D>, Vec<ColliderDiagnostic>) {
    let shape = match shape {
        Some(shape) if !shape.polygons.is_empty()   => shape,
        _                                           => { return (vec![], vec![ColliderDiagnostic::NoShapeData]); }
    };

    let mut diagnostics = vec![];
    if settings.quality_is_clamped() {
        diagnostics.push(ColliderDiagnostic::QualityClamped(settings.quality));
    }

    let tolerance = settings.simplification_tolerance(&shape.bounds);

    let mut paths = vec![];
    for (idx, polygon) in shape.polygons.iter().enumerate() {
        let points = match tolerance {
            Some(tolerance) => settings.simplification.optimise(polygon.points(), tolerance),
            None            => polygon.points().to_vec(),
        };

        let points = if settings.offset != 0.0 {
            offset_polygon(&points, settings.offset)
        } else {
            points
        };

        if points.len() > 2 {
            paths.push(Polygon2D::new(points));
        } else {
            trace!("Rejecting collider polygon {} ({} points remaining)", idx, points.len());
            diagnostics.push(ColliderDiagnostic::RejectedPolygon { index: idx, points: points.len() });
        }
    }

    debug!("Generated {} collider paths from {} polygons (tolerance {:?}, offset {})", paths.len(), shape.polygons.len(), tolerance, settings.offset);

    (paths, diagnostics)
}
