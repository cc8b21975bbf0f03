use crate::polygon::*;

use flo_curves::geo::{Coord2, Coordinate, Coordinate2D};
use flo_curves::bezier::{fit_curve, BezierCurve, Curve};

use std::iter;

/// Maximum number of times a curve is subdivided while flattening it
const MAX_SUBDIVISIONS: usize = 16;

///
/// How collider outlines are simplified
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum SimplificationMode {
    /// Remove points that are within the tolerance of the line joining their neighbours
    Vertices,

    /// Fit bezier curves to the outline and flatten them again at the tolerance
    Curves,
}

impl Default for SimplificationMode {
    fn default() -> SimplificationMode {
        SimplificationMode::Vertices
    }
}

impl SimplificationMode {
    ///
    /// Simplifies a closed outline using this mode
    ///
    pub fn optimise(&self, points: &[Coord2], tolerance: f64) -> Vec<Coord2> {
        match self {
            SimplificationMode::Vertices    => optimise_outline(points, tolerance),
            SimplificationMode::Curves      => optimise_outline_curves(points, tolerance),
        }
    }
}

///
/// Distance from a point to the line segment between two others
///
fn distance_to_segment(point: Coord2, start: Coord2, end: Coord2) -> f64 {
    let (dx, dy)    = (end.x()-start.x(), end.y()-start.y());
    let length_sq   = dx*dx + dy*dy;

    if length_sq == 0.0 {
        return point.distance_to(&start);
    }

    let t       = (((point.x()-start.x())*dx + (point.y()-start.y())*dy) / length_sq).max(0.0).min(1.0);
    let nearest = Coord2(start.x() + dx*t, start.y() + dy*t);

    point.distance_to(&nearest)
}

///
/// Marks the points in a chain (a list of indexes into `points`) that need to be kept to stay within the tolerance
///
/// The first and last points in the chain are assumed to be kept already.
///
fn mark_chain(points: &[Coord2], chain: &[usize], tolerance: f64, keep: &mut [bool]) {
    if chain.len() < 3 {
        return;
    }

    let start   = points[chain[0]];
    let end     = points[chain[chain.len()-1]];

    // Find the point furthest from the line joining the ends of this chain
    let (furthest_idx, furthest_distance) = chain[1..chain.len()-1].iter()
        .enumerate()
        .map(|(idx, point_idx)| (idx+1, distance_to_segment(points[*point_idx], start, end)))
        .fold((0, -1.0), |(best_idx, best_dist), (idx, dist)| if dist > best_dist { (idx, dist) } else { (best_idx, best_dist) });

    if furthest_distance > tolerance {
        keep[chain[furthest_idx]] = true;

        mark_chain(points, &chain[0..=furthest_idx], tolerance, keep);
        mark_chain(points, &chain[furthest_idx..], tolerance, keep);
    }
}

///
/// Reduces the number of points in a closed outline, removing any that are within `tolerance` of the
/// outline formed by the points that remain
///
/// The loop is split at its first point and the point furthest from it, and each half is simplified
/// separately. Outlines with fewer than 3 distinct points are returned as they are.
///
pub fn optimise_outline(points: &[Coord2], tolerance: f64) -> Vec<Coord2> {
    let points = remove_duplicate_points(points);
    if points.len() < 3 {
        return points;
    }

    let first       = points[0];
    let opposite    = points.iter()
        .enumerate()
        .skip(1)
        .fold((0, 0.0), |(best_idx, best_dist), (idx, point)| {
            let dist = point.distance_to(&first);
            if dist > best_dist { (idx, dist) } else { (best_idx, best_dist) }
        }).0;

    if opposite == 0 {
        return vec![first];
    }

    let mut keep        = vec![false; points.len()];
    keep[0]             = true;
    keep[opposite]      = true;

    let there           = (0..=opposite).collect::<Vec<_>>();
    let back            = (opposite..points.len()).chain(iter::once(0)).collect::<Vec<_>>();

    mark_chain(&points, &there, tolerance, &mut keep);
    mark_chain(&points, &back, tolerance, &mut keep);

    points.into_iter()
        .zip(keep.into_iter())
        .filter(|(_, keep)| *keep)
        .map(|(point, _)| point)
        .collect()
}

///
/// Linear interpolation between two points
///
#[inline]
fn lerp(a: Coord2, b: Coord2, t: f64) -> Coord2 {
    Coord2(a.x() + (b.x()-a.x())*t, a.y() + (b.y()-a.y())*t)
}

///
/// Flattens a cubic bezier section into a set of points, leaving out the end point
///
fn flatten_section(start: Coord2, cp1: Coord2, cp2: Coord2, end: Coord2, flatness: f64, depth: usize, output: &mut Vec<Coord2>) {
    let is_flat = distance_to_segment(cp1, start, end) <= flatness && distance_to_segment(cp2, start, end) <= flatness;

    if is_flat || depth >= MAX_SUBDIVISIONS {
        output.push(start);
    } else {
        // Split in half with de Casteljau's algorithm
        let p01     = lerp(start, cp1, 0.5);
        let p12     = lerp(cp1, cp2, 0.5);
        let p23     = lerp(cp2, end, 0.5);
        let p012    = lerp(p01, p12, 0.5);
        let p123    = lerp(p12, p23, 0.5);
        let mid     = lerp(p012, p123, 0.5);

        flatten_section(start, p01, p012, mid, flatness, depth+1, output);
        flatten_section(mid, p123, p23, end, flatness, depth+1, output);
    }
}

///
/// Simplifies a closed outline by fitting bezier curves through it and then flattening those curves
/// again with a flatness equal to the tolerance
///
/// This produces smoother results than `optimise_outline()` for outlines that came from curves, at the
/// cost of not preserving the original points. The result never has more points than the outline: when
/// the curves can't be fitted or flattening them doesn't reduce the number of points, the outline is
/// simplified with `optimise_outline()` instead.
///
pub fn optimise_outline_curves(points: &[Coord2], tolerance: f64) -> Vec<Coord2> {
    let points = remove_duplicate_points(points);
    if points.len() < 3 {
        return points;
    }

    // Fit through the closed loop so the last curve returns to the start
    let closed_loop = points.iter().copied().chain(iter::once(points[0])).collect::<Vec<_>>();
    let curves      = match fit_curve::<Curve<Coord2>>(&closed_loop, tolerance) {
        Some(curves)    => curves,
        None            => { return optimise_outline(&points, tolerance); }
    };

    let mut flattened = vec![];
    for curve in curves.iter() {
        let (cp1, cp2) = curve.control_points();
        flatten_section(curve.start_point(), cp1, cp2, curve.end_point(), tolerance, 0, &mut flattened);
    }

    let flattened = remove_duplicate_points(&flattened);

    if flattened.len() < 3 || flattened.len() >= points.len() {
        optimise_outline(&points, tolerance)
    } else {
        flattened
    }
}
