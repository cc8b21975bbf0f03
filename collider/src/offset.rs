use crate::polygon::*;

use flo_curves::geo::{Coord2, Coordinate2D};

use smallvec::*;

/// Miters longer than this multiple of the offset distance are bevelled instead
const MITER_LIMIT: f64 = 4.0;

/// Offset polygons with less area than this are treated as having collapsed
const MIN_AREA: f64 = 1e-9;

/// Unit directions whose cross product is smaller than this are treated as parallel
const PARALLEL_EPSILON: f64 = 1e-9;

///
/// The outward-facing unit normal of each edge of a polygon
///
/// `orientation` is 1.0 for anticlockwise polygons and -1.0 for clockwise ones
///
fn edge_normals(points: &[Coord2], orientation: f64) -> Vec<(f64, f64)> {
    (0..points.len())
        .map(|idx| {
            let start   = points[idx];
            let end     = points[(idx+1) % points.len()];
            let (dx, dy)= (end.x()-start.x(), end.y()-start.y());
            let length  = (dx*dx + dy*dy).sqrt();

            (dy/length*orientation, -dx/length*orientation)
        })
        .collect()
}

///
/// Moves a single vertex along the bisector of the normals of the edges on either side of it
///
fn offset_vertex(point: Coord2, before: (f64, f64), after: (f64, f64), distance: f64) -> SmallVec<[Coord2; 2]> {
    let bisector        = (before.0 + after.0, before.1 + after.1);
    let bisector_len    = (bisector.0*bisector.0 + bisector.1*bisector.1).sqrt();

    // The miter length is distance / cos(half the angle between the normals), and cos(half angle) = |bisector|/2
    let half_cos        = bisector_len * 0.5;
    let miter_length    = if half_cos > 0.0 { distance / half_cos } else { f64::INFINITY };

    if miter_length.abs() > MITER_LIMIT * distance.abs() {
        // Bevel very sharp corners
        smallvec![
            Coord2(point.x() + before.0*distance, point.y() + before.1*distance),
            Coord2(point.x() + after.0*distance, point.y() + after.1*distance),
        ]
    } else {
        let direction = (bisector.0/bisector_len, bisector.1/bisector_len);

        smallvec![Coord2(point.x() + direction.0*miter_length, point.y() + direction.1*miter_length)]
    }
}

///
/// The unit vector pointing from one point to another (or zero if they're the same point)
///
fn unit_direction(from: Coord2, to: Coord2) -> (f64, f64) {
    let (dx, dy)    = (to.x()-from.x(), to.y()-from.y());
    let length      = (dx*dx + dy*dy).sqrt();

    if length > 0.0 { (dx/length, dy/length) } else { (0.0, 0.0) }
}

///
/// True if the segment starting at `idx` points against the direction it was generated with
///
fn is_reversed(points: &[Coord2], directions: &[(f64, f64)], idx: usize) -> bool {
    let start       = points[idx];
    let end         = points[(idx+1) % points.len()];
    let direction   = directions[idx];

    direction.0*(end.x()-start.x()) + direction.1*(end.y()-start.y()) <= 0.0
}

///
/// Where the line through `a` along `a_dir` meets the line through `b` along `b_dir`, or None if they're parallel
///
fn line_intersection(a: Coord2, a_dir: (f64, f64), b: Coord2, b_dir: (f64, f64)) -> Option<Coord2> {
    let cross = a_dir.0*b_dir.1 - a_dir.1*b_dir.0;

    if cross.abs() < PARALLEL_EPSILON {
        None
    } else {
        let t = ((b.x()-a.x())*b_dir.1 - (b.y()-a.y())*b_dir.0) / cross;
        Some(Coord2(a.x() + a_dir.0*t, a.y() + a_dir.1*t))
    }
}

///
/// Removes the segments of an inflated outline that have turned back on themselves
///
/// This happens when a concave notch is narrower than twice the offset. A reversed segment is removed by
/// joining the segments either side of it where their lines meet. When those segments are parallel (the
/// walls of a notch that has closed up), they're removed along with it and the outline is joined straight
/// across the gap.
///
fn remove_reversed_segments(mut points: Vec<Coord2>, mut directions: Vec<(f64, f64)>) -> Vec<Coord2> {
    loop {
        if points.len() < 3 {
            return vec![];
        }

        let reversed = match (0..points.len()).find(|idx| is_reversed(&points, &directions, *idx)) {
            Some(reversed)  => reversed,
            None            => { return points; }
        };

        // Move the segment before the reversed one to the start, so the reversed segment runs from point 1 to point 2
        let rotate = (reversed + points.len() - 1) % points.len();
        points.rotate_left(rotate);
        directions.rotate_left(rotate);

        match line_intersection(points[1], directions[0], points[2], directions[2]) {
            Some(join) => {
                points[1] = join;
                points.remove(2);
                directions.remove(1);
            }

            None => {
                // The segment bridging the gap keeps the direction of the segment it replaces
                points.remove(2);
                points.remove(1);
                directions.remove(2);
                directions.remove(0);
            }
        }
    }
}

///
/// Moves the edges of a closed polygon outwards (for a positive distance) or inwards (for a negative one)
///
/// The direction is the same regardless of the winding of the polygon. Growing a polygon closes up any
/// concave notches that are too narrow to survive. Shrinking a polygon until any of its edges collapse (turn
/// back on themselves) or it turns inside out produces an empty result. Polygons with fewer than 3 distinct
/// points are returned unchanged.
///
pub fn offset_polygon(points: &[Coord2], distance: f64) -> Vec<Coord2> {
    let points = remove_duplicate_points(points);
    if points.len() < 3 || distance == 0.0 {
        return points;
    }

    let area = signed_area(&points);
    if area.abs() < MIN_AREA || !distance.is_finite() {
        return vec![];
    }

    let orientation = area.signum();
    let normals     = edge_normals(&points, orientation);
    let num_points  = points.len();

    // Each offset point starts a segment, which should keep running in the direction it was generated with
    let mut offset      = vec![];
    let mut directions  = vec![];

    for (idx, point) in points.iter().enumerate() {
        let before  = normals[(idx + num_points - 1) % num_points];
        let after   = normals[idx];
        let vertex  = offset_vertex(*point, before, after, distance);

        for bevel in vertex.windows(2) {
            offset.push(bevel[0]);
            directions.push(unit_direction(bevel[0], bevel[1]));
        }

        if let Some(last) = vertex.last() {
            offset.push(*last);
            directions.push(unit_direction(*point, points[(idx+1) % num_points]));
        }
    }

    if distance > 0.0 {
        return remove_reversed_segments(offset, directions);
    }

    // Shrinking a polygon past its own width turns edges back on themselves
    if (0..offset.len()).any(|idx| is_reversed(&offset, &directions, idx)) {
        return vec![];
    }

    let offset_area = signed_area(&offset);

    if offset_area.abs() < MIN_AREA || offset_area.signum() != orientation {
        vec![]
    } else {
        offset
    }
}
