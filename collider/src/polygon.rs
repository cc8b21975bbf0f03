use flo_curves::geo::{Coord2, Coordinate2D};

use itertools::*;

///
/// A closed loop of points
///
/// The last point is implicitly joined back to the first. Polygons with fewer than 3 points can be
/// represented but are never valid collider outlines.
///
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Polygon2D {
    points: Vec<Coord2>,
}

///
/// An axis-aligned bounding box
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Bounds {
    pub min: Coord2,
    pub max: Coord2,
}

impl Polygon2D {
    ///
    /// Creates a polygon from a list of points
    ///
    pub fn new(points: Vec<Coord2>) -> Polygon2D {
        Polygon2D { points }
    }

    #[inline] pub fn points(&self) -> &[Coord2]     { &self.points }
    #[inline] pub fn into_points(self) -> Vec<Coord2> { self.points }
    #[inline] pub fn len(&self) -> usize            { self.points.len() }
    #[inline] pub fn is_empty(&self) -> bool        { self.points.is_empty() }

    ///
    /// True if this polygon has enough points to enclose an area
    ///
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.points.len() >= 3
    }

    ///
    /// The signed area of this polygon (positive when the points run anticlockwise in a y-up space)
    ///
    pub fn signed_area(&self) -> f64 {
        signed_area(&self.points)
    }

    ///
    /// The bounding box of this polygon, or None if it has no points
    ///
    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::from_points(self.points.iter().copied())
    }
}

impl From<Vec<Coord2>> for Polygon2D {
    fn from(points: Vec<Coord2>) -> Polygon2D {
        Polygon2D::new(points)
    }
}

impl From<Vec<(f64, f64)>> for Polygon2D {
    fn from(points: Vec<(f64, f64)>) -> Polygon2D {
        Polygon2D::new(points.into_iter().map(|(x, y)| Coord2(x, y)).collect())
    }
}

impl Bounds {
    pub fn new(min: Coord2, max: Coord2) -> Bounds {
        Bounds { min, max }
    }

    ///
    /// The bounds enclosing a set of points
    ///
    pub fn from_points(points: impl IntoIterator<Item=Coord2>) -> Option<Bounds> {
        points.into_iter()
            .fold(None, |bounds: Option<Bounds>, point| {
                match bounds {
                    None            => Some(Bounds::new(point, point)),
                    Some(bounds)    => Some(Bounds::new(
                        Coord2(bounds.min.x().min(point.x()), bounds.min.y().min(point.y())),
                        Coord2(bounds.max.x().max(point.x()), bounds.max.y().max(point.y())))),
                }
            })
    }

    ///
    /// The bounds enclosing a set of polygons
    ///
    pub fn from_polygons<'a>(polygons: impl IntoIterator<Item=&'a Polygon2D>) -> Option<Bounds> {
        Self::from_points(polygons.into_iter().flat_map(|polygon| polygon.points().iter().copied()))
    }

    #[inline] pub fn width(&self) -> f64    { self.max.x() - self.min.x() }
    #[inline] pub fn height(&self) -> f64   { self.max.y() - self.min.y() }

    ///
    /// The larger of the width and the height
    ///
    #[inline]
    pub fn max_extent(&self) -> f64 {
        self.width().max(self.height())
    }
}

///
/// Computes the signed area of a closed loop of points using the shoelace formula
///
pub fn signed_area(points: &[Coord2]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }

    let twice_area: f64 = points.iter()
        .circular_tuple_windows()
        .map(|(a, b)| a.x()*b.y() - b.x()*a.y())
        .sum();

    twice_area * 0.5
}

///
/// Removes points that are the same as the point before them (including a final point that closes the loop)
///
pub fn remove_duplicate_points(points: &[Coord2]) -> Vec<Coord2> {
    let mut result: Vec<Coord2> = Vec::with_capacity(points.len());

    for point in points.iter() {
        if result.last() != Some(point) {
            result.push(*point);
        }
    }

    while result.len() > 1 && result.first() == result.last() {
        result.pop();
    }

    result
}
