//! Cubic Bézier curves and the closed contours built from them.

use alloc::vec::Vec;

use crate::Point;

/// A cubic Bézier curve in font units.
///
/// TrueType quadratic segments are converted on construction so every
/// outline is expressed with a single curve type.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Curve {
    /// Start point.
    pub p0: Point,
    /// First control point.
    pub c1: Point,
    /// Second control point.
    pub c2: Point,
    /// End point.
    pub p1: Point,
}

impl Curve {
    pub const fn new(p0: Point, c1: Point, c2: Point, p1: Point) -> Self {
        Self { p0, c1, c2, p1 }
    }

    /// Degree elevation of the quadratic curve `(p0, control, p1)`.
    ///
    /// The result traces exactly the same path.
    pub fn quadratic(p0: Point, control: Point, p1: Point) -> Self {
        const TWO_THIRDS: f64 = 2.0 / 3.0;
        Self {
            p0,
            c1: p0.lerp(control, TWO_THIRDS),
            c2: p1.lerp(control, TWO_THIRDS),
            p1,
        }
    }

    /// A straight segment, as the quadratic with its midpoint for a control.
    pub fn line(p0: Point, p1: Point) -> Self {
        Self::quadratic(p0, p0.midpoint(p1), p1)
    }

    /// Returns a copy of the curve moved by `(dx, dy)`.
    #[must_use]
    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        let offset = Point::new(dx, dy);
        Self {
            p0: self.p0 + offset,
            c1: self.c1 + offset,
            c2: self.c2 + offset,
            p1: self.p1 + offset,
        }
    }

    /// Evaluates the curve at `t` in `[0, 1]`.
    pub fn eval(&self, t: f64) -> Point {
        let mt = 1.0 - t;
        self.p0 * (mt * mt * mt)
            + self.c1 * (3.0 * mt * mt * t)
            + self.c2 * (3.0 * mt * t * t)
            + self.p1 * (t * t * t)
    }

    /// The start and end points.
    pub fn end_points(&self) -> [Point; 2] {
        [self.p0, self.p1]
    }

    /// The two off-curve control points.
    pub fn control_points(&self) -> [Point; 2] {
        [self.c1, self.c2]
    }
}

/// A closed sequence of curves.
///
/// Each curve starts where the previous one ends, and the last curve ends
/// at the start of the first.
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Contour {
    curves: Vec<Curve>,
}

impl Contour {
    pub fn new(curves: Vec<Curve>) -> Self {
        Self { curves }
    }

    pub fn curves(&self) -> &[Curve] {
        &self.curves
    }

    pub fn len(&self) -> usize {
        self.curves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    /// Moves every curve by `(dx, dy)` in place.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        for curve in &mut self.curves {
            *curve = curve.translate(dx, dy);
        }
    }

    /// Returns `true` if consecutive curves share end points and the last
    /// curve ends where the first begins.
    pub fn is_closed(&self) -> bool {
        let (Some(first), Some(last)) = (self.curves.first(), self.curves.last()) else {
            return true;
        };
        last.p1 == first.p0 && self.curves.windows(2).all(|pair| pair[0].p1 == pair[1].p0)
    }
}

impl<'a> IntoIterator for &'a Contour {
    type Item = &'a Curve;
    type IntoIter = core::slice::Iter<'a, Curve>;

    fn into_iter(self) -> Self::IntoIter {
        self.curves.iter()
    }
}

impl From<Vec<Curve>> for Contour {
    fn from(curves: Vec<Curve>) -> Self {
        Self::new(curves)
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{ParamCurve, QuadBez};

    use super::*;

    fn to_kurbo(p: Point) -> kurbo::Point {
        kurbo::Point::new(p.x, p.y)
    }

    fn assert_near(a: Point, b: kurbo::Point) {
        assert!(
            (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9,
            "{a:?} != {b:?}"
        );
    }

    #[test]
    fn quadratic_matches_reference() {
        let (p0, c, p1) = (
            Point::new(0.0, 0.0),
            Point::new(50.0, 100.0),
            Point::new(100.0, 0.0),
        );
        let curve = Curve::quadratic(p0, c, p1);
        let reference = QuadBez::new(to_kurbo(p0), to_kurbo(c), to_kurbo(p1));
        for t in [0.0, 0.25, 0.5, 0.75, 1.0] {
            assert_near(curve.eval(t), reference.eval(t));
        }
        assert_near(curve.eval(0.5), kurbo::Point::new(50.0, 50.0));
        assert_eq!(curve.end_points(), [p0, p1]);
        let elevated = reference.raise();
        assert_near(curve.c1, elevated.p1);
        assert_near(curve.c2, elevated.p2);
    }

    #[test]
    fn line_is_straight() {
        let curve = Curve::line(Point::new(0.0, 0.0), Point::new(30.0, 60.0));
        assert_near(curve.eval(0.5), kurbo::Point::new(15.0, 30.0));
        for t in [0.1, 0.3, 0.9] {
            let p = curve.eval(t);
            assert!((p.y - 2.0 * p.x).abs() < 1e-9);
        }
    }

    #[test]
    fn translate_moves_every_point() {
        let curve = Curve::quadratic(
            Point::new(0.0, 0.0),
            Point::new(3.0, 3.0),
            Point::new(6.0, 0.0),
        );
        let moved = curve.translate(10.0, -5.0);
        assert_eq!(moved.p0, Point::new(10.0, -5.0));
        assert_eq!(moved.c1, curve.c1 + Point::new(10.0, -5.0));
        assert_eq!(moved.control_points()[1], curve.c2 + Point::new(10.0, -5.0));
        assert_eq!(moved.p1, Point::new(16.0, -5.0));
    }

    #[test]
    fn closed_contours() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(10.0, 0.0);
        let c = Point::new(0.0, 10.0);
        let mut contour =
            Contour::new(vec![Curve::line(a, b), Curve::line(b, c), Curve::line(c, a)]);
        assert!(contour.is_closed());
        contour.translate(1.0, 1.0);
        assert!(contour.is_closed());
        assert_eq!(contour.curves()[0].p0, Point::new(1.0, 1.0));
        let open = Contour::new(vec![Curve::line(a, b), Curve::line(b, c)]);
        assert!(!open.is_closed());
    }
}
