//! Loading of TrueType outlines from the `glyf` and `loca` tables.

use alloc::vec::Vec;

use raw::{
    tables::{
        glyf::{Anchor, CurvePoint, Glyf, Glyph as RawGlyph},
        loca::Loca,
    },
    ReadError, TableProvider,
};

use crate::{
    decycler::Decycler, BoundingBox, Contour, Curve, Error, GlyphId, Point, TrueTypeMetadata,
    COMPOSITE_COMPONENT_LIMIT,
};

/// Outline source for fonts with TrueType outlines.
#[derive(Clone, Debug)]
pub(crate) struct TrueType<'a> {
    metadata: TrueTypeMetadata,
    loca: Loca<'a>,
    glyf: Glyf<'a>,
}

impl<'a> TrueType<'a> {
    pub fn new(font: &impl TableProvider<'a>, loca_is_long: bool) -> Result<Self, ReadError> {
        Ok(Self {
            metadata: TrueTypeMetadata { loca_is_long },
            loca: font.loca(loca_is_long)?,
            glyf: font.glyf()?,
        })
    }

    pub fn metadata(&self) -> TrueTypeMetadata {
        self.metadata
    }

    /// Decodes the outline of a glyph along with the bounding box from its
    /// header.
    ///
    /// Glyphs without data have no contours and an empty bounding box.
    pub fn outline(&self, gid: GlyphId) -> Result<(BoundingBox, Vec<Contour>), Error> {
        let mut contours = Vec::new();
        let mut points = Vec::new();
        let mut components = 0;
        let bbox = self.load(
            gid,
            &mut Decycler::new(),
            &mut components,
            &mut points,
            &mut contours,
        )?;
        Ok((bbox, contours))
    }

    /// Appends the contours of a glyph, recursing into composite components.
    ///
    /// `components` counts every component visited so far in this load.
    fn load(
        &self,
        gid: GlyphId,
        decycler: &mut Decycler,
        components: &mut usize,
        points: &mut Vec<CurvePoint>,
        contours: &mut Vec<Contour>,
    ) -> Result<BoundingBox, Error> {
        if gid.to_u16() as usize >= self.loca.len() {
            return Err(Error::GlyphNotFound(gid));
        }
        let mut decycler = decycler.enter(gid)?;
        let glyph = match self.glyf.glyph_data(&self.loca, gid) {
            Ok(Some(glyph)) => glyph,
            Ok(None) => return Ok(BoundingBox::default()),
            Err(e) => {
                log::warn!("invalid glyph data for {gid}: {e}");
                return Err(e.into());
            }
        };
        match &glyph {
            RawGlyph::Simple(simple) => {
                simple.read_points(points)?;
                log::trace!(
                    "{gid}: {} contours, {} points",
                    simple.end_pts_of_contours().len(),
                    points.len()
                );
                let mut start = 0;
                for end in simple.end_pts_of_contours().iter() {
                    let end = end as usize + 1;
                    contours.extend(contour_from_points(&points[start..end]));
                    start = end;
                }
            }
            RawGlyph::Composite(composite) => {
                for component in composite.components() {
                    let component = component?;
                    let Anchor::Offset { x, y } = component.anchor else {
                        return Err(ReadError::Unsupported("point matching component anchors").into());
                    };
                    if !component.transform.is_identity() {
                        return Err(ReadError::Unsupported("transformed components").into());
                    }
                    *components += 1;
                    if *components > COMPOSITE_COMPONENT_LIMIT {
                        log::warn!("{gid}: too many components");
                        return Err(Error::ComponentLimitExceeded(component.glyph));
                    }
                    log::trace!("{gid}: component {} at ({x}, {y})", component.glyph);
                    let first = contours.len();
                    self.load(component.glyph, &mut decycler, components, points, contours)?;
                    for contour in &mut contours[first..] {
                        contour.translate(x as f64, y as f64);
                    }
                }
            }
        }
        Ok(glyph.bbox())
    }
}

/// Builds a closed contour from a run of quadratic TrueType points.
///
/// The walk starts at the first on-curve point, or at the midpoint of the
/// last and first points if every point is off-curve. Two consecutive
/// off-curve points imply an on-curve point halfway between them, including
/// across the boundary from the last point back to the first.
fn contour_from_points(points: &[CurvePoint]) -> Option<Contour> {
    let to_point = |p: &CurvePoint| Point::new(p.x as f64, p.y as f64);
    let (first, last) = (points.first()?, points.last()?);
    let (start, rotation) = match points.iter().position(|p| p.on_curve) {
        Some(ix) => (to_point(&points[ix]), ix + 1),
        None => (to_point(last).midpoint(to_point(first)), 0),
    };
    let mut curves = Vec::with_capacity(points.len());
    let mut current = start;
    let mut control: Option<Point> = None;
    for point in points.iter().cycle().skip(rotation).take(points.len()) {
        let point_pos = to_point(point);
        if point.on_curve {
            curves.push(match control.take() {
                Some(control) => Curve::quadratic(current, control, point_pos),
                None => Curve::line(current, point_pos),
            });
            current = point_pos;
        } else {
            if let Some(control) = control {
                let implied = control.midpoint(point_pos);
                curves.push(Curve::quadratic(current, control, implied));
                current = implied;
            }
            control = Some(point_pos);
        }
    }
    if let Some(control) = control {
        curves.push(Curve::quadratic(current, control, start));
    }
    Some(Contour::new(curves))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn points(points: &[(i32, i32, bool)]) -> Vec<CurvePoint> {
        points
            .iter()
            .map(|(x, y, on_curve)| CurvePoint::new(*x, *y, *on_curve))
            .collect()
    }

    fn ends(contour: &Contour) -> Vec<(Point, Point)> {
        contour.curves().iter().map(|c| (c.p0, c.p1)).collect()
    }

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn all_on_curve() {
        let contour = contour_from_points(&points(&[
            (0, 0, true),
            (0, 10, true),
            (10, 10, true),
            (10, 0, true),
        ]))
        .unwrap();
        assert_eq!(
            ends(&contour),
            [
                (p(0.0, 0.0), p(0.0, 10.0)),
                (p(0.0, 10.0), p(10.0, 10.0)),
                (p(10.0, 10.0), p(10.0, 0.0)),
                (p(10.0, 0.0), p(0.0, 0.0)),
            ]
        );
        assert_eq!(contour.curves()[0], Curve::line(p(0.0, 0.0), p(0.0, 10.0)));
        assert!(contour.is_closed());
    }

    #[test]
    fn starts_off_curve() {
        let contour = contour_from_points(&points(&[
            (0, 10, false),
            (10, 10, true),
            (10, 0, true),
            (0, 0, false),
        ]))
        .unwrap();
        assert_eq!(
            contour.curves(),
            [
                Curve::line(p(10.0, 10.0), p(10.0, 0.0)),
                Curve::quadratic(p(10.0, 0.0), p(0.0, 0.0), p(0.0, 5.0)),
                Curve::quadratic(p(0.0, 5.0), p(0.0, 10.0), p(10.0, 10.0)),
            ]
        );
        assert!(contour.is_closed());
    }

    #[test]
    fn all_off_curve() {
        let contour = contour_from_points(&points(&[
            (0, 0, false),
            (10, 0, false),
            (10, 10, false),
            (0, 10, false),
        ]))
        .unwrap();
        assert_eq!(
            ends(&contour),
            [
                (p(0.0, 5.0), p(5.0, 0.0)),
                (p(5.0, 0.0), p(10.0, 5.0)),
                (p(10.0, 5.0), p(5.0, 10.0)),
                (p(5.0, 10.0), p(0.0, 5.0)),
            ]
        );
        assert!(contour.is_closed());
    }

    #[test]
    fn single_point() {
        let contour = contour_from_points(&points(&[(7, 7, true)])).unwrap();
        assert_eq!(contour.len(), 1);
        assert!(contour.is_closed());
        assert!(contour_from_points(&[]).is_none());
    }
}
