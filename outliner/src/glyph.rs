//! Decoded glyphs.

use alloc::vec::Vec;

use crate::{Bearings, BoundingBox, Contour};

/// Per glyph values that accompany an outline.
#[derive(Copy, Clone, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GlyphMetadata {
    /// Bounding box from the glyph header.
    pub bbox: BoundingBox,
    /// Side bearings from the metrics tables.
    pub bearings: Bearings,
}

/// An outline along with its metadata.
///
/// Glyphs are built on request and owned by the caller.
#[derive(Clone, PartialEq, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Glyph {
    /// Closed contours in font units.
    pub outline: Vec<Contour>,
    pub metadata: GlyphMetadata,
}

impl Glyph {
    /// Returns `true` if the glyph has no contours, as for a space.
    pub fn is_empty(&self) -> bool {
        self.outline.is_empty()
    }

    /// Total number of curves across all contours.
    pub fn num_curves(&self) -> usize {
        self.outline.iter().map(Contour::len).sum()
    }

    /// Returns a copy of the glyph translated so the minimum corner of its
    /// bounding box sits at the origin.
    #[must_use]
    pub fn positive(&self) -> Self {
        let bbox = self.metadata.bbox;
        let (dx, dy) = (-(bbox.x_min as f64), -(bbox.y_min as f64));
        let outline = self
            .outline
            .iter()
            .map(|contour| {
                let mut contour = contour.clone();
                contour.translate(dx, dy);
                contour
            })
            .collect();
        Self {
            outline,
            metadata: GlyphMetadata {
                bbox: BoundingBox {
                    x_min: 0,
                    y_min: 0,
                    x_max: bbox.x_max.saturating_sub(bbox.x_min),
                    y_max: bbox.y_max.saturating_sub(bbox.y_min),
                },
                ..self.metadata
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Curve, Point};

    #[test]
    fn positive_moves_to_origin() {
        let a = Point::new(-50.0, -20.0);
        let b = Point::new(100.0, -20.0);
        let c = Point::new(-50.0, 80.0);
        let glyph = Glyph {
            outline: vec![Contour::new(vec![
                Curve::line(a, b),
                Curve::line(b, c),
                Curve::line(c, a),
            ])],
            metadata: GlyphMetadata {
                bbox: BoundingBox {
                    x_min: -50,
                    y_min: -20,
                    x_max: 100,
                    y_max: 80,
                },
                bearings: Bearings {
                    lsb: -50,
                    ..Default::default()
                },
            },
        };
        let positive = glyph.positive();
        assert_eq!(positive.num_curves(), 3);
        let curves = positive.outline[0].curves();
        assert_eq!(curves[0].p0, Point::new(0.0, 0.0));
        assert_eq!(curves[1].p0, Point::new(150.0, 0.0));
        assert_eq!(curves[2].p0, Point::new(0.0, 100.0));
        assert_eq!(
            positive.metadata.bbox,
            BoundingBox {
                x_min: 0,
                y_min: 0,
                x_max: 150,
                y_max: 100
            }
        );
        assert_eq!(positive.metadata.bearings, glyph.metadata.bearings);
        assert!(positive.outline[0].is_closed());
    }

    #[test]
    fn empty() {
        assert!(Glyph::default().is_empty());
        assert_eq!(Glyph::default().num_curves(), 0);
    }
}
