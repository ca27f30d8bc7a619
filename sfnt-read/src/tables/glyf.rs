//! The [glyf (Glyph Data)](https://docs.microsoft.com/en-us/typography/opentype/spec/glyf) table

use alloc::vec::Vec;

use types::{BoundingBox, F2Dot14, GlyphId, Tag};

use super::loca::Loca;
use crate::{Cursor, FontData, FontRead, ReadError, ScalarArray};

/// 'glyf'
pub const TAG: Tag = Tag::new(b"glyf");

/// Size of the header shared by simple and composite glyphs.
const GLYPH_HEADER_LEN: usize = 10;

macro_rules! glyph_flags {
    ($(#[$attr:meta])* $name:ident: $raw:ty { $($(#[$flag_attr:meta])* $flag:ident = $value:literal,)* }) => {
        $(#[$attr])*
        #[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
        pub struct $name($raw);

        impl $name {
            $(
                $(#[$flag_attr])*
                pub const $flag: Self = Self($value);
            )*

            /// Returns an empty set of flags.
            pub const fn empty() -> Self {
                Self(0)
            }

            /// Returns the raw value of the flags currently stored.
            pub const fn bits(&self) -> $raw {
                self.0
            }

            /// Convert from underlying bit representation, dropping any bits
            /// that do not correspond to flags.
            pub const fn from_bits_truncate(bits: $raw) -> Self {
                Self(bits & (0 $(| $value)*))
            }

            /// Returns `true` if all of the flags in `other` are contained
            /// within `self`.
            pub const fn contains(&self, other: Self) -> bool {
                self.0 & other.0 == other.0
            }
        }

        impl core::ops::BitOr for $name {
            type Output = Self;

            fn bitor(self, other: Self) -> Self {
                Self(self.0 | other.0)
            }
        }

        impl core::fmt::Debug for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                let mut first = true;
                $(
                    if self.contains(Self::$flag) && Self::$flag.0 != 0 {
                        if !first {
                            f.write_str(" | ")?;
                        }
                        first = false;
                        f.write_str(stringify!($flag))?;
                    }
                )*
                if first {
                    f.write_str("(empty)")?;
                }
                Ok(())
            }
        }
    };
}

glyph_flags! {
    /// Flags used in [`SimpleGlyph`].
    SimpleGlyphFlags: u8 {
        /// The point is on the curve.
        ON_CURVE_POINT = 0x01,
        /// The x delta is one byte, with the sign in `X_IS_SAME_OR_POSITIVE_X_SHORT_VECTOR`.
        X_SHORT_VECTOR = 0x02,
        /// The y delta is one byte, with the sign in `Y_IS_SAME_OR_POSITIVE_Y_SHORT_VECTOR`.
        Y_SHORT_VECTOR = 0x04,
        /// The next byte is a count of additional repetitions of this flag.
        REPEAT_FLAG = 0x08,
        /// Positive short x delta, or for long deltas, x is unchanged.
        X_IS_SAME_OR_POSITIVE_X_SHORT_VECTOR = 0x10,
        /// Positive short y delta, or for long deltas, y is unchanged.
        Y_IS_SAME_OR_POSITIVE_Y_SHORT_VECTOR = 0x20,
        /// Contours may overlap.
        OVERLAP_SIMPLE = 0x40,
    }
}

glyph_flags! {
    /// Flags used in [`CompositeGlyph`] component records.
    CompositeGlyphFlags: u16 {
        /// The arguments are 16-bit rather than 8-bit.
        ARG_1_AND_2_ARE_WORDS = 0x0001,
        /// The arguments are an x/y offset rather than point numbers.
        ARGS_ARE_XY_VALUES = 0x0002,
        /// Round the offset to the grid.
        ROUND_XY_TO_GRID = 0x0004,
        /// There is a single scale for both axes.
        WE_HAVE_A_SCALE = 0x0008,
        /// At least one more component follows this one.
        MORE_COMPONENTS = 0x0020,
        /// There are separate x and y scales.
        WE_HAVE_AN_X_AND_Y_SCALE = 0x0040,
        /// There is a 2 by 2 transform.
        WE_HAVE_A_TWO_BY_TWO = 0x0080,
        /// Instructions follow the last component.
        WE_HAVE_INSTRUCTIONS = 0x0100,
        /// Use the metrics of this component for the composite.
        USE_MY_METRICS = 0x0200,
        /// The components overlap.
        OVERLAP_COMPOUND = 0x0400,
        /// The offset is scaled by the transform.
        SCALED_COMPONENT_OFFSET = 0x0800,
        /// The offset is not scaled by the transform.
        UNSCALED_COMPONENT_OFFSET = 0x1000,
    }
}

/// The [glyf (Glyph Data)](https://docs.microsoft.com/en-us/typography/opentype/spec/glyf) table
#[derive(Clone, Debug)]
pub struct Glyf<'a> {
    data: FontData<'a>,
}

impl<'a> FontRead<'a> for Glyf<'a> {
    fn read(data: FontData<'a>) -> Result<Self, ReadError> {
        Ok(Glyf { data })
    }
}

impl<'a> Glyf<'a> {
    /// The raw table data.
    pub fn offset_data(&self) -> FontData<'a> {
        self.data
    }

    /// Returns the glyph for the given identifier, or `None` if the glyph
    /// has no outline data.
    pub fn glyph_data(
        &self,
        loca: &Loca,
        gid: GlyphId,
    ) -> Result<Option<Glyph<'a>>, ReadError> {
        let range = loca.glyph_range(gid)?;
        if range.is_empty() {
            return Ok(None);
        }
        let data = self.data.slice(range).ok_or(ReadError::OutOfBounds)?;
        Glyph::read(data).map(Some)
    }
}

/// A glyph in the `glyf` table.
#[derive(Clone, Debug)]
pub enum Glyph<'a> {
    Simple(SimpleGlyph<'a>),
    Composite(CompositeGlyph<'a>),
}

impl<'a> FontRead<'a> for Glyph<'a> {
    fn read(data: FontData<'a>) -> Result<Self, ReadError> {
        let number_of_contours: i16 = data.read_at(0)?;
        if number_of_contours >= 0 {
            SimpleGlyph::read(data).map(Glyph::Simple)
        } else {
            CompositeGlyph::read(data).map(Glyph::Composite)
        }
    }
}

impl Glyph<'_> {
    /// The bounding box declared in the glyph header.
    pub fn bbox(&self) -> BoundingBox<i16> {
        match self {
            Glyph::Simple(glyph) => glyph.bbox,
            Glyph::Composite(glyph) => glyph.bbox,
        }
    }

    /// The number of contours, negative for composites.
    pub fn number_of_contours(&self) -> i16 {
        match self {
            Glyph::Simple(glyph) => glyph.end_pts_of_contours.len() as i16,
            Glyph::Composite(_) => -1,
        }
    }
}

fn read_header(cursor: &mut Cursor) -> Result<(i16, BoundingBox<i16>), ReadError> {
    let number_of_contours = cursor.read()?;
    let bbox = BoundingBox {
        x_min: cursor.read()?,
        y_min: cursor.read()?,
        x_max: cursor.read()?,
        y_max: cursor.read()?,
    };
    Ok((number_of_contours, bbox))
}

/// A glyph made of quadratic contours.
#[derive(Clone, Debug)]
pub struct SimpleGlyph<'a> {
    bbox: BoundingBox<i16>,
    end_pts_of_contours: ScalarArray<'a, u16>,
    instructions: &'a [u8],
    point_data: FontData<'a>,
}

impl<'a> FontRead<'a> for SimpleGlyph<'a> {
    fn read(data: FontData<'a>) -> Result<Self, ReadError> {
        let mut cursor = data.cursor();
        let (number_of_contours, bbox) = read_header(&mut cursor)?;
        let number_of_contours = number_of_contours.max(0) as usize;
        if number_of_contours == 0 {
            return Ok(SimpleGlyph {
                bbox,
                end_pts_of_contours: ScalarArray::empty(),
                instructions: &[],
                point_data: FontData::default(),
            });
        }
        let end_pts_of_contours = cursor.read_array::<u16>(number_of_contours)?;
        let mut prev_end = None;
        for end in end_pts_of_contours.iter() {
            if prev_end.is_some_and(|prev| end < prev) {
                return Err(ReadError::MalformedData(
                    "contour end points must not decrease",
                ));
            }
            prev_end = Some(end);
        }
        let instruction_length: u16 = cursor.read()?;
        let start = cursor.position();
        let end = start + instruction_length as usize;
        let instructions = data
            .slice(start..end)
            .ok_or(ReadError::OutOfBounds)?
            .as_bytes();
        let point_data = data.split_off(end).ok_or(ReadError::OutOfBounds)?;
        Ok(SimpleGlyph {
            bbox,
            end_pts_of_contours,
            instructions,
            point_data,
        })
    }
}

/// Point with an associated on-curve flag in a simple glyph.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CurvePoint {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
    /// True if this is an on-curve point.
    pub on_curve: bool,
}

impl CurvePoint {
    pub fn new(x: i32, y: i32, on_curve: bool) -> Self {
        Self { x, y, on_curve }
    }
}

impl<'a> SimpleGlyph<'a> {
    /// The bounding box declared in the glyph header.
    pub fn bbox(&self) -> BoundingBox<i16> {
        self.bbox
    }

    /// Index of the last point of each contour.
    pub fn end_pts_of_contours(&self) -> ScalarArray<'a, u16> {
        self.end_pts_of_contours
    }

    /// The hinting instructions. These are never interpreted.
    pub fn instructions(&self) -> &'a [u8] {
        self.instructions
    }

    /// Returns the total number of points.
    pub fn num_points(&self) -> usize {
        self.end_pts_of_contours
            .last()
            .map(|last| last as usize + 1)
            .unwrap_or(0)
    }

    /// Decodes the flags and coordinates of every point into `points`.
    ///
    /// The buffer is cleared first. Coordinates are absolute: the deltas
    /// accumulate from the origin across all contours.
    pub fn read_points(&self, points: &mut Vec<CurvePoint>) -> Result<(), ReadError> {
        points.clear();
        let n_points = self.num_points();
        let mut cursor = self.point_data.cursor();
        let mut flags = Vec::with_capacity(n_points);
        while flags.len() < n_points {
            let flag = SimpleGlyphFlags::from_bits_truncate(cursor.read::<u8>()?);
            let count = if flag.contains(SimpleGlyphFlags::REPEAT_FLAG) {
                cursor.read::<u8>()? as usize + 1
            } else {
                1
            };
            if count > n_points - flags.len() {
                return Err(ReadError::MalformedData("repeat count too large in glyf"));
            }
            flags.extend(core::iter::repeat(flag).take(count));
        }
        let mut x = 0i32;
        for &flag in &flags {
            x = x.wrapping_add(read_delta(
                &mut cursor,
                flag,
                SimpleGlyphFlags::X_SHORT_VECTOR,
                SimpleGlyphFlags::X_IS_SAME_OR_POSITIVE_X_SHORT_VECTOR,
            )?);
            points.push(CurvePoint::new(
                x,
                0,
                flag.contains(SimpleGlyphFlags::ON_CURVE_POINT),
            ));
        }
        let mut y = 0i32;
        for (&flag, point) in flags.iter().zip(points.iter_mut()) {
            y = y.wrapping_add(read_delta(
                &mut cursor,
                flag,
                SimpleGlyphFlags::Y_SHORT_VECTOR,
                SimpleGlyphFlags::Y_IS_SAME_OR_POSITIVE_Y_SHORT_VECTOR,
            )?);
            point.y = y;
        }
        Ok(())
    }
}

fn read_delta(
    cursor: &mut Cursor,
    flag: SimpleGlyphFlags,
    short: SimpleGlyphFlags,
    same_or_positive: SimpleGlyphFlags,
) -> Result<i32, ReadError> {
    Ok(if flag.contains(short) {
        let delta = cursor.read::<u8>()? as i32;
        if flag.contains(same_or_positive) {
            delta
        } else {
            -delta
        }
    } else if flag.contains(same_or_positive) {
        0
    } else {
        cursor.read::<i16>()? as i32
    })
}

/// A glyph assembled from references to other glyphs.
#[derive(Clone, Debug)]
pub struct CompositeGlyph<'a> {
    bbox: BoundingBox<i16>,
    component_data: FontData<'a>,
}

impl<'a> FontRead<'a> for CompositeGlyph<'a> {
    fn read(data: FontData<'a>) -> Result<Self, ReadError> {
        let mut cursor = data.cursor();
        let (_, bbox) = read_header(&mut cursor)?;
        let component_data = data
            .split_off(GLYPH_HEADER_LEN)
            .ok_or(ReadError::OutOfBounds)?;
        Ok(CompositeGlyph {
            bbox,
            component_data,
        })
    }
}

impl<'a> CompositeGlyph<'a> {
    /// The bounding box declared in the glyph header.
    pub fn bbox(&self) -> BoundingBox<i16> {
        self.bbox
    }

    /// Returns an iterator over the components of the glyph.
    ///
    /// Iteration stops after the first error.
    pub fn components(&self) -> ComponentIter<'a> {
        ComponentIter {
            cursor: self.component_data.cursor(),
            done: false,
        }
    }
}

/// Anchor position for a composite component.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    /// An offset from the composite origin.
    Offset { x: i16, y: i16 },
    /// A point in the composite matched to a point in the component.
    Point { base: u16, component: u16 },
}

/// Transform for a composite component.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transform {
    /// X scale factor.
    pub xx: F2Dot14,
    /// YX skew factor.
    pub yx: F2Dot14,
    /// XY skew factor.
    pub xy: F2Dot14,
    /// Y scale factor.
    pub yy: F2Dot14,
}

impl Transform {
    /// `true` if applying the transform leaves points unchanged.
    pub fn is_identity(&self) -> bool {
        *self == Self::default()
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            xx: F2Dot14::ONE,
            yx: F2Dot14::ZERO,
            xy: F2Dot14::ZERO,
            yy: F2Dot14::ONE,
        }
    }
}

/// A reference to another glyph as part of a composite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Component {
    /// Component flags.
    pub flags: CompositeGlyphFlags,
    /// Glyph identifier.
    pub glyph: GlyphId,
    /// Anchor for component placement.
    pub anchor: Anchor,
    /// Component transformation matrix.
    pub transform: Transform,
}

/// Iterator over the components of a composite glyph.
#[derive(Clone)]
pub struct ComponentIter<'a> {
    cursor: Cursor<'a>,
    done: bool,
}

impl Iterator for ComponentIter<'_> {
    type Item = Result<Component, ReadError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let component = read_component(&mut self.cursor);
        self.done = match &component {
            Ok(component) => !component.flags.contains(CompositeGlyphFlags::MORE_COMPONENTS),
            Err(_) => true,
        };
        Some(component)
    }
}

fn read_component(cursor: &mut Cursor) -> Result<Component, ReadError> {
    let flags = CompositeGlyphFlags::from_bits_truncate(cursor.read()?);
    let glyph = cursor.read::<GlyphId>()?;
    let words = flags.contains(CompositeGlyphFlags::ARG_1_AND_2_ARE_WORDS);
    let anchor = if flags.contains(CompositeGlyphFlags::ARGS_ARE_XY_VALUES) {
        let (x, y) = if words {
            (cursor.read::<i16>()?, cursor.read::<i16>()?)
        } else {
            (cursor.read::<i8>()? as i16, cursor.read::<i8>()? as i16)
        };
        Anchor::Offset { x, y }
    } else {
        let (base, component) = if words {
            (cursor.read::<u16>()?, cursor.read::<u16>()?)
        } else {
            (cursor.read::<u8>()? as u16, cursor.read::<u8>()? as u16)
        };
        Anchor::Point { base, component }
    };
    let mut transform = Transform::default();
    if flags.contains(CompositeGlyphFlags::WE_HAVE_A_SCALE) {
        transform.xx = cursor.read()?;
        transform.yy = transform.xx;
    } else if flags.contains(CompositeGlyphFlags::WE_HAVE_AN_X_AND_Y_SCALE) {
        transform.xx = cursor.read()?;
        transform.yy = cursor.read()?;
    } else if flags.contains(CompositeGlyphFlags::WE_HAVE_A_TWO_BY_TWO) {
        transform.xx = cursor.read()?;
        transform.yx = cursor.read()?;
        transform.xy = cursor.read()?;
        transform.yy = cursor.read()?;
    }
    Ok(Component {
        flags,
        glyph,
        anchor,
        transform,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use sfnt_test_data::{be_buffer, glyf as test_glyf};

    use super::*;

    fn simple(data: &[u8]) -> SimpleGlyph<'_> {
        match Glyph::read(FontData::new(data)).unwrap() {
            Glyph::Simple(glyph) => glyph,
            Glyph::Composite(_) => panic!("expected a simple glyph"),
        }
    }

    #[test]
    fn flags_and_deltas() {
        // a triangle using every delta encoding
        let data = be_buffer! {
            1i16,                   // numberOfContours
            [0i16, 0, 300, 200],    // bbox
            [2u16],                 // endPtsOfContours
            2u16,                   // instructionLength
            [0xB0u8, 0x01],         // instructions
            // flags: on + same x + same y, on + short +x + long y, off + long x + short -y
            [0x31u8, 0x13, 0x04],
            // x: (same), 200, 100
            200u8, 100i16,
            // y: (same), 200 (long), 200 (short, negative)
            200i16, 200u8
        };
        let glyph = simple(&data);
        assert_eq!(glyph.num_points(), 3);
        assert_eq!(glyph.instructions(), &[0xB0, 0x01]);
        let mut points = Vec::new();
        glyph.read_points(&mut points).unwrap();
        assert_eq!(
            points,
            [
                CurvePoint::new(0, 0, true),
                CurvePoint::new(200, 200, true),
                CurvePoint::new(300, 0, false),
            ]
        );
    }

    #[test]
    fn repeated_flags() {
        let data = be_buffer! {
            1i16,
            [0i16, 0, 10, 10],
            [3u16],
            0u16,
            // four on-curve points with 1 byte positive deltas, repeated 3 times
            [0x3Fu8, 3],
            [0u8, 10, 0, 10],
            [0u8, 0, 10, 0]
        };
        let glyph = simple(&data);
        let mut points = Vec::new();
        glyph.read_points(&mut points).unwrap();
        let coords = points.iter().map(|p| (p.x, p.y)).collect::<Vec<_>>();
        assert_eq!(coords, [(0, 0), (10, 0), (10, 10), (20, 10)]);
        assert!(points.iter().all(|p| p.on_curve));
    }

    #[test]
    fn repeat_count_too_large() {
        let data = be_buffer! {
            1i16,
            [0i16, 0, 10, 10],
            [1u16],
            0u16,
            [0x3Fu8, 5],
            [0u8, 0, 0, 0, 0, 0]
        };
        let glyph = simple(&data);
        let mut points = Vec::new();
        let err = glyph.read_points(&mut points).unwrap_err();
        assert_eq!(
            err,
            ReadError::MalformedData("repeat count too large in glyf")
        );
    }

    #[test]
    fn decreasing_end_points() {
        let data = be_buffer! {
            2i16,
            [0i16, 0, 10, 10],
            [5u16, 3],
            0u16
        };
        assert!(matches!(
            Glyph::read(FontData::new(&data)),
            Err(ReadError::MalformedData(_))
        ));
    }

    #[test]
    fn truncated_coordinates() {
        let data = test_glyf::simple_glyph(&[&[(0, 0, true), (1000, 0, true), (0, 1000, true)]]);
        let glyph = simple(&data[..data.len() - 1]);
        let mut points = Vec::new();
        assert_eq!(
            glyph.read_points(&mut points),
            Err(ReadError::OutOfBounds)
        );
    }

    #[test]
    fn zero_contours() {
        let data = be_buffer! { 0i16, [0i16, 0, 0, 0] };
        let glyph = simple(&data);
        assert_eq!(glyph.num_points(), 0);
        let mut points = vec![CurvePoint::default()];
        glyph.read_points(&mut points).unwrap();
        assert!(points.is_empty());
    }

    #[test]
    fn encoded_contours_round_trip() {
        let contours: [&[(i16, i16, bool)]; 2] = [
            &[(0, 0, true), (0, 700, false), (500, 700, true), (500, 0, true)],
            &[(100, 100, true), (400, 100, true), (250, -300, false)],
        ];
        let data = test_glyf::simple_glyph(&contours);
        let glyph = simple(&data);
        assert_eq!(glyph.end_pts_of_contours().iter().collect::<Vec<_>>(), [3, 6]);
        assert_eq!(
            glyph.bbox(),
            BoundingBox {
                x_min: 0,
                y_min: -300,
                x_max: 500,
                y_max: 700
            }
        );
        let mut points = Vec::new();
        glyph.read_points(&mut points).unwrap();
        let expected = contours
            .iter()
            .flat_map(|c| c.iter())
            .map(|(x, y, on)| CurvePoint::new(*x as i32, *y as i32, *on))
            .collect::<Vec<_>>();
        assert_eq!(points, expected);
    }

    #[test]
    fn composite_components() {
        let data = be_buffer! {
            -1i16,
            [0i16, 0, 100, 100],
            // words, xy values, more components, scale
            0x002Bu16, 3u16, [-300i16, 20], 0x2000u16,
            // bytes, xy values
            0x0002u16, 4u16, [-5i8, 7],
        };
        let Glyph::Composite(glyph) = Glyph::read(FontData::new(&data)).unwrap() else {
            panic!("expected a composite glyph");
        };
        let components = glyph.components().collect::<Result<Vec<_>, _>>().unwrap();
        assert_eq!(components.len(), 2);
        assert_eq!(components[0].glyph, GlyphId::new(3));
        assert_eq!(components[0].anchor, Anchor::Offset { x: -300, y: 20 });
        assert_eq!(components[0].transform.xx, F2Dot14::from_f32(0.5));
        assert_eq!(components[0].transform.yy, F2Dot14::from_f32(0.5));
        assert!(!components[0].transform.is_identity());
        assert_eq!(components[1].glyph, GlyphId::new(4));
        assert_eq!(components[1].anchor, Anchor::Offset { x: -5, y: 7 });
        assert!(components[1].transform.is_identity());
    }

    #[test]
    fn composite_point_anchors() {
        let data = be_buffer! {
            -1i16,
            [0i16, 0, 100, 100],
            0x0000u16, 9u16, [2u8, 5]
        };
        let Glyph::Composite(glyph) = Glyph::read(FontData::new(&data)).unwrap() else {
            panic!("expected a composite glyph");
        };
        let component = glyph.components().next().unwrap().unwrap();
        assert_eq!(
            component.anchor,
            Anchor::Point {
                base: 2,
                component: 5
            }
        );
    }

    #[test]
    fn composite_stops_after_error() {
        // claims more components but the data ends
        let data = be_buffer! {
            -1i16,
            [0i16, 0, 100, 100],
            0x0022u16, 3u16, [1i8, 1]
        };
        let Glyph::Composite(glyph) = Glyph::read(FontData::new(&data)).unwrap() else {
            panic!("expected a composite glyph");
        };
        let mut components = glyph.components();
        assert!(components.next().unwrap().is_ok());
        assert_eq!(components.next(), Some(Err(ReadError::OutOfBounds)));
        assert_eq!(components.next(), None);
    }

    #[test]
    fn glyph_lookup_through_loca() {
        let mut builder = test_glyf::GlyfBuilder::default();
        builder.push(test_glyf::simple_glyph(&[&[(0, 0, true), (10, 0, true), (0, 10, true)]]));
        builder.push_empty();
        let (glyf, loca, is_long) = builder.build();
        let glyf = Glyf::read(FontData::new(&glyf)).unwrap();
        let loca = Loca::read(FontData::new(&loca), is_long, 2).unwrap();
        assert!(matches!(
            glyf.glyph_data(&loca, GlyphId::new(0)),
            Ok(Some(Glyph::Simple(_)))
        ));
        assert!(matches!(glyf.glyph_data(&loca, GlyphId::new(1)), Ok(None)));
        assert!(glyf.glyph_data(&loca, GlyphId::new(2)).is_err());
    }

    #[test]
    fn flag_debug() {
        let flags = CompositeGlyphFlags::ARGS_ARE_XY_VALUES | CompositeGlyphFlags::MORE_COMPONENTS;
        assert_eq!(format!("{flags:?}"), "ARGS_ARE_XY_VALUES | MORE_COMPONENTS");
        assert_eq!(format!("{:?}", SimpleGlyphFlags::empty()), "(empty)");
    }
}
