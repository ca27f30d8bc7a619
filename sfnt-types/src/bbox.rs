/// Minimum and maximum extents of a rectangular region.
#[derive(Copy, Clone, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox<T> {
    /// Minimum extent in the x direction-- the left side of a region.
    pub x_min: T,
    /// Minimum extent in the y direction. In a Y-up coordinate system,
    /// which is used by fonts, this represents the bottom of a region.
    pub y_min: T,
    /// Maximum extent in the x direction-- the right side of a region.
    pub x_max: T,
    /// Maximum extent in the y direction. In a Y-up coordinate system,
    /// which is used by fonts, this represents the top of the region.
    pub y_max: T,
}

impl<T> BoundingBox<T>
where
    T: core::ops::Sub<Output = T> + Copy,
{
    /// The horizontal extent of the region.
    pub fn width(&self) -> T {
        self.x_max - self.x_min
    }

    /// The vertical extent of the region.
    pub fn height(&self) -> T {
        self.y_max - self.y_min
    }
}

#[cfg(test)]
mod tests {
    use super::BoundingBox;

    #[test]
    fn extents() {
        let bbox = BoundingBox {
            x_min: -10i16,
            y_min: -200,
            x_max: 500,
            y_max: 800,
        };
        assert_eq!(bbox.width(), 510);
        assert_eq!(bbox.height(), 1000);
    }
}
