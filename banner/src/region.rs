//! Axis-aligned pixel regions.

use crate::error::BannerError;

/// Axis-aligned rectangle in image coordinates, `x1 > x0`, `y1 > y0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub x0: u32,
    pub y0: u32,
    pub x1: u32,
    pub y1: u32,
}

impl Region {
    /// Build a region, rejecting zero or inverted extents.
    pub fn new(x0: u32, y0: u32, x1: u32, y1: u32) -> Result<Self, BannerError> {
        if x1 <= x0 || y1 <= y0 {
            return Err(BannerError::DegenerateRegion { x0, y0, x1, y1 });
        }
        Ok(Self { x0, y0, x1, y1 })
    }

    pub fn width(&self) -> u32 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> u32 {
        self.y1 - self.y0
    }

    /// Shrink the region by `pad` on all sides, clamping to at least 1x1.
    pub fn inset(&self, pad: u32) -> Self {
        let pad_x = pad.min((self.width() - 1) / 2);
        let pad_y = pad.min((self.height() - 1) / 2);
        Self {
            x0: self.x0 + pad_x,
            y0: self.y0 + pad_y,
            x1: self.x1 - pad_x,
            y1: self.y1 - pad_y,
        }
    }

    /// Check containment within an image of the given dimensions.
    pub fn check_bounds(&self, width: u32, height: u32) -> Result<(), BannerError> {
        if self.x1 > width || self.y1 > height {
            return Err(BannerError::RegionOutOfBounds {
                x0: self.x0,
                y0: self.y0,
                x1: self.x1,
                y1: self.y1,
                width,
                height,
            });
        }
        Ok(())
    }
}
