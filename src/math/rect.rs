/// The ink extents of a rendered glyph, in pixels.
///
/// Coordinates are relative to the text origin: `x` grows to the right and `y` grows downward from
/// the top of the ascender line, so a glyph sitting on the baseline has a `bottom` equal to the
/// font ascent.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct BoundingBox {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl BoundingBox {
    /// The degenerate box reported for glyphs which have no ink, such as control characters.
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Horizontal ink extent; never negative.
    pub fn width(&self) -> u32 {
        (self.right - self.left).max(0) as _
    }

    pub fn height(&self) -> u32 {
        (self.bottom - self.top).max(0) as _
    }

    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }
}
