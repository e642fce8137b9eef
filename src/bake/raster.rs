use {crate::math::BoundingBox, log::debug};

/// Every glyph table covers the same single-byte character range.
pub const GLYPH_COUNT: usize = 256;

/// A font renderer able to measure and draw single-byte character codes.
///
/// Implementors place glyphs using the same coordinate space as [`BoundingBox`]: `origin` is the
/// top-left of the ascender line and `y` grows downward.
pub trait GlyphSource {
    /// The family name stored inside the font.
    fn family_name(&self) -> &str;

    /// The ink extents of `codepoint` when drawn at the zero origin.
    ///
    /// Glyphs without ink return [`BoundingBox::ZERO`].
    fn bbox(&self, codepoint: u8) -> BoundingBox;

    /// Sets every ink pixel of `codepoint` on `canvas`, with the text origin placed at `origin`.
    fn draw(&self, canvas: &mut Canvas, origin: (i32, i32), codepoint: u8);
}

impl<S> GlyphSource for &S
where
    S: GlyphSource + ?Sized,
{
    fn family_name(&self) -> &str {
        (**self).family_name()
    }

    fn bbox(&self, codepoint: u8) -> BoundingBox {
        (**self).bbox(codepoint)
    }

    fn draw(&self, canvas: &mut Canvas, origin: (i32, i32), codepoint: u8) {
        (**self).draw(canvas, origin, codepoint)
    }
}

/// A 1-bit image which starts out blank; writes outside of it are clipped.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Canvas {
    height: u32,
    pixels: Vec<bool>,
    width: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            height,
            pixels: vec![false; width as usize * height as usize],
            width,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            None
        } else {
            Some(y as usize * self.width as usize + x as usize)
        }
    }

    /// Returns `true` for ink pixels; pixels outside the canvas are background.
    pub fn get(&self, x: i32, y: i32) -> bool {
        self.index(x, y)
            .map(|idx| self.pixels[idx])
            .unwrap_or_default()
    }

    pub fn set(&mut self, x: i32, y: i32) {
        if let Some(idx) = self.index(x, y) {
            self.pixels[idx] = true;
        }
    }

    /// The 8 vertically consecutive pixels of column `x` starting at row `y`, top to bottom.
    pub fn column_band(&self, x: u32, y: u32) -> [bool; 8] {
        let mut band = [false; 8];
        for (row, pixel) in band.iter_mut().enumerate() {
            *pixel = self.get(x as _, (y as usize + row) as _);
        }

        band
    }

    /// Returns `true` if no pixel has been set.
    pub fn is_blank(&self) -> bool {
        !self.pixels.iter().any(|&pixel| pixel)
    }
}

/// Gets the widest ink extent, in pixels, of all 256 character codes.
///
/// Glyphs without ink contribute nothing.
pub fn measure_max_width(source: &impl GlyphSource) -> u32 {
    let res = (0..=u8::MAX)
        .map(|codepoint| source.bbox(codepoint).width())
        .max()
        .unwrap_or_default();

    debug!("Max glyph width of {}: {} px", source.family_name(), res);

    res
}

/// Gets the vertical offset used to shift every glyph onto a common baseline.
///
/// The offset only moves to the `top` of a glyph whose `bottom` lies below the offset tracked so
/// far. Glyphs which reach lower without passing that offset leave it untouched.
pub fn measure_max_ascent_offset(source: &impl GlyphSource) -> i32 {
    let mut res = 0;
    for codepoint in 0..=u8::MAX {
        let bbox = source.bbox(codepoint);
        if bbox.bottom > res {
            res = bbox.top;
        }
    }

    debug!("Ascent offset of {}: {} px", source.family_name(), res);

    res
}

/// Draws `codepoint` onto a blank canvas, shifted up by `ascent_offset` pixels.
pub fn rasterize(
    source: &impl GlyphSource,
    codepoint: u8,
    width: u32,
    height: u32,
    ascent_offset: i32,
) -> Canvas {
    let mut canvas = Canvas::new(width, height);
    source.draw(&mut canvas, (0, -ascent_offset), codepoint);

    canvas
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Draws solid rectangles so tests can predict every pixel.
    pub(crate) struct BlockFont {
        pub boxes: Vec<BoundingBox>,
        pub name: String,
    }

    impl BlockFont {
        /// Every glyph is empty except the ones given.
        pub fn new(name: &str, glyphs: &[(u8, BoundingBox)]) -> Self {
            let mut boxes = vec![BoundingBox::ZERO; GLYPH_COUNT];
            for &(codepoint, bbox) in glyphs {
                boxes[codepoint as usize] = bbox;
            }

            Self {
                boxes,
                name: name.to_owned(),
            }
        }
    }

    impl GlyphSource for BlockFont {
        fn family_name(&self) -> &str {
            &self.name
        }

        fn bbox(&self, codepoint: u8) -> BoundingBox {
            self.boxes[codepoint as usize]
        }

        fn draw(&self, canvas: &mut Canvas, origin: (i32, i32), codepoint: u8) {
            let bbox = self.bbox(codepoint);
            for y in bbox.top..bbox.bottom {
                for x in bbox.left..bbox.right {
                    canvas.set(origin.0 + x, origin.1 + y);
                }
            }
        }
    }

    #[test]
    fn canvas_starts_blank() {
        let canvas = Canvas::new(4, 8);

        assert_eq!((canvas.width(), canvas.height()), (4, 8));
        assert!(canvas.is_blank());
    }

    #[test]
    fn canvas_clips_writes() {
        let mut canvas = Canvas::new(2, 2);
        canvas.set(-1, 0);
        canvas.set(0, 2);
        canvas.set(2, 1);

        assert!(canvas.is_blank());

        canvas.set(1, 1);

        assert!(canvas.get(1, 1));
        assert!(!canvas.get(5, 5));
    }

    #[test]
    fn column_band_reads_downward() {
        let mut canvas = Canvas::new(1, 16);
        canvas.set(0, 8);
        canvas.set(0, 15);

        assert_eq!(canvas.column_band(0, 0), [false; 8]);
        assert_eq!(
            canvas.column_band(0, 8),
            [true, false, false, false, false, false, false, true]
        );
    }

    #[test]
    fn max_width_ignores_empty_glyphs() {
        let font = BlockFont::new(
            "Blocks",
            &[
                (b'i', BoundingBox::new(2, 1, 3, 7)),
                (b'W', BoundingBox::new(0, 1, 6, 7)),
                (b'-', BoundingBox::new(1, 4, 4, 5)),
            ],
        );

        assert_eq!(measure_max_width(&font), 6);
        assert_eq!(measure_max_width(&BlockFont::new("Empty", &[])), 0);
    }

    #[test]
    fn ascent_offset_follows_lower_bottoms() {
        // `A` moves the offset to 2, `g` reaches below it and moves it to 3, `^` sits above the
        // tracked offset so it is ignored even though its top is smaller.
        let font = BlockFont::new(
            "Blocks",
            &[
                (b'A', BoundingBox::new(0, 2, 4, 8)),
                (b'^', BoundingBox::new(0, 0, 4, 1)),
                (b'g', BoundingBox::new(0, 3, 4, 10)),
            ],
        );

        assert_eq!(measure_max_ascent_offset(&font), 3);
    }

    #[test]
    fn ascent_offset_of_empty_font_is_zero() {
        assert_eq!(measure_max_ascent_offset(&BlockFont::new("Empty", &[])), 0);
    }

    #[test]
    fn rasterize_shifts_glyph_up() {
        let font = BlockFont::new("Blocks", &[(b'.', BoundingBox::new(1, 6, 2, 7))]);
        let canvas = rasterize(&font, b'.', 3, 8, 2);

        assert!(canvas.get(1, 4));
        assert_eq!(canvas.pixels.iter().filter(|&&pixel| pixel).count(), 1);
    }

    #[test]
    fn rasterize_blank_glyph() {
        let font = BlockFont::new("Blocks", &[]);

        assert!(rasterize(&font, b' ', 4, 8, 0).is_blank());
    }
}
