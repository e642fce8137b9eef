use {
    super::{
        converter::{bytes_per_column, FontConverter},
        raster::{GlyphSource, GLYPH_COUNT},
    },
    crate::Error,
    log::info,
};

/// The packed bitmap of a single character code.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Glyph {
    bytes: Vec<u8>,
    codepoint: u8,
}

impl Glyph {
    pub fn new(codepoint: u8, bytes: Vec<u8>) -> Self {
        Self { bytes, codepoint }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn codepoint(&self) -> u8 {
        self.codepoint
    }
}

/// A complete lookup table of 256 packed glyphs for one font at one pixel height.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FontTable {
    data: Vec<Glyph>,
    name: String,
    size: u32,
    stride: usize,
    width: u32,
}

impl FontTable {
    /// Loads the font named by `identifier` and converts all 256 character codes at `height_px`.
    pub fn build(identifier: &str, height_px: u32) -> Result<Self, Error> {
        Self::from_converter(&FontConverter::open(identifier, height_px)?)
    }

    /// Converts all 256 character codes, in ascending order, using an existing converter.
    ///
    /// A failure on any character code fails the whole table.
    pub fn from_converter<S>(converter: &FontConverter<S>) -> Result<Self, Error>
    where
        S: GlyphSource,
    {
        let name = converter.fontname();
        let size = converter.height_px();
        let width = converter.width_px();
        let stride = width as usize * bytes_per_column(size)? as usize;

        info!("Baking {} at {} px ({}x{} px)", name, size, width, size);

        let mut res = Self {
            name,
            size,
            width,
            stride,
            ..Default::default()
        };

        for (codepoint, glyph) in (0..=u8::MAX).zip(res.data.iter_mut()) {
            *glyph = Glyph::new(codepoint, converter.convert_character(codepoint)?);
        }

        Ok(res)
    }

    /// The font family name without spaces.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The pixel height of every glyph.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// The pixel width of every glyph.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// The number of packed bytes per glyph.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// All 256 glyphs, indexed by character code.
    pub fn glyphs(&self) -> &[Glyph] {
        &self.data
    }

    pub fn glyph(&self, codepoint: u8) -> &Glyph {
        &self.data[codepoint as usize]
    }
}

impl Default for FontTable {
    fn default() -> Self {
        Self {
            data: vec![Glyph::default(); GLYPH_COUNT],
            name: String::new(),
            size: 0,
            stride: 0,
            width: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::{bake::raster::tests::BlockFont, math::BoundingBox},
    };

    fn converter(size: u32) -> FontConverter<BlockFont> {
        let font = BlockFont::new(
            "Test Font",
            &[
                (b'A', BoundingBox::new(0, 0, 5, 8)),
                (b'i', BoundingBox::new(2, 2, 3, 8)),
            ],
        );

        FontConverter::new(font, size).unwrap()
    }

    #[test]
    fn default_table_has_256_placeholders() {
        let table = FontTable::default();

        assert_eq!(table.glyphs().len(), 256);
        assert!(table.glyphs().iter().all(|glyph| glyph.bytes().is_empty()));
        assert_eq!(table.name(), "");
        assert_eq!((table.size(), table.width(), table.stride()), (0, 0, 0));
    }

    #[test]
    fn table_metadata_comes_from_converter() {
        let table = FontTable::from_converter(&converter(8)).unwrap();

        assert_eq!(table.name(), "TestFont");
        assert_eq!(table.size(), 8);
        assert_eq!(table.width(), 5);
        assert_eq!(table.stride(), 5);
    }

    #[test]
    fn stride_invariant() {
        for size in [8, 16, 24, 32] {
            let table = FontTable::from_converter(&converter(size)).unwrap();

            assert_eq!(table.stride(), table.width() as usize * (table.size() as usize / 8));
            assert!(table
                .glyphs()
                .iter()
                .all(|glyph| glyph.bytes().len() == table.stride()));
        }
    }

    #[test]
    fn glyphs_are_in_codepoint_order() {
        let converter = converter(8);
        let table = FontTable::from_converter(&converter).unwrap();

        assert_eq!(table.glyphs().len(), 256);
        for (idx, glyph) in table.glyphs().iter().enumerate() {
            assert_eq!(glyph.codepoint() as usize, idx);
        }

        assert_eq!(
            table.glyph(b'A').bytes(),
            converter.convert_character(b'A').unwrap().as_slice()
        );

        // `i` moved the ascent offset to its top, so both glyphs lose their upper two rows
        assert_eq!(converter.ascent_offset(), 2);
        assert_eq!(table.glyph(b'A').bytes(), &[0b0011_1111; 5]);
        assert_eq!(table.glyph(b'i').bytes(), &[0, 0, 0b0011_1111, 0, 0]);
    }

    #[test]
    fn missing_font_builds_nothing() {
        assert!(matches!(
            FontTable::build("invalid_font.ttf", 8),
            Err(Error::FontNotFound { .. })
        ));
    }

    #[test]
    fn invalid_size_builds_nothing() {
        assert!(matches!(
            FontTable::build("invalid_font.ttf", 12),
            Err(Error::InvalidSize(12))
        ));
    }
}
