use {
    super::{
        bits::{pack, BITS_PER_BYTE},
        font::VectorFont,
        raster::{measure_max_ascent_offset, measure_max_width, rasterize, GlyphSource},
    },
    crate::Error,
    log::{debug, trace},
};

/// Returns the number of packed bytes in one glyph column, or an error if `height_px` cannot be
/// split into whole bytes.
pub fn bytes_per_column(height_px: u32) -> Result<u32, Error> {
    if height_px == 0 || height_px as usize % BITS_PER_BYTE != 0 {
        Err(Error::InvalidSize(height_px))
    } else {
        Ok(height_px / BITS_PER_BYTE as u32)
    }
}

/// Converts the glyphs of one font, at one pixel height, into packed monochrome bitmaps.
///
/// The glyph width and baseline placement are derived once, on construction, from all 256
/// character codes; every converted glyph shares them.
#[derive(Debug)]
pub struct FontConverter<S = VectorFont> {
    ascent_offset: i32,
    height_px: u32,
    source: S,
    width_px: u32,
}

impl FontConverter<VectorFont> {
    /// Loads the font named by `identifier` (a path or installed font file name) at `height_px`.
    pub fn open(identifier: &str, height_px: u32) -> Result<Self, Error> {
        Self::open_collection(identifier, height_px, 0)
    }

    /// Like [`FontConverter::open`], using font `collection_index` of a `.ttc` collection.
    pub fn open_collection(
        identifier: &str,
        height_px: u32,
        collection_index: u32,
    ) -> Result<Self, Error> {
        bytes_per_column(height_px)?;

        Self::new(
            VectorFont::load(identifier, height_px, collection_index)?,
            height_px,
        )
    }
}

impl<S> FontConverter<S>
where
    S: GlyphSource,
{
    /// Wraps an already loaded glyph source which renders at `height_px`.
    pub fn new(source: S, height_px: u32) -> Result<Self, Error> {
        bytes_per_column(height_px)?;

        let width_px = measure_max_width(&source);
        let ascent_offset = measure_max_ascent_offset(&source);

        debug!(
            "Converter for {}: {}x{} px, ascent offset {} px",
            source.family_name(),
            width_px,
            height_px,
            ascent_offset
        );

        Ok(Self {
            ascent_offset,
            height_px,
            source,
            width_px,
        })
    }

    /// The family name of the font with all spaces removed.
    pub fn fontname(&self) -> String {
        self.source.family_name().replace(' ', "")
    }

    pub fn height_px(&self) -> u32 {
        self.height_px
    }

    pub fn width_px(&self) -> u32 {
        self.width_px
    }

    /// Vertical shift applied to every glyph so they share a baseline.
    pub fn ascent_offset(&self) -> i32 {
        self.ascent_offset
    }

    /// Number of packed bytes produced for each glyph.
    pub fn stride(&self) -> usize {
        self.width_px as usize * (self.height_px as usize / BITS_PER_BYTE)
    }

    /// Renders `codepoint` and packs it column by column.
    ///
    /// Each column is stored as `height_px / 8` bytes ordered from the bottom-most band of 8 rows
    /// to the top-most one; within a byte the top row of the band is the least significant bit.
    pub fn convert_character(&self, codepoint: u8) -> Result<Vec<u8>, Error> {
        let bands = bytes_per_column(self.height_px)?;
        let canvas = rasterize(
            &self.source,
            codepoint,
            self.width_px,
            self.height_px,
            self.ascent_offset,
        );

        let mut res = Vec::with_capacity(self.stride());
        for x in 0..self.width_px {
            for y in 0..bands {
                let row = (bands - 1 - y) * BITS_PER_BYTE as u32;
                res.push(pack(&canvas.column_band(x, row))?);
            }
        }

        trace!("Converted {:#04x} into {} bytes", codepoint, res.len());

        Ok(res)
    }
}
