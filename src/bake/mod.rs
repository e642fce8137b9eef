//! Contains functions and types used to bake scalable fonts into packed glyph tables.
//!
//! Fonts are regular `.ttf` and `.otf` files; each one is baked at one or more pixel heights into
//! a table of 256 monochrome glyphs.

pub mod asset;

mod bits;
mod converter;
mod font;
mod raster;
mod table;

pub use self::{
    asset::{FontAsset, Project},
    bits::{pack, BITS_PER_BYTE},
    converter::{bytes_per_column, FontConverter},
    font::{resolve_font_path, VectorFont},
    raster::{
        measure_max_ascent_offset, measure_max_width, rasterize, Canvas, GlyphSource, GLYPH_COUNT,
    },
    table::{FontTable, Glyph},
};
