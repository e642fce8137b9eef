//! _font-bake_ turns scalable `.ttf` and `.otf` fonts into fixed-size monochrome glyph tables for
//! small embedded displays.
//!
//! Each table holds the 256 single-byte character codes of one font at one pixel height. Glyphs
//! share one width and one baseline, and are packed column by column: every column is stored as
//! `height / 8` bytes, bottom band first, with the top row of each band in the least significant
//! bit. Tables are emitted as a C++ header which the embedded graphics library includes directly.
//!
//! # Usage
//!
//! From the command line:
//!
//! ```text
//! font-bake --font DejaVuSansMono.ttf --size 8 16 24 --output include/dejavu_sans_mono.h
//! ```
//!
//! Or from code:
//!
//! ```no_run
//! use font_bake::{bake::FontTable, header};
//!
//! fn main() -> Result<(), font_bake::Error> {
//!     let table = FontTable::build("DejaVuSansMono.ttf", 16)?;
//!     let text = header::render(header::DEFAULT_LICENSE, &[table]).unwrap();
//!
//!     header::write("dejavu_sans_mono.h", &text)
//! }
//! ```
//!
//! Font rendering happens behind the [`bake::GlyphSource`] trait; [`bake::VectorFont`] implements
//! it using `fontdue`, and tests or other tools may supply their own.

pub mod bake;
pub mod header;
pub mod math;

mod error;

pub use self::error::Error;
