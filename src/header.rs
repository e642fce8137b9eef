//! Renders baked font tables as a C++ header for the embedded graphics library.
//!
//! Rendering is a pure function of the tables; the result is written to disk in one go by
//! [`write`].

use {
    crate::{bake::FontTable, Error},
    log::debug,
    std::{
        fs::{create_dir_all, write as write_file},
        path::Path,
    },
};

/// The comment block placed at the top of a header when no license text is supplied.
pub const DEFAULT_LICENSE: &str = "/**
 * Bitmap font lookup tables.
 *
 * Generated by font-bake from a scalable font; do not edit by hand.
 */
";

/// Indentation of the lookup table rows.
const ROW_INDENT: &str = "        ";

/// Codepoint which is never echoed in row comments; a trailing backslash would splice the next
/// line into the comment.
const BACKSLASH: u8 = 0x5c;

/// The namespace holding the font descriptors of one pixel height, e.g. `_8px`.
pub fn namespace_for_size(size: u32) -> String {
    format!("_{}px", size)
}

/// Returns `true` if `codepoint` is a printable Latin-1 character.
fn is_printable(codepoint: u8) -> bool {
    matches!(codepoint, 0x20..=0x7e | 0xa1..=0xff) && codepoint != 0xad
}

/// One row of the lookup table: every byte of a glyph followed by a comment naming its codepoint.
pub fn array_line(codepoint: u8, bytes: &[u8]) -> String {
    let mut res = String::with_capacity(bytes.len() * 6 + 16);
    for byte in bytes {
        res.push_str(&format!("{:#04x}, ", byte));
    }

    if is_printable(codepoint) && codepoint != BACKSLASH {
        res.push_str(&format!("// {:#04x}: {}\n", codepoint, char::from(codepoint)));
    } else {
        res.push_str(&format!("// {:#04x}\n", codepoint));
    }

    res
}

/// Opens the include guard and the `Font` namespace.
pub fn preamble(name: &str) -> String {
    let guard = name.to_uppercase();

    format!(
        "
#ifndef {guard}_H_
#define {guard}_H_

// === Includes ===
#include \"font_base.h\"

namespace Font
{{
"
    )
}

/// Opens the lookup table array of one pixel height.
pub fn table_begin(name: &str, width: u32, height: u32) -> String {
    format!(
        "    /**
     * @brief Ascii font lookup table
     * @details width: {width} px, height: {height} px
     */
    constexpr unsigned char Lookup_{name}_{height}px[] = {{
"
    )
}

/// Closes the lookup table array and declares its font descriptor.
pub fn table_end(name: &str, width: u32, height: u32, stride: usize) -> String {
    let namespace = namespace_for_size(height);

    format!(
        "    }};

    // === Font Information ===
    // {name}: {height}px
    namespace {namespace}
    {{
        constexpr Font::Base_t {name} = {{
            .data = Lookup_{name}_{height}px,
            .width_px = {width},
            .height_px = {height},
            .stride = {stride}}};
    }};
"
    )
}

/// Closes the `Font` namespace and the include guard.
pub fn finalize(name: &str) -> String {
    format!("}};\n#endif /* {}_H_ */\n", name.to_uppercase())
}

/// Renders one lookup table and its descriptor.
pub fn render_table(table: &FontTable) -> String {
    let mut res = table_begin(table.name(), table.width(), table.size());
    for glyph in table.glyphs() {
        res.push_str(ROW_INDENT);
        res.push_str(&array_line(glyph.codepoint(), glyph.bytes()));
    }

    res.push_str(&table_end(
        table.name(),
        table.width(),
        table.size(),
        table.stride(),
    ));

    res
}

/// Renders a complete header holding every table, in order.
///
/// The include guard is named after the first table. Returns `None` when there is nothing to
/// render.
pub fn render(license: &str, tables: &[FontTable]) -> Option<String> {
    let name = tables.first()?.name();

    let mut res = String::from(license);
    res.push_str(&preamble(name));
    for table in tables {
        debug!("Rendering {} at {} px", table.name(), table.size());

        res.push_str(&render_table(table));
    }

    res.push_str(&finalize(name));

    Some(res)
}

/// Writes a rendered header to `path`, creating parent directories as needed.
pub fn write(path: impl AsRef<Path>, text: &str) -> Result<(), Error> {
    let path = path.as_ref();
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        create_dir_all(dir)?;
    }

    debug!("Writing {} bytes to {}", text.len(), path.display());

    write_file(path, text)?;

    Ok(())
}
