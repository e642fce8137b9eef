use {
    super::raster::{Canvas, GlyphSource},
    crate::{math::BoundingBox, Error},
    directories::{BaseDirs, UserDirs},
    fontdue::{Font, FontSettings},
    glob::{glob, Pattern},
    log::{debug, info, trace},
    std::{
        fmt::{Debug, Formatter, Result as FmtResult},
        fs::read,
        path::{Path, PathBuf},
    },
    ttf_parser::{name_id, Face},
};

/// Coverage values at or above this threshold are treated as ink.
///
/// Glyphs are rendered anti-aliased and then thresholded, not hinted in a monochrome mode, so
/// strokes which straddle pixel edges may come out one pixel thinner or thicker than a hinted
/// renderer would draw them.
const INK_THRESHOLD: u8 = 128;

/// Extensions tried, in order, when a font is given by file name only.
const FONT_EXTENSIONS: [&str; 4] = ["ttf", "otf", "ttc", "otc"];

/// A scalable `.ttf` or `.otf` font loaded at a fixed pixel size.
pub struct VectorFont {
    ascent: i32,
    family_name: String,
    font: Font,
    px: f32,
}

impl VectorFont {
    /// Locates and loads the font named by `identifier`, which is either a path to a font file or
    /// the file name of an installed font (`DejaVuSansMono` or `DejaVuSansMono.ttf`).
    pub fn load(identifier: &str, px: u32, collection_index: u32) -> Result<Self, Error> {
        let path = resolve_font_path(identifier)
            .ok_or_else(|| Error::font_not_found(identifier, "no such font file"))?;

        info!("Loading font: {}", path.display());

        let data = read(&path).map_err(|err| Error::font_not_found(identifier, err))?;

        Self::from_bytes(identifier, &data, px, collection_index)
    }

    /// Parses font file contents; `identifier` is only used to name the font in errors.
    pub fn from_bytes(
        identifier: &str,
        data: &[u8],
        px: u32,
        collection_index: u32,
    ) -> Result<Self, Error> {
        let face = Face::parse(data, collection_index)
            .map_err(|err| Error::font_not_found(identifier, err))?;
        let family_name = family_name(&face).unwrap_or_else(|| {
            Path::new(identifier)
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_else(|| identifier.to_owned())
        });

        let px = px as f32;
        let font = Font::from_bytes(
            data,
            FontSettings {
                collection_index,
                scale: px,
                ..Default::default()
            },
        )
        .map_err(|err| Error::font_not_found(identifier, err))?;
        let ascent = font
            .horizontal_line_metrics(px)
            .map(|metrics| metrics.ascent.ceil() as i32)
            .unwrap_or(px as i32);

        debug!(
            "Font `{}` at {} px has an ascent of {} px",
            family_name, px, ascent
        );

        Ok(Self {
            ascent,
            family_name,
            font,
            px,
        })
    }

    /// The distance, in whole pixels, from the top of the ascender line to the baseline.
    pub fn ascent(&self) -> i32 {
        self.ascent
    }
}

impl Debug for VectorFont {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write!(f, "VectorFont({} @ {} px)", self.family_name, self.px)
    }
}

impl GlyphSource for VectorFont {
    fn family_name(&self) -> &str {
        &self.family_name
    }

    fn bbox(&self, codepoint: u8) -> BoundingBox {
        let metrics = self.font.metrics(char::from(codepoint), self.px);
        if metrics.width == 0 || metrics.height == 0 {
            return BoundingBox::ZERO;
        }

        let bottom = self.ascent - metrics.ymin;

        BoundingBox::new(
            metrics.xmin,
            bottom - metrics.height as i32,
            metrics.xmin + metrics.width as i32,
            bottom,
        )
    }

    fn draw(&self, canvas: &mut Canvas, origin: (i32, i32), codepoint: u8) {
        let (metrics, coverage) = self.font.rasterize(char::from(codepoint), self.px);
        if metrics.width == 0 {
            return;
        }

        let left = origin.0 + metrics.xmin;
        let top = origin.1 + self.ascent - metrics.ymin - metrics.height as i32;

        trace!(
            "Drawing {:#04x} ({}x{} at {}, {})",
            codepoint,
            metrics.width,
            metrics.height,
            left,
            top
        );

        for (idx, &value) in coverage.iter().enumerate() {
            if value >= INK_THRESHOLD {
                let x = (idx % metrics.width) as i32;
                let y = (idx / metrics.width) as i32;
                canvas.set(left + x, top + y);
            }
        }
    }
}

/// Reads the family name from the font's `name` table.
fn family_name(face: &Face) -> Option<String> {
    [name_id::FAMILY, name_id::TYPOGRAPHIC_FAMILY]
        .iter()
        .find_map(|&id| {
            face.names()
                .into_iter()
                .filter(|name| name.name_id == id && name.is_unicode())
                .find_map(|name| name.to_string())
        })
}

/// Returns the path of the font named by `identifier`: the identifier itself when it names an
/// existing file, otherwise the first installed font file with that name.
pub fn resolve_font_path(identifier: &str) -> Option<PathBuf> {
    let path = PathBuf::from(identifier);
    if path.is_file() {
        return Some(path);
    }

    // Anything with a directory component is a path which does not exist
    if path.components().count() != 1 {
        return None;
    }

    let file_names = if path.extension().is_some() {
        vec![identifier.to_lowercase()]
    } else {
        FONT_EXTENSIONS
            .iter()
            .map(|ext| format!("{}.{}", identifier, ext).to_lowercase())
            .collect()
    };

    font_dirs().iter().find_map(|dir| {
        trace!("Searching for `{}` in {}", identifier, dir.display());

        find_in_dir(dir, &file_names)
    })
}

/// Returns the first file below `dir` whose lower-cased name is one of `file_names`.
fn find_in_dir(dir: &Path, file_names: &[String]) -> Option<PathBuf> {
    let pattern = format!("{}/**/*", Pattern::escape(&dir.to_string_lossy()));

    glob(&pattern).ok()?.flatten().find(|path| {
        path.file_name()
            .map(|name| file_names.contains(&name.to_string_lossy().to_lowercase()))
            .unwrap_or_default()
    })
}

/// System and per-user directories which may contain installed fonts, in search order.
fn font_dirs() -> Vec<PathBuf> {
    let mut res = vec![];

    if let Some(dirs) = UserDirs::new() {
        if let Some(dir) = dirs.font_dir() {
            res.push(dir.to_path_buf());
        }
    }

    if let Some(dirs) = BaseDirs::new() {
        res.push(dirs.home_dir().join(".fonts"));
        res.push(dirs.data_dir().join("fonts"));
    }

    for dir in [
        "/usr/share/fonts",
        "/usr/local/share/fonts",
        "/Library/Fonts",
        "/System/Library/Fonts",
        "C:\\Windows\\Fonts",
    ] {
        res.push(PathBuf::from(dir));
    }

    res.dedup();
    res.retain(|dir| dir.is_dir());
    res
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        std::{
            env::temp_dir,
            fs::{create_dir_all, remove_dir_all, write},
        },
    };

    /// Every outline edge of this font lies on a whole pixel at 8, 16 and 24 px.
    const BAKE_TEST: &[u8] = include_bytes!("../../tests/fonts/BakeTest.ttf");

    #[test]
    fn missing_font_file_is_not_found() {
        let err = VectorFont::load("invalid_font.ttf", 8, 0).unwrap_err();

        assert!(matches!(err, Error::FontNotFound { .. }));
    }

    #[test]
    fn missing_font_path_is_not_resolved() {
        assert!(resolve_font_path("no/such/dir/font.ttf").is_none());
    }

    #[test]
    fn garbage_bytes_are_not_a_font() {
        let err = VectorFont::from_bytes("garbage.ttf", &[0u8; 64], 8, 0).unwrap_err();

        assert!(matches!(
            err,
            Error::FontNotFound { ref identifier, .. } if identifier == "garbage.ttf"
        ));
    }

    #[test]
    fn family_name_comes_from_the_name_table() {
        let font = VectorFont::from_bytes("renamed.ttf", BAKE_TEST, 8, 0).unwrap();

        assert_eq!(font.family_name(), "Bake Test");
    }

    #[test]
    fn bounding_boxes_hang_from_the_ascent() {
        for (px, scale) in [(8, 1), (16, 2), (24, 3)] {
            let font = VectorFont::from_bytes("BakeTest.ttf", BAKE_TEST, px, 0).unwrap();

            assert_eq!(font.ascent(), px as i32);
            assert_eq!(
                font.bbox(b'A'),
                BoundingBox::new(0, scale, 5 * scale, 8 * scale)
            );
            assert_eq!(
                font.bbox(b'.'),
                BoundingBox::new(2 * scale, 7 * scale, 3 * scale, 8 * scale)
            );
            assert_eq!(font.bbox(b' '), BoundingBox::ZERO);
            assert_eq!(font.bbox(b'B'), BoundingBox::ZERO);
        }
    }

    #[test]
    fn glyphs_draw_inside_their_bounding_box() {
        let font = VectorFont::from_bytes("BakeTest.ttf", BAKE_TEST, 8, 0).unwrap();
        let mut canvas = Canvas::new(16, 16);
        font.draw(&mut canvas, (4, 4), b'.');

        for y in 0..16 {
            for x in 0..16 {
                assert_eq!(canvas.get(x, y), (x, y) == (6, 11), "pixel {}, {}", x, y);
            }
        }
    }

    #[test]
    fn font_dirs_with_glob_characters_are_searched() {
        let dir = temp_dir()
            .join(format!("font-bake-{}", std::process::id()))
            .join("fonts[1]");
        let nested = dir.join("truetype");
        create_dir_all(&nested).unwrap();
        write(nested.join("BakeTest.ttf"), BAKE_TEST).unwrap();

        let found = find_in_dir(&dir, &["baketest.ttf".to_owned()]);

        remove_dir_all(dir.parent().unwrap()).unwrap();

        assert_eq!(found, Some(nested.join("BakeTest.ttf")));
    }
}
