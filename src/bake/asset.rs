//! Contains deserializable types which describe batches of fonts to bake.

use {
    crate::Error,
    serde::Deserialize,
    std::{
        fs::read_to_string,
        path::{Path, PathBuf},
    },
    toml::from_str,
};

/// A `.toml` project file listing every font, size and output header to bake.
///
/// ```toml
/// license = "license.txt"
///
/// [[font]]
/// src = "fonts/DejaVuSansMono.ttf"
/// sizes = [8, 16]
/// output = "include/dejavu_sans_mono.h"
/// ```
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Project {
    #[serde(rename = "font", default)]
    fonts: Vec<FontAsset>,
    license: Option<PathBuf>,
}

impl Project {
    /// Reads a project file from disk; relative paths inside it are made relative to the file.
    pub fn read(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let text = read_to_string(path).map_err(|err| Error::project(path, err))?;
        let mut res = Self::parse(path, &text)?;

        let dir = path.parent().unwrap_or_else(|| Path::new(""));
        res.canonicalize(dir);

        Ok(res)
    }

    /// Parses project file contents; `path` is only used to name the project in errors.
    pub fn parse(path: impl AsRef<Path>, text: &str) -> Result<Self, Error> {
        let path = path.as_ref();
        let res: Self = from_str(text).map_err(|err| Error::project(path, err))?;

        if res.fonts.is_empty() {
            return Err(Error::project(path, "no fonts are listed"));
        }

        for font in &res.fonts {
            if font.sizes.is_empty() {
                return Err(Error::project(
                    path,
                    format!("font `{}` lists no sizes", font.src),
                ));
            }
        }

        Ok(res)
    }

    fn canonicalize(&mut self, dir: &Path) {
        if let Some(license) = &mut self.license {
            *license = project_path(dir, license);
        }

        for font in &mut self.fonts {
            font.output = project_path(dir, &font.output);

            // Bare names are looked up among the installed fonts instead
            let src = Path::new(&font.src);
            if src.components().count() > 1 || dir.join(src).is_file() {
                font.src = project_path(dir, src).to_string_lossy().into_owned();
            }
        }
    }

    pub fn fonts(&self) -> &[FontAsset] {
        &self.fonts
    }

    /// File holding the comment block placed at the top of every generated header.
    pub fn license(&self) -> Option<&Path> {
        self.license.as_deref()
    }
}

/// Holds a description of one `.otf` or `.ttf` scalable font and the tables baked from it.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct FontAsset {
    collection_index: Option<u32>,
    output: PathBuf,
    sizes: Vec<u32>,
    src: String,
}

impl FontAsset {
    /// The index of the font to use if parsing a font collection.
    ///
    /// The default is `0`.
    pub fn collection_index(&self) -> u32 {
        self.collection_index.unwrap_or_default()
    }

    /// The header file written for this font.
    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Pixel heights to bake, in output order.
    pub fn sizes(&self) -> &[u32] {
        &self.sizes
    }

    /// The font file path, or the file name of an installed font.
    pub fn src(&self) -> &str {
        &self.src
    }
}

/// Joins relative paths onto the project directory; absolute paths are kept.
fn project_path(dir: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        dir.join(path)
    }
}
