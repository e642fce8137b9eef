use std::{
    error::Error as StdError,
    fmt::{Display, Formatter, Result as FmtResult},
    io::Error as IoError,
    path::PathBuf,
};

/// Everything which can go wrong while baking a font into glyph tables.
#[derive(Debug)]
pub enum Error {
    /// The font could not be located or could not be parsed by the renderer.
    FontNotFound { identifier: String, reason: String },
    /// The requested pixel height is zero or not a multiple of 8.
    InvalidSize(u32),
    /// A pixel sequence handed to the bit packer did not hold exactly 8 pixels.
    InvalidInput(usize),
    Io(IoError),
    /// A project file could not be read or described an unusable job.
    Project { path: PathBuf, reason: String },
}

impl Error {
    pub(crate) fn font_not_found(identifier: impl Into<String>, reason: impl Display) -> Self {
        Self::FontNotFound {
            identifier: identifier.into(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn project(path: impl Into<PathBuf>, reason: impl Display) -> Self {
        Self::Project {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self {
            Self::FontNotFound { identifier, reason } => {
                write!(f, "font `{}` is not available: {}", identifier, reason)
            }
            Self::InvalidSize(size) => write!(
                f,
                "invalid font size {} px: the height must be a non-zero multiple of 8",
                size
            ),
            Self::InvalidInput(len) => {
                write!(f, "expected a sequence of 8 pixels, found {}", len)
            }
            Self::Io(err) => write!(f, "i/o error: {}", err),
            Self::Project { path, reason } => {
                write!(f, "project `{}`: {}", path.display(), reason)
            }
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<IoError> for Error {
    fn from(error: IoError) -> Self {
        Self::Io(error)
    }
}
