use image::ImageError;
use sdl2::render::{TextureValueError, UpdateTextureError};
use sdl2::video::WindowBuildError;
use sdl2::IntegerOrSdlError;

use std::error::Error;
use std::fmt;
use std::io::Error as IOError;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct InspectError(InspectErrorKind);

#[derive(Debug)]
pub enum InspectErrorKind {
    IOError(IOError),
    DecodeError { path: PathBuf, source: ImageError },
    EmptyImage(PathBuf),
    WindowError(String),
}

impl InspectError {
    fn kind(&self) -> &InspectErrorKind {
        &self.0
    }

    pub fn decode(path: impl AsRef<Path>, source: ImageError) -> Self {
        Self(InspectErrorKind::DecodeError {
            path: path.as_ref().to_path_buf(),
            source,
        })
    }

    pub fn empty(path: impl AsRef<Path>) -> Self {
        Self(InspectErrorKind::EmptyImage(path.as_ref().to_path_buf()))
    }

    pub fn is_decode(&self) -> bool {
        match self.kind() {
            InspectErrorKind::DecodeError { .. } | InspectErrorKind::EmptyImage(_) => true,
            _ => false,
        }
    }
}

impl<T> From<T> for InspectError
where T: Into<InspectErrorKind>
{
    fn from(e: T) -> Self {
        Self(e.into())
    }
}

impl fmt::Display for InspectError {

    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind() {
            InspectErrorKind::IOError(e) => e.fmt(f),
            InspectErrorKind::DecodeError { path, source } => {
                write!(f, "cannot decode image {}: {}", path.display(), source)
            }
            InspectErrorKind::EmptyImage(path) => {
                write!(f, "decoded image {} has no pixels", path.display())
            }
            InspectErrorKind::WindowError(e) => write!(f, "display window error: {}", e),
        }
    }
}

impl Error for InspectError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self.kind() {
            InspectErrorKind::IOError(e) => Some(e),
            InspectErrorKind::DecodeError { source, .. } => Some(source),
            InspectErrorKind::EmptyImage(_) => None,
            InspectErrorKind::WindowError(_) => None,
        }
    }
}

impl From<IOError> for InspectErrorKind {
    fn from(e: IOError) -> Self {
        Self::IOError(e)
    }
}

impl From<String> for InspectErrorKind {
    fn from(e: String) -> Self {
        Self::WindowError(e)
    }
}

impl From<WindowBuildError> for InspectErrorKind {
    fn from(e: WindowBuildError) -> Self {
        Self::WindowError(e.to_string())
    }
}

impl From<IntegerOrSdlError> for InspectErrorKind {
    fn from(e: IntegerOrSdlError) -> Self {
        Self::WindowError(e.to_string())
    }
}

impl From<TextureValueError> for InspectErrorKind {
    fn from(e: TextureValueError) -> Self {
        Self::WindowError(e.to_string())
    }
}

impl From<UpdateTextureError> for InspectErrorKind {
    fn from(e: UpdateTextureError) -> Self {
        Self::WindowError(e.to_string())
    }
}
