//! Conversion and byte store errors.

use std::fmt;

/// Errors raised while scanning an MP4 file
/// or relocating its `moov` atom.
///
/// All of these abort the conversion for the current input.
/// There is no partial-output mode.
#[derive(Debug)]
pub enum FastStartError {
    /// Converted `binrw` error.
    BinReadError(binrw::Error),
    /// IO error
    IoError(std::io::Error),
    /// File length exceeds the supported addressable range.
    BadFileSize(u64),
    /// Read or write position outside the current store bounds.
    BadFilePosition{pos: u64, max: u64},
    /// Structurally broken input, e.g. a chunk offset table
    /// whose declared size exceeds the bytes that remain.
    MalformedFile(&'static str),
    /// Valid but unsupported input, e.g. compressed (`cmov`)
    /// movie atoms, or offsets past the 32-bit range.
    UnsupportedFile(&'static str),
}

impl std::error::Error for FastStartError {}

impl fmt::Display for FastStartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FastStartError::BinReadError(err) => write!(f, "{err}"),
            FastStartError::IoError(err) => write!(f, "IO error: {err}"),
            FastStartError::BadFileSize(len) => write!(f, "File size {len} exceeds the supported range."),
            FastStartError::BadFilePosition{pos, max} => write!(f, "Position {pos} is outside store of {max} bytes."),
            FastStartError::MalformedFile(msg) => write!(f, "Malformed file: {msg}."),
            FastStartError::UnsupportedFile(msg) => write!(f, "Unsupported file: {msg}."),
        }
    }
}

/// Converts std::io::Error to FastStartError
impl From<std::io::Error> for FastStartError {
    fn from(err: std::io::Error) -> Self {
        FastStartError::IoError(err)
    }
}

/// Converts binrw::Error to FastStartError
impl From<binrw::Error> for FastStartError {
    fn from(err: binrw::Error) -> Self {
        FastStartError::BinReadError(err)
    }
}

/// Converts FastStartError to std::io::Error
impl From<FastStartError> for std::io::Error {
    fn from(err: FastStartError) -> Self {
        std::io::Error::new(std::io::ErrorKind::Other, err)
    }
}
