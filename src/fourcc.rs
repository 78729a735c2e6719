//! MP4 atom FourCC.
//! See https://developer.apple.com/library/archive/documentation/QuickTime/QTFF/QTFFChap2/qtff2.html#//apple_ref/doc/uid/TP40000939-CH204-56313.
//! Only the type codes this tool classifies are listed;
//! anything else maps to `Custom`.

use std::fmt;

use crate::consts::TOP_LEVEL;

/// MP4 atom Four CC.
/// See https://developer.apple.com/library/archive/documentation/QuickTime/QTFF/QTFFChap2/qtff2.html#//apple_ref/doc/uid/TP40000939-CH204-56313.
#[derive(Debug, Clone, PartialEq)]
pub enum FourCC {
    /// Free space/filler atom
    Free,
    Junk,
    /// Media data atom
    Mdat,
    /// Movie atom, holds the chunk offset tables
    Moov,
    Pnot,
    Skip,
    Wide,
    Pict,
    /// Vendor extension data
    Uuid,
    /// File type atom
    Ftyp,
    /// Compressed movie data marker (unsupported)
    Cmov,
    /// Chunk offset, 32-bit values
    Stco,
    /// Chunk offset, 64-bit values
    Co64,

    Custom(String)
}

impl FourCC {
    pub fn from_slice(fourcc: &[u8]) -> Self {
        match fourcc {
            // Top-level atoms
            b"free" => Self::Free,
            b"junk" => Self::Junk,
            b"mdat" => Self::Mdat,
            b"moov" => Self::Moov,
            b"pnot" => Self::Pnot,
            b"skip" => Self::Skip,
            b"wide" => Self::Wide,
            b"PICT" => Self::Pict,
            b"uuid" => Self::Uuid,
            b"ftyp" => Self::Ftyp,

            // moov-internal data structures
            b"cmov" => Self::Cmov,
            b"stco" => Self::Stco,
            b"co64" => Self::Co64,

            _ => Self::Custom(String::from_utf8_lossy(fourcc).to_string()),
        }
    }

    pub fn from_u32(value: u32) -> Self {
        Self::from_slice(&value.to_be_bytes())
    }

    pub fn from_str(fourcc: &str) -> Self {
        match fourcc {
            "free" => Self::Free,
            "junk" => Self::Junk,
            "mdat" => Self::Mdat,
            "moov" => Self::Moov,
            "pnot" => Self::Pnot,
            "skip" => Self::Skip,
            "wide" => Self::Wide,
            "PICT" => Self::Pict,
            "uuid" => Self::Uuid,
            "ftyp" => Self::Ftyp,
            "cmov" => Self::Cmov,
            "stco" => Self::Stco,
            "co64" => Self::Co64,
            _ => Self::Custom(fourcc.to_owned()),
        }
    }

    pub fn to_str(&self) -> &str {
        match self {
            Self::Free => "free",
            Self::Junk => "junk",
            Self::Mdat => "mdat",
            Self::Moov => "moov",
            Self::Pnot => "pnot",
            Self::Skip => "skip",
            Self::Wide => "wide",
            Self::Pict => "PICT",
            Self::Uuid => "uuid",
            Self::Ftyp => "ftyp",
            Self::Cmov => "cmov",
            Self::Stco => "stco",
            Self::Co64 => "co64",
            Self::Custom(s) => s.as_str()
        }
    }

    /// Whether this is a known top-level atom type.
    /// Scanning the main atom chain stops at anything else.
    pub fn is_top_level(&self) -> bool {
        TOP_LEVEL.contains(&self.to_str())
    }
}

impl Default for FourCC {
    fn default() -> Self {
        Self::Custom("None".to_owned())
    }
}

impl fmt::Display for FourCC {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}
