//! MP4 atom header.

use binrw::BinReaderExt;

use crate::{
    consts::ATOM_PREAMBLE_SIZE,
    errors::FastStartError,
    fourcc::FourCC,
    store::ByteStore,
};

/// Atom header.
/// 8 or 16 bytes in MP4, depending on whether
/// 32 or 64-bit sized.
///
/// ```ignore
/// | [X X X X] [Y Y Y Y] [Z Z Z Z Z Z Z Z] |
///    |         |         |
///    |         |         64bit size (optional, only if 32 bit size == 1)
///    |         FourCC
///    32bit size
/// ```
#[derive(Debug, Clone, Default)]
pub struct AtomHeader {
    /// Total atom size in bytes including the 8/16 byte header.
    pub(crate) size: u64,
    /// FourCC
    pub(crate) name: FourCC,
    /// Absolute byte offset for start of atom,
    /// i.e. byte offset for its header,
    /// starting with the 32-bit size.
    pub(crate) offset: u64,
    /// Set to `true` if atom size was specified
    /// in the 64 bit area (32-bit size set to `1`).
    pub(crate) size_64bit: bool,
}

impl AtomHeader {
    /// Reads the header at the store cursor, leaving the cursor
    /// directly after it (at the data load).
    ///
    /// Returns `Ok(None)` when fewer bytes than a full header
    /// remain, i.e. the store ends here. Does not verify that the
    /// cursor is at an atom boundary.
    pub fn read(store: &mut ByteStore) -> Result<Option<Self>, FastStartError> {
        if store.rem() < ATOM_PREAMBLE_SIZE {
            return Ok(None);
        }

        let offset = store.pos();
        let size32 = store.read_be::<u32>()?;
        let name = FourCC::from_u32(store.read_be::<u32>()?);

        let mut header = Self {
            size: size32 as u64,
            name,
            offset,
            size_64bit: false,
        };

        // 64-bit special case: actual size follows directly after
        // the FourCC. A store that ends inside the extended size
        // field has no fully classifiable atom here.
        if size32 == 1 {
            if store.rem() < 8 {
                return Ok(None);
            }
            header.size = store.read_be::<u64>()?;
            header.size_64bit = true;
            if header.size > i64::MAX as u64 {
                return Err(FastStartError::UnsupportedFile("uint64 value is too large"));
            }
        }

        Ok(Some(header))
    }

    /// Total atom size in bytes, header included.
    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn name(&self) -> &FourCC {
        &self.name
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Header size in bytes: 8, or 16 when the size
    /// was stored in the 64-bit area.
    pub fn header_size(&self) -> u8 {
        match self.size_64bit {
            true => 16,
            false => 8,
        }
    }

    /// Size of the data load, excluding the header.
    pub fn data_size(&self) -> u64 {
        self.size.saturating_sub(self.header_size() as u64)
    }

    /// Absolute offset directly after the atom.
    pub fn end(&self) -> u64 {
        self.offset + self.size
    }
}
