//! Sequential walk over the top-level atom chain.
//!
//! The scan only needs to answer one question for the relocation
//! decision: which atom does the file end on? It therefore never
//! descends into containers. The `ftyp` atom is captured verbatim
//! along the way so it can be re-emitted first.

use tracing::debug;

use crate::{
    atom::AtomHeader,
    consts::ATOM_PREAMBLE_SIZE,
    errors::FastStartError,
    fourcc::FourCC,
    store::ByteStore,
};

/// Terminal state of a top-level scan.
#[derive(Debug, Clone, Default)]
pub struct Scan {
    /// Last fully classified atom. Defaults to a blank
    /// header when the store holds no complete atom at all.
    pub(crate) last: AtomHeader,
    /// Verbatim `ftyp` atom (header + payload), if present.
    pub(crate) ftyp: Option<Vec<u8>>,
    /// Offset directly after the `ftyp` atom, 0 when absent.
    /// Re-assembly of the remaining atoms resumes here.
    pub(crate) resume_offset: u64,
}

impl Scan {
    pub fn last(&self) -> &AtomHeader {
        &self.last
    }

    pub fn ftyp(&self) -> Option<&[u8]> {
        self.ftyp.as_deref()
    }

    pub fn resume_offset(&self) -> u64 {
        self.resume_offset
    }
}

/// Walks the atom chain from the start of the store until the store
/// ends, an unknown top-level type is encountered, or an atom declares
/// a size too small to step over. All three are valid stopping points;
/// the caller classifies the file by the last atom seen.
pub fn scan(store: &mut ByteStore) -> Result<Scan, FastStartError> {
    store.set_pos(0);

    let mut scan = Scan::default();

    while let Some(header) = AtomHeader::read(store)? {
        debug!("{} @{} size: {}", header.name(), header.offset(), header.size());
        scan.last = header.clone();

        // keep the ftyp atom for re-emission
        if header.name == FourCC::Ftyp {
            if header.size > u32::MAX as u64 {
                return Err(FastStartError::UnsupportedFile("uint32 value is too large"));
            }
            let mut ftyp = vec![0_u8; header.size as usize];
            let count = store.read_buf_at(&mut ftyp, header.offset())?;
            if (count as u64) < header.size {
                // store ends inside the ftyp payload
                break;
            }
            scan.ftyp = Some(ftyp);
            scan.resume_offset = header.end();
        }

        if !header.name().is_top_level() {
            debug!("encountered non-QT top-level atom (is this a QuickTime file?)");
            break;
        }

        // The atom header is 8 (or 16) bytes. If the atom size, which
        // includes the header, is less than that, scanning cannot
        // safely continue past this atom.
        if header.size < ATOM_PREAMBLE_SIZE {
            break;
        }

        store.set_pos(header.end());
    }

    Ok(scan)
}
