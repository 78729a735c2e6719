//! `moov` relocation: decision, patching and output assembly.

use tracing::debug;

use crate::{
    errors::FastStartError,
    fourcc::FourCC,
    patcher::patch_chunk_offsets,
    scanner::scan,
    store::ByteStore,
};

/// Rewrites an MP4/QuickTime file so the `moov` atom sits directly
/// after the `ftyp` atom (or first, when no `ftyp` exists) instead of
/// trailing the media data, enabling progressive playback.
///
/// Returns `Ok(None)` when the top-level atom chain does not end in a
/// `moov` atom: the input should be used unmodified. This is a
/// heuristic for "already fast start", not a structural validation.
///
/// Precondition, inherited from qt-faststart.c and not re-validated:
/// a trailing `moov` atom occupies exactly the final bytes of the
/// file. If other data follows it, the tail load silently reads the
/// wrong bytes.
pub fn fast_start(input: &mut ByteStore) -> Result<Option<ByteStore>, FastStartError> {
    let scan = scan(input)?;

    if scan.last.name != FourCC::Moov {
        debug!("last atom in file was not a moov atom");
        return Ok(None);
    }

    // moov was in fact the last atom: load it in full from the file
    // tail. Its size doubles as the relocation delta, since moving
    // the atom ahead of the media data shifts every chunk by exactly
    // the atom's own length.
    let moov_size = u32::try_from(scan.last.size)
        .map_err(|_| FastStartError::UnsupportedFile("uint32 value is too large"))?;
    if moov_size as u64 > input.len() {
        return Err(FastStartError::MalformedFile("failed to read moov atom"));
    }
    let tail_offset = input.len() - moov_size as u64;

    let mut moov = vec![0_u8; moov_size as usize];
    let count = input.read_buf_at(&mut moov, tail_offset)?;
    if count < moov_size as usize {
        return Err(FastStartError::MalformedFile("failed to read moov atom"));
    }

    patch_chunk_offsets(&mut moov, moov_size)?;

    let rest = tail_offset
        .checked_sub(scan.resume_offset)
        .ok_or(FastStartError::MalformedFile("moov atom overlaps preceding atoms"))?;

    let mut out = ByteStore::new();
    if let Some(ftyp) = &scan.ftyp {
        debug!("writing ftyp atom...");
        out.append(ftyp);
    }
    debug!("writing moov atom...");
    out.append(&moov);
    // the remainder of the input: every atom that is neither the
    // ftyp nor the moov, verbatim and in original order
    debug!("copying rest of file...");
    input.transfer_to(scan.resume_offset, rest, &mut out)?;

    Ok(Some(out))
}
