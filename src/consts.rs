/// FourCC:s for known top-level atoms.
/// Scanning stops at the first atom whose type
/// is not in this list.
///
/// - `ftyp`: file type, captured verbatim for re-emission
/// - `moov`: offset tables, timing, metadata
/// - `mdat`: raw media data
/// - `free`, `junk`, `skip`, `wide`: filler/padding
/// - `pnot`, `PICT`: preview/picture atoms
/// - `uuid`: vendor extension data
pub const TOP_LEVEL: [&'static str; 10] = [
    "free",
    "junk",
    "mdat",
    "moov",
    "pnot",
    "skip",
    "wide",
    "PICT",
    "uuid",
    "ftyp",
];

/// Atom header preamble: 32-bit size followed by FourCC.
pub const ATOM_PREAMBLE_SIZE: u64 = 8;
