//! Relocate the `moov` atom of an MP4/QuickTime file to the front of
//! the file for progressive ("fast start") playback, patching the
//! chunk offset tables (`stco`/`co64`) it carries to match.
//!
//! The whole file is processed in memory; nothing is streamed.
//!
//! ```rs
//! use mp4faststart::{fast_start, ByteStore};
//!
//! fn main() -> std::io::Result<()> {
//!     let bytes = std::fs::read("VIDEO.MP4")?;
//!     let mut store = ByteStore::from_vec(bytes)?;
//!
//!     match fast_start(&mut store)? {
//!         Some(out) => std::fs::write("VIDEO_FAST.MP4", out.as_slice())?,
//!         None => println!("already fast start, nothing to do"),
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod atom;
pub mod consts;
pub mod errors;
pub mod faststart;
pub mod fourcc;
pub mod patcher;
pub mod scanner;
pub mod store;

pub use atom::AtomHeader;
pub use consts::{ATOM_PREAMBLE_SIZE, TOP_LEVEL};
pub use errors::FastStartError;
pub use faststart::fast_start;
pub use fourcc::FourCC;
pub use patcher::patch_chunk_offsets;
pub use scanner::{scan, Scan};
pub use store::ByteStore;
