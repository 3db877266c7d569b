//! # Mem Region
//!
//! `mem-region` provides zero-copy sequential readers over in-memory
//! buffers and memory-mapped files.
//!
//! The conventional [`std::io::Read`] contract ("caller supplies a
//! buffer, callee fills it") copies every byte it hands out. Here the
//! storage belongs to the reader and [`RegionReader::read`] returns a
//! slice borrowed directly from it, which matters when sequentially
//! consuming large buffers or files where the copy dominates.
//!
//! Sources are restricted to ones with a fixed, addressable byte extent:
//! a buffer is aliased in place, a file is mapped read-only. Anything
//! else is refused with [`RegionError::UnsupportedSource`]; there is no
//! fallback reader that copies.
//!
//! ```
//! use mem_region::new_reader_from_bytes;
//!
//! # fn main() -> mem_region::Result<()> {
//! let mut reader = new_reader_from_bytes(b"Hello, world")?;
//! assert_eq!(reader.read(6)?, b"Hello,");
//! assert_eq!(reader.read(6)?, b" world");
//! reader.close()?;
//! # Ok(())
//! # }
//! ```

use std::fs::File;
use std::io::Read;

mod errors;
mod mmap;
mod reader;
mod region;

pub use errors::{RegionError, Result};
pub use reader::RegionReader;
pub use region::ByteRegion;

/// A byte source offered to [`new_reader`].
pub enum Source<'a> {
    /// An addressable in-memory buffer, aliased in place.
    Bytes(&'a [u8]),
    /// An open, readable file, mapped read-only. The handle may be
    /// dropped once the reader exists; the mapping keeps the pages
    /// alive.
    File(File),
    /// Any other byte stream. A plain stream has no addressable backing
    /// storage to borrow from, so no reader construction accepts it.
    Stream(Box<dyn Read + 'a>),
}

impl Source<'_> {
    /// Stable name of the source kind, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Source::Bytes(_) => "bytes",
            Source::File(_) => "file",
            Source::Stream(_) => "stream",
        }
    }
}

/// Construct the reader matching `source`.
///
/// Buffers are wrapped in a non-owning region; files go through the
/// platform mapping primitive and the reader owns the mapping until
/// [`RegionReader::close`] releases it. Source kinds without a zero-copy
/// construction fail with [`RegionError::UnsupportedSource`] instead of
/// degrading to a copying reader.
pub fn new_reader(source: Source<'_>) -> Result<RegionReader<'_>> {
    log::debug!("constructing reader over {} source", source.kind());

    match source {
        Source::Bytes(bytes) => {
            Ok(RegionReader::new(ByteRegion::from_bytes(bytes)))
        }
        Source::File(file) => {
            let mapping = mmap::map_file(&file)?;
            Ok(RegionReader::new(ByteRegion::from_mapping(mapping)))
        }
        other => Err(RegionError::UnsupportedSource(other.kind())),
    }
}

/// Wrap `bytes` in a [`Source`] and delegate to [`new_reader`].
pub fn new_reader_from_bytes(bytes: &[u8]) -> Result<RegionReader<'_>> {
    new_reader(Source::Bytes(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_kinds_are_named() {
        assert_eq!(Source::Bytes(&[]).kind(), "bytes");
        assert_eq!(
            Source::Stream(Box::new(std::io::empty())).kind(),
            "stream"
        );
    }

    #[test]
    fn refuses_plain_streams() {
        let source = Source::Stream(Box::new(std::io::empty()));
        match new_reader(source) {
            Err(RegionError::UnsupportedSource(kind)) => {
                assert_eq!(kind, "stream")
            }
            _ => panic!("expected UnsupportedSource"),
        }
    }

    #[test]
    fn from_bytes_reads_the_whole_buffer_in_one_call() {
        let data = b"Hello, world";
        let mut reader = new_reader_from_bytes(data).unwrap();

        assert_eq!(reader.read(data.len()).unwrap(), data);
        assert!(matches!(reader.read(1), Err(RegionError::EndOfStream)));
    }
}
