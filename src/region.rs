use memmap2::Mmap;

/// A fixed-length, read-only view over a single byte storage location.
///
/// A region never duplicates storage: it either aliases a buffer owned
/// by the caller, or owns the pages of a file mapping. Its length is
/// fixed at construction.
#[derive(Debug)]
pub struct ByteRegion<'a> {
    storage: Storage<'a>,
}

#[derive(Debug)]
enum Storage<'a> {
    Borrowed(&'a [u8]),
    Mapped(Mmap),
}

impl<'a> ByteRegion<'a> {
    /// Wrap an existing buffer. The region aliases `bytes` and does not
    /// take ownership of the allocation. Cannot fail.
    pub fn from_bytes(bytes: &'a [u8]) -> Self {
        Self {
            storage: Storage::Borrowed(bytes),
        }
    }

    /// Wrap a fresh mapping. The region becomes the owning handle and
    /// the pages are released when it is dropped.
    pub(crate) fn from_mapping(mapping: Mmap) -> Self {
        Self {
            storage: Storage::Mapped(mapping),
        }
    }

    pub fn as_slice(&self) -> &[u8] {
        match &self.storage {
            Storage::Borrowed(bytes) => bytes,
            Storage::Mapped(mapping) => mapping,
        }
    }

    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }
}
