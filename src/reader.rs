use crate::errors::{RegionError, Result};
use crate::region::ByteRegion;

/// Sequential reader over a [`ByteRegion`].
///
/// Unlike [`std::io::Read`], the reader owns the storage and `read`
/// returns a slice borrowed straight out of it, so consuming the region
/// performs no copies. The returned slice borrows the reader: the borrow
/// checker rejects holding it across a later `read`, `close` or drop.
///
/// A reader is either open or closed. Closing releases the backing
/// region (unmapping it for file-backed readers) and every later
/// operation fails with [`RegionError::AlreadyClosed`].
#[derive(Debug)]
pub struct RegionReader<'a> {
    region: Option<ByteRegion<'a>>,
    pos: usize,
}

impl<'a> RegionReader<'a> {
    /// Construct an open reader positioned at the start of `region`.
    pub fn new(region: ByteRegion<'a>) -> Self {
        Self {
            region: Some(region),
            pos: 0,
        }
    }

    /// Borrow the next `size` bytes from the region and advance past
    /// them.
    ///
    /// When fewer than `size` bytes remain, all remaining bytes are
    /// returned; callers detect this short read by comparing the
    /// returned length against `size`. A read of any positive size at
    /// the exact end of the region fails with
    /// [`RegionError::EndOfStream`]. `read(0)` is a probe: it returns an
    /// empty slice and moves nothing, at any position.
    pub fn read(&mut self, size: usize) -> Result<&[u8]> {
        let region = self
            .region
            .as_ref()
            .ok_or(RegionError::AlreadyClosed)?;
        let data = region.as_slice();

        if size == 0 {
            return Ok(&[]);
        }
        if self.pos == data.len() {
            return Err(RegionError::EndOfStream);
        }

        let end = self.pos.saturating_add(size).min(data.len());
        let slice = &data[self.pos..end];
        self.pos = end;
        Ok(slice)
    }

    /// Release the backing region. For a file-backed reader this unmaps
    /// the pages.
    ///
    /// Closing an already-closed reader fails with
    /// [`RegionError::AlreadyClosed`]: the resource was released once,
    /// and a second release attempt is a caller bug to surface, not
    /// swallow.
    pub fn close(&mut self) -> Result<()> {
        match self.region.take() {
            Some(region) => {
                log::trace!("closing reader at position {}", self.pos);
                drop(region);
                Ok(())
            }
            None => Err(RegionError::AlreadyClosed),
        }
    }

    /// Bytes consumed so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes left before end of stream; zero once closed.
    pub fn remaining(&self) -> usize {
        self.region
            .as_ref()
            .map_or(0, |region| region.len() - self.pos)
    }

    pub fn is_closed(&self) -> bool {
        self.region.is_none()
    }
}
