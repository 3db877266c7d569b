use std::fs::File;
use std::io;

use memmap2::Mmap;

use crate::errors::{RegionError, Result};

/// Map the full current contents of `file` read-only.
///
/// The returned mapping owns the page reservations and releases them
/// when dropped, on every exit path. Failures (permission, exhaustion,
/// stale handle) propagate as [`RegionError::Map`] carrying the platform
/// cause; none of them are transient at this layer, so nothing is
/// retried.
pub(crate) fn map_file(file: &File) -> Result<Mmap> {
    let len = file.metadata()?.len();
    if len == 0 {
        return Err(RegionError::Map(io::Error::new(
            io::ErrorKind::InvalidInput,
            "cannot map a zero-length file",
        )));
    }

    // SAFETY: the mapping is read-only and never exposed mutably. The
    // underlying file must not be truncated while the mapping is alive.
    let mapping = unsafe { Mmap::map(file)? };
    log::debug!("mapped {} bytes read-only", mapping.len());

    Ok(mapping)
}
