use thiserror::Error;

pub type Result<T> = std::result::Result<T, RegionError>;

#[derive(Error, Debug)]
pub enum RegionError {
    #[error("no zero-copy reader for source kind: {0}")]
    UnsupportedSource(&'static str),
    #[error("mapping failed: {0}")]
    Map(#[from] std::io::Error),
    // Release runs in Drop with the memmap2 backend and cannot surface
    // a cause; kept for providers that report unmap failures.
    #[error("unmapping failed: {0}")]
    Unmap(std::io::Error),
    #[error("end of stream")]
    EndOfStream,
    #[error("reader is already closed")]
    AlreadyClosed,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
