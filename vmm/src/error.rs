use thiserror::Error;

use crate::address::{FrameId, PageNumber};

#[derive(Error, Debug)]
pub enum BackingStoreError {
    #[error("I/O error while reading page {page}: {source}")]
    Io {
        page: PageNumber,
        #[source]
        source: std::io::Error,
    },

    #[error("short read for page {page}: expected {expected} bytes, got {actual}")]
    ShortRead {
        page: PageNumber,
        expected: usize,
        actual: usize,
    },
}

#[derive(Error, Debug)]
pub enum VmError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("cannot release frame {frame}: {reason}")]
    FrameRelease { frame: FrameId, reason: &'static str },

    #[error("no valid page to evict")]
    NoVictim,

    #[error(transparent)]
    BackingStore(#[from] BackingStoreError),
}
