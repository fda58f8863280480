//! FileBackingStore - the backing store is a flat binary file where page `p`
//! occupies bytes `[p * PAGE_SIZE, (p + 1) * PAGE_SIZE)`.
//!
//! The file is opened once and every page load is a seek plus an exact read.
//! A file too short to hold the requested page is reported as a short read.

use std::{
    fs::File,
    io::{ErrorKind, Read, Seek, SeekFrom},
    path::Path,
};

use log::trace;
use vmm::{config::PAGE_SIZE, BackingStore, BackingStoreError, PageNumber};

#[derive(Debug)]
pub struct FileBackingStore<F = File> {
    file: F,
}

impl FileBackingStore<File> {
    pub fn open<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        Ok(Self::from_reader(File::open(path)?))
    }
}

impl<F: Read + Seek> FileBackingStore<F> {
    pub fn from_reader(file: F) -> Self {
        FileBackingStore { file }
    }

    /// Reads until `target` is full or the file ends; returns the byte count.
    fn fill(&mut self, target: &mut [u8]) -> std::io::Result<usize> {
        let mut filled = 0;

        while filled < target.len() {
            match self.file.read(&mut target[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }

        Ok(filled)
    }
}

impl<F: Read + Seek> BackingStore for FileBackingStore<F> {
    fn read_page(&mut self, page: PageNumber, target: &mut [u8]) -> Result<(), BackingStoreError> {
        let offset = (page.index() * PAGE_SIZE) as u64;

        self.file
            .seek(SeekFrom::Start(offset))
            .map_err(|source| BackingStoreError::Io { page, source })?;

        let actual = self
            .fill(target)
            .map_err(|source| BackingStoreError::Io { page, source })?;

        if actual != target.len() {
            return Err(BackingStoreError::ShortRead {
                page,
                expected: target.len(),
                actual,
            });
        }

        trace!(
            "backing_store: page {} loaded: {}",
            page,
            hex::encode(&target[..target.len().min(16)])
        );

        Ok(())
    }
}
