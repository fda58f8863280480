use crate::{address::PageNumber, error::BackingStoreError};

/// Source of page contents. `read_page` fills `target` (one page long) with
/// the bytes stored at `page * PAGE_SIZE`. Any failure is fatal for the run.
pub trait BackingStore {
    fn read_page(&mut self, page: PageNumber, target: &mut [u8])
        -> Result<(), BackingStoreError>;
}

impl<T: BackingStore + ?Sized> BackingStore for &mut T {
    fn read_page(
        &mut self,
        page: PageNumber,
        target: &mut [u8],
    ) -> Result<(), BackingStoreError> {
        (**self).read_page(page, target)
    }
}
