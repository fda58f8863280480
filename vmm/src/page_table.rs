use crate::{
    address::{FrameId, PageNumber},
    config::PAGE_COUNT,
};

#[derive(Copy, Clone, Default, Debug, PartialEq, Eq)]
pub struct PageTableEntry {
    pub frame: Option<FrameId>,
    pub valid: bool,
    /// Access-counter value at the last reference to this page.
    pub last_access: u64,
}

pub struct PageTable {
    table: [PageTableEntry; PAGE_COUNT],
}

impl PageTable {
    pub fn new() -> Self {
        PageTable {
            table: [PageTableEntry::default(); PAGE_COUNT],
        }
    }

    /// Returns the frame of a resident page and refreshes its recency. A miss
    /// is a page fault; counting it is up to the caller.
    pub fn lookup(&mut self, page: PageNumber, now: u64) -> Option<FrameId> {
        let entry = &mut self.table[page.index()];

        if !entry.valid {
            return None;
        }

        entry.last_access = now;
        entry.frame
    }

    pub fn install(&mut self, page: PageNumber, frame: FrameId, now: u64) {
        self.table[page.index()] = PageTableEntry {
            frame: Some(frame),
            valid: true,
            last_access: now,
        };
    }

    pub fn invalidate(&mut self, page: PageNumber) {
        let entry = &mut self.table[page.index()];

        entry.valid = false;
        entry.frame = None;
    }

    pub fn touch(&mut self, page: PageNumber, now: u64) {
        let entry = &mut self.table[page.index()];

        if entry.valid {
            entry.last_access = now;
        }
    }

    pub fn entry(&self, page: PageNumber) -> &PageTableEntry {
        &self.table[page.index()]
    }

    /// Valid entries in ascending page order.
    pub fn valid_entries(&self) -> impl Iterator<Item = (PageNumber, &PageTableEntry)> {
        self.table
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.valid)
            .map(|(idx, entry)| (PageNumber(idx as u8), entry))
    }
}

impl Default for PageTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let mut table = PageTable::new();

        assert_eq!(table.valid_entries().count(), 0);
        assert_eq!(table.lookup(PageNumber(0), 1), None);
        assert!(!table.entry(PageNumber(255)).valid);
    }

    #[test]
    fn lookup_refreshes_recency() {
        let mut table = PageTable::new();
        table.install(PageNumber(4), FrameId(1), 3);

        assert_eq!(table.lookup(PageNumber(4), 9), Some(FrameId(1)));
        assert_eq!(table.entry(PageNumber(4)).last_access, 9);
    }

    #[test]
    fn invalidate_drops_the_mapping() {
        let mut table = PageTable::new();
        table.install(PageNumber(4), FrameId(1), 3);
        table.invalidate(PageNumber(4));

        let entry = table.entry(PageNumber(4));
        assert!(!entry.valid);
        assert_eq!(entry.frame, None);
        assert_eq!(table.lookup(PageNumber(4), 5), None);
    }

    #[test]
    fn touch_ignores_invalid_entries() {
        let mut table = PageTable::new();
        table.touch(PageNumber(2), 7);
        assert_eq!(table.entry(PageNumber(2)).last_access, 0);

        table.install(PageNumber(2), FrameId(0), 1);
        table.touch(PageNumber(2), 7);
        assert_eq!(table.entry(PageNumber(2)).last_access, 7);
    }

    #[test]
    fn valid_entries_are_in_page_order() {
        let mut table = PageTable::new();
        table.install(PageNumber(9), FrameId(0), 1);
        table.install(PageNumber(3), FrameId(1), 2);

        let pages: Vec<_> = table.valid_entries().map(|(page, _)| page).collect();
        assert_eq!(pages, vec![PageNumber(3), PageNumber(9)]);
    }
}
