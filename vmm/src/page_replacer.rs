use std::collections::VecDeque;

use crate::{
    address::{FrameId, PageNumber},
    page_table::PageTable,
};

pub enum PageEvent {
    Touched(PageNumber),
    Loaded(PageNumber),
}

pub trait PageReplacer {
    fn page_event(&mut self, _event: PageEvent) {}

    /// Picks the resident page whose frame should be reused. `None` only when
    /// no page is resident.
    fn pick_victim(&mut self, page_table: &PageTable) -> Option<(PageNumber, FrameId)>;
}

/// Evicts the resident page with the oldest `last_access`. On a tie the lowest
/// page number wins.
#[derive(Default)]
pub struct LruPageReplacer;

impl LruPageReplacer {
    pub fn new() -> Self {
        LruPageReplacer
    }
}

impl PageReplacer for LruPageReplacer {
    fn pick_victim(&mut self, page_table: &PageTable) -> Option<(PageNumber, FrameId)> {
        let mut victim: Option<(PageNumber, FrameId, u64)> = None;

        for (page, entry) in page_table.valid_entries() {
            let Some(frame) = entry.frame else { continue };

            let older = victim.map_or(true, |(_, _, oldest)| entry.last_access < oldest);

            if older {
                victim = Some((page, frame, entry.last_access));
            }
        }

        victim.map(|(page, frame, _)| (page, frame))
    }
}

#[derive(Default)]
pub struct FifoPageReplacer {
    fifo: VecDeque<PageNumber>,
}

impl FifoPageReplacer {
    pub fn new() -> Self {
        FifoPageReplacer {
            fifo: VecDeque::new(),
        }
    }
}

impl PageReplacer for FifoPageReplacer {
    fn page_event(&mut self, event: PageEvent) {
        if let PageEvent::Loaded(page) = event {
            self.fifo.push_back(page)
        }
    }

    fn pick_victim(&mut self, page_table: &PageTable) -> Option<(PageNumber, FrameId)> {
        while let Some(page) = self.fifo.pop_front() {
            let entry = page_table.entry(page);

            if let (true, Some(frame)) = (entry.valid, entry.frame) {
                return Some((page, frame));
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_with(pages: &[(u8, u16, u64)]) -> PageTable {
        let mut table = PageTable::new();
        for &(page, frame, at) in pages {
            table.install(PageNumber(page), FrameId(frame), at);
        }
        table
    }

    #[test]
    fn lru_picks_oldest_access() {
        let table = table_with(&[(1, 0, 5), (7, 1, 2), (3, 2, 9)]);

        assert_eq!(
            LruPageReplacer::new().pick_victim(&table),
            Some((PageNumber(7), FrameId(1)))
        );
    }

    #[test]
    fn lru_breaks_ties_by_lowest_page() {
        let table = table_with(&[(9, 0, 4), (2, 1, 4), (5, 2, 4)]);

        assert_eq!(
            LruPageReplacer::new().pick_victim(&table),
            Some((PageNumber(2), FrameId(1)))
        );
    }

    #[test]
    fn lru_skips_invalidated_pages() {
        let mut table = table_with(&[(0, 0, 1), (1, 1, 2)]);
        table.invalidate(PageNumber(0));

        assert_eq!(
            LruPageReplacer::new().pick_victim(&table),
            Some((PageNumber(1), FrameId(1)))
        );
    }

    #[test]
    fn nothing_to_evict_from_empty_table() {
        let table = PageTable::new();

        assert_eq!(LruPageReplacer::new().pick_victim(&table), None);
        assert_eq!(FifoPageReplacer::new().pick_victim(&table), None);
    }

    #[test]
    fn fifo_evicts_in_load_order_regardless_of_recency() {
        let table = table_with(&[(4, 0, 100), (2, 1, 1)]);
        let mut fifo = FifoPageReplacer::new();
        fifo.page_event(PageEvent::Loaded(PageNumber(4)));
        fifo.page_event(PageEvent::Loaded(PageNumber(2)));
        fifo.page_event(PageEvent::Touched(PageNumber(4)));

        assert_eq!(fifo.pick_victim(&table), Some((PageNumber(4), FrameId(0))));
        assert_eq!(fifo.pick_victim(&table), Some((PageNumber(2), FrameId(1))));
    }
}
