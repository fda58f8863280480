use crate::{
    address::{FrameId, PageNumber},
    config::{TlbMode, TLB_CAPACITY},
};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TlbEntry {
    pub page: Option<PageNumber>,
    pub frame: FrameId,
}

impl Default for TlbEntry {
    fn default() -> Self {
        TlbEntry {
            page: None,
            frame: FrameId(0),
        }
    }
}

/// Translation lookaside buffer with FIFO replacement.
///
/// Lookup is a linear scan; slot order only matters for deciding which entry
/// the next insert overwrites.
pub struct Tlb {
    entries: [TlbEntry; TLB_CAPACITY],
    cursor: usize,
    mode: TlbMode,
}

impl Tlb {
    pub fn new(mode: TlbMode) -> Self {
        Tlb {
            entries: [TlbEntry::default(); TLB_CAPACITY],
            cursor: 0,
            mode,
        }
    }

    pub fn lookup(&self, page: PageNumber) -> Option<FrameId> {
        self.entries
            .iter()
            .find(|entry| entry.page == Some(page))
            .map(|entry| entry.frame)
    }

    /// Overwrites the slot under the insertion cursor and returns its index.
    pub fn insert(&mut self, page: PageNumber, frame: FrameId) -> usize {
        let slot = match self.mode {
            TlbMode::Corrected => {
                let slot = self.cursor % TLB_CAPACITY;
                self.cursor = self.cursor.wrapping_add(1);
                slot
            }
            TlbMode::Reference => {
                self.cursor = self.cursor.wrapping_add(1);
                self.cursor % TLB_CAPACITY
            }
        };

        self.entries[slot] = TlbEntry {
            page: Some(page),
            frame,
        };

        slot
    }

    /// Drops every entry mapping `page`. Returns how many were dropped.
    pub fn invalidate(&mut self, page: PageNumber) -> usize {
        let mut dropped = 0;

        for entry in self.entries.iter_mut().filter(|e| e.page == Some(page)) {
            *entry = TlbEntry::default();
            dropped += 1;
        }

        dropped
    }

    pub fn entries(&self) -> &[TlbEntry] {
        &self.entries
    }

    pub fn mode(&self) -> TlbMode {
        self.mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tlb_misses() {
        let tlb = Tlb::new(TlbMode::Corrected);

        assert_eq!(tlb.lookup(PageNumber(0)), None);
        assert!(tlb.entries().iter().all(|e| e.page.is_none()));
    }

    #[test]
    fn corrected_mode_fills_from_slot_zero() {
        let mut tlb = Tlb::new(TlbMode::Corrected);

        assert_eq!(tlb.insert(PageNumber(5), FrameId(0)), 0);
        assert_eq!(tlb.insert(PageNumber(6), FrameId(1)), 1);
        assert_eq!(tlb.entries()[0].page, Some(PageNumber(5)));
        assert_eq!(tlb.lookup(PageNumber(6)), Some(FrameId(1)));
    }

    #[test]
    fn reference_mode_skips_slot_zero_until_wrap() {
        let mut tlb = Tlb::new(TlbMode::Reference);

        assert_eq!(tlb.insert(PageNumber(5), FrameId(0)), 1);
        assert_eq!(tlb.entries()[0].page, None);

        for page in 1..TLB_CAPACITY as u8 - 1 {
            tlb.insert(PageNumber(10 + page), FrameId(page as u16));
        }
        assert_eq!(tlb.entries()[0].page, None);

        // sixteenth insert wraps onto slot 0
        assert_eq!(tlb.insert(PageNumber(99), FrameId(3)), 0);
        assert_eq!(tlb.lookup(PageNumber(99)), Some(FrameId(3)));
    }

    #[test]
    fn fifo_overwrites_oldest_entry() {
        let mut tlb = Tlb::new(TlbMode::Corrected);

        for page in 0..TLB_CAPACITY as u8 {
            tlb.insert(PageNumber(page), FrameId(page as u16));
        }
        assert_eq!(tlb.lookup(PageNumber(0)), Some(FrameId(0)));

        tlb.insert(PageNumber(200), FrameId(7));
        assert_eq!(tlb.lookup(PageNumber(0)), None);
        assert_eq!(tlb.lookup(PageNumber(1)), Some(FrameId(1)));
        assert_eq!(tlb.lookup(PageNumber(200)), Some(FrameId(7)));
    }

    #[test]
    fn invalidate_removes_page() {
        let mut tlb = Tlb::new(TlbMode::Corrected);
        tlb.insert(PageNumber(1), FrameId(0));
        tlb.insert(PageNumber(2), FrameId(1));

        assert_eq!(tlb.invalidate(PageNumber(1)), 1);
        assert_eq!(tlb.lookup(PageNumber(1)), None);
        assert_eq!(tlb.lookup(PageNumber(2)), Some(FrameId(1)));
        assert_eq!(tlb.invalidate(PageNumber(1)), 0);
    }
}
