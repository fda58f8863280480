use log::{debug, info};

use crate::{
    address::{compose, decompose, truncate, FrameId, PageNumber, PhysicalAddress},
    backing_store::BackingStore,
    config::{MmuConfig, TlbMode},
    error::VmError,
    frame_allocator::FrameAllocator,
    memory::PhysicalMemory,
    page_replacer::{PageEvent, PageReplacer},
    page_table::PageTable,
    stats::Statistics,
    tlb::Tlb,
};

/// How an access was resolved.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    TlbHit,
    PageTableHit,
    PageFault { evicted: Option<PageNumber> },
}

/// One result record: the address as it came in, where it landed and the
/// byte stored there.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Translation {
    pub logical: u32,
    pub physical: PhysicalAddress,
    pub value: i8,
    pub outcome: Outcome,
}

pub struct Mmu<REPLACER, STORE>
where
    REPLACER: PageReplacer,
    STORE: BackingStore,
{
    config: MmuConfig,
    memory: PhysicalMemory,
    free_frames: FrameAllocator,
    page_table: PageTable,
    tlb: Tlb,
    replacer: REPLACER,
    store: STORE,
    clock: u64,
    stats: Statistics,
}

impl<REPLACER, STORE> Mmu<REPLACER, STORE>
where
    REPLACER: PageReplacer,
    STORE: BackingStore,
{
    pub fn new(config: MmuConfig, replacer: REPLACER, store: STORE) -> Result<Self, VmError> {
        config.validate()?;

        Ok(Mmu {
            config,
            memory: PhysicalMemory::new(config.frame_count),
            free_frames: FrameAllocator::new(config.frame_count),
            page_table: PageTable::new(),
            tlb: Tlb::new(config.tlb_mode),
            replacer,
            store,
            clock: 0,
            stats: Statistics::default(),
        })
    }

    fn evict(&mut self) -> Result<(PageNumber, FrameId), VmError> {
        let (victim, frame) = self
            .replacer
            .pick_victim(&self.page_table)
            .ok_or(VmError::NoVictim)?;

        info!("mmu: evicting page {} from frame {}", victim, frame);

        self.page_table.invalidate(victim);

        if self.tlb.mode() == TlbMode::Corrected {
            self.tlb.invalidate(victim);
        }

        Ok((victim, frame))
    }

    fn handle_page_fault(
        &mut self,
        page: PageNumber,
    ) -> Result<(FrameId, Option<PageNumber>), VmError> {
        let (frame, evicted) = match self.free_frames.take_free() {
            Some(frame) => (frame, None),
            None => {
                let (victim, frame) = self.evict()?;
                (frame, Some(victim))
            }
        };

        self.store.read_page(page, self.memory.frame_mut(frame))?;

        self.page_table.install(page, frame, self.clock);

        self.replacer.page_event(PageEvent::Loaded(page));

        Ok((frame, evicted))
    }

    pub fn translate(&mut self, logical: u32) -> Result<Translation, VmError> {
        let address = truncate(logical);

        if address as u32 != logical {
            debug!("mmu: address {} truncated to {:#06X}", logical, address);
        }

        let (page, offset) = decompose(address);

        self.clock += 1;
        self.stats.total_accesses += 1;

        debug!(
            "mmu: access addr {:#06X} page={} offset={:#04X}",
            address, page, offset
        );

        let (frame, outcome) = if let Some(frame) = self.tlb.lookup(page) {
            debug!("mmu: tlb hit");
            self.stats.tlb_hits += 1;
            self.page_table.touch(page, self.clock);

            (frame, Outcome::TlbHit)
        } else if let Some(frame) = self.page_table.lookup(page, self.clock) {
            debug!("mmu: page hit");
            self.stats.page_table_hits += 1;
            self.tlb.insert(page, frame);

            (frame, Outcome::PageTableHit)
        } else {
            debug!("mmu: page fault on {}", page);
            self.stats.page_faults += 1;

            let (frame, evicted) = self.handle_page_fault(page)?;
            self.tlb.insert(page, frame);

            (frame, Outcome::PageFault { evicted })
        };

        self.replacer.page_event(PageEvent::Touched(page));

        let physical = compose(frame, offset);
        let value = self.memory.read(physical) as i8;

        debug!(
            "mmu: page {} mapped to frame {} physical={:#06X}",
            page, frame, physical
        );

        Ok(Translation {
            logical,
            physical,
            value,
            outcome,
        })
    }

    /// Translates every address in order, handing each record to `sink`.
    /// Stops at the first error, from either side.
    pub fn run<I, F, E>(&mut self, addresses: I, mut sink: F) -> Result<Statistics, E>
    where
        I: IntoIterator<Item = u32>,
        F: FnMut(&Translation) -> Result<(), E>,
        E: From<VmError>,
    {
        for logical in addresses {
            let translation = self.translate(logical)?;
            sink(&translation)?;
        }

        Ok(self.stats)
    }

    pub fn stats(&self) -> Statistics {
        self.stats
    }

    pub fn config(&self) -> &MmuConfig {
        &self.config
    }

    pub fn page_table(&self) -> &PageTable {
        &self.page_table
    }

    pub fn tlb(&self) -> &Tlb {
        &self.tlb
    }

    pub fn free_frames(&self) -> &FrameAllocator {
        &self.free_frames
    }

    pub fn memory(&self) -> &PhysicalMemory {
        &self.memory
    }

    /// Value of the access counter, i.e. the timestamp of the last access.
    pub fn clock(&self) -> u64 {
        self.clock
    }
}
