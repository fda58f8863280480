use crate::error::VmError;

pub const PAGE_SIZE: usize = 256;
pub const FRAME_SIZE: usize = PAGE_SIZE;
pub const PAGE_COUNT: usize = 256;
pub const TLB_CAPACITY: usize = 16;

/// How the TLB insertion cursor picks the slot to overwrite.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum TlbMode {
    /// Slot is `cursor % capacity`, cursor advances afterwards. Entries of
    /// evicted pages are dropped from the TLB.
    #[default]
    Corrected,
    /// Cursor advances before the slot is taken, so slot 0 stays unused until
    /// the first wrap. Entries of evicted pages stay in the TLB. Reproduces
    /// reference traces bit for bit.
    Reference,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MmuConfig {
    pub frame_count: usize,
    pub tlb_mode: TlbMode,
}

impl MmuConfig {
    pub fn new(frame_count: usize) -> Self {
        MmuConfig {
            frame_count,
            tlb_mode: TlbMode::default(),
        }
    }

    pub fn with_tlb_mode(self, tlb_mode: TlbMode) -> Self {
        MmuConfig { tlb_mode, ..self }
    }

    pub fn memory_size(&self) -> usize {
        self.frame_count * FRAME_SIZE
    }

    pub fn validate(&self) -> Result<(), VmError> {
        if self.frame_count == 0 || self.frame_count > PAGE_COUNT {
            return Err(VmError::InvalidConfig(format!(
                "frame count must be between 1 and {}, got {}",
                PAGE_COUNT, self.frame_count
            )));
        }

        Ok(())
    }
}
