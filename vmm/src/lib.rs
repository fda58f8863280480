//! Simulates the translation path of a demand-paged MMU: a TLB in front of a
//! single-level page table, a pool of free frames, a replacement policy and a
//! backing store the pages are loaded from on a fault.

pub mod address;
pub mod backing_store;
pub mod config;
pub mod error;
pub mod frame_allocator;
pub mod memory;
pub mod mmu;
pub mod page_replacer;
pub mod page_table;
pub mod stats;
pub mod tlb;

pub use address::{FrameId, Offset, PageNumber, PhysicalAddress};
pub use backing_store::BackingStore;
pub use config::{MmuConfig, TlbMode};
pub use error::{BackingStoreError, VmError};
pub use mmu::{Mmu, Outcome, Translation};
pub use page_replacer::{FifoPageReplacer, LruPageReplacer, PageEvent, PageReplacer};
pub use stats::Statistics;
