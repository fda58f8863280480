use std::fmt;

use crate::config::FRAME_SIZE;

/// Offset of a byte inside a page (and inside the frame holding it).
pub type Offset = u8;

/// Address into physical memory, `frame * FRAME_SIZE + offset`.
pub type PhysicalAddress = u32;

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageNumber(pub u8);

impl PageNumber {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#04X}", self.0)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrameId(pub u16);

impl FrameId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for FrameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#04X}", self.0)
    }
}

/// Splits a 16-bit logical address: top 8 bits are the page number, bottom 8
/// bits the offset.
pub fn decompose(logical: u16) -> (PageNumber, Offset) {
    let page_number = ((logical & 0xFF00) >> 8) as u8;
    let page_offset = (logical & 0x00FF) as u8;

    (PageNumber(page_number), page_offset)
}

pub fn compose(frame: FrameId, offset: Offset) -> PhysicalAddress {
    frame.0 as u32 * FRAME_SIZE as u32 + offset as u32
}

/// Only the low 16 bits of a trace address take part in translation.
pub fn truncate(logical: u32) -> u16 {
    (logical & 0xFFFF) as u16
}
