use std::ops::Range;

use crate::{
    address::{FrameId, PhysicalAddress},
    config::FRAME_SIZE,
};

pub struct PhysicalMemory {
    bytes: Vec<u8>,
}

impl PhysicalMemory {
    pub fn new(frame_count: usize) -> Self {
        PhysicalMemory {
            bytes: vec![0; frame_count * FRAME_SIZE],
        }
    }

    fn frame_range(frame: FrameId) -> Range<usize> {
        Range {
            start: frame.index() * FRAME_SIZE,
            end: (frame.index() + 1) * FRAME_SIZE,
        }
    }

    pub fn frame(&self, frame: FrameId) -> &[u8] {
        &self.bytes[Self::frame_range(frame)]
    }

    pub fn frame_mut(&mut self, frame: FrameId) -> &mut [u8] {
        &mut self.bytes[Self::frame_range(frame)]
    }

    pub fn read(&self, address: PhysicalAddress) -> u8 {
        self.bytes[address as usize]
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
