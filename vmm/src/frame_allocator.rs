use crate::{address::FrameId, error::VmError};

/// Pool of unused frames, kept as a fixed-capacity stack.
///
/// The arena is seeded in descending order so that a fresh pool hands out
/// frames 0, 1, 2, ...
pub struct FrameAllocator {
    arena: Box<[FrameId]>,
    top: usize,
}

impl FrameAllocator {
    pub fn new(frame_count: usize) -> Self {
        let arena: Box<[FrameId]> = (0..frame_count)
            .rev()
            .map(|idx| FrameId(idx as u16))
            .collect();
        let top = arena.len();

        FrameAllocator { arena, top }
    }

    pub fn take_free(&mut self) -> Option<FrameId> {
        if self.top == 0 {
            return None;
        }

        self.top -= 1;
        Some(self.arena[self.top])
    }

    pub fn release(&mut self, frame: FrameId) -> Result<(), VmError> {
        if frame.index() >= self.capacity() {
            return Err(VmError::FrameRelease {
                frame,
                reason: "frame out of range",
            });
        }

        if self.top == self.capacity() {
            return Err(VmError::FrameRelease {
                frame,
                reason: "pool already full",
            });
        }

        if self.arena[..self.top].contains(&frame) {
            return Err(VmError::FrameRelease {
                frame,
                reason: "frame already free",
            });
        }

        self.arena[self.top] = frame;
        self.top += 1;

        Ok(())
    }

    pub fn free_count(&self) -> usize {
        self.top
    }

    pub fn capacity(&self) -> usize {
        self.arena.len()
    }

    pub fn is_exhausted(&self) -> bool {
        self.top == 0
    }
}
