use super::node::{Chunk, ChunkId};
use std::collections::HashMap;

/// Boundary lookup for the chunk arena.
///
/// Every internal boundary appears in both maps; offset 0 only in
/// `by_start` and the string length only in `by_end` (an empty source has a
/// single zero-width chunk registered in both at 0).
#[derive(Debug, Clone)]
pub struct ChunkIndex {
    by_start: HashMap<usize, ChunkId>,
    by_end: HashMap<usize, ChunkId>,
    // Where the next boundary search begins
    last_searched: ChunkId,
}

impl ChunkIndex {
    pub fn new(first: ChunkId, len: usize) -> Self {
        Self {
            by_start: HashMap::from([(0, first)]),
            by_end: HashMap::from([(len, first)]),
            last_searched: first,
        }
    }

    pub fn by_start(&self, offset: usize) -> Option<ChunkId> {
        self.by_start.get(&offset).copied()
    }

    pub fn by_end(&self, offset: usize) -> Option<ChunkId> {
        self.by_end.get(&offset).copied()
    }

    pub fn is_boundary(&self, offset: usize) -> bool {
        self.by_start.contains_key(&offset) || self.by_end.contains_key(&offset)
    }

    /// Register the boundary created by splitting `front` at `offset`,
    /// `back` being the new chunk that now runs to `back_end`
    pub fn record_split(&mut self, front: ChunkId, back: ChunkId, offset: usize, back_end: usize) {
        self.by_end.insert(offset, front);
        self.by_start.insert(offset, back);
        self.by_end.insert(back_end, back);
        self.last_searched = front;
    }

    /// Find the chunk strictly containing `offset`.
    ///
    /// Walks in offset order through the boundary maps rather than the
    /// linked list, so moved ranges don't disturb the search.
    pub fn find(&self, chunks: &[Chunk], offset: usize) -> Option<ChunkId> {
        let mut id = self.last_searched;
        let forward = offset > chunks[id].end;
        let mut steps = 0usize;

        loop {
            let chunk = &chunks[id];
            if chunk.contains(offset) {
                log::trace!(
                    "found chunk {}..{} for {} after {} steps",
                    chunk.start,
                    chunk.end,
                    offset,
                    steps
                );
                return Some(id);
            }
            steps += 1;
            id = if forward {
                self.by_start(chunk.end)?
            } else {
                self.by_end(chunk.start)?
            };
        }
    }
}
