use super::SpliceString;
use crate::chunk::ChunkId;
use crate::error::{EditError, Result};

impl SpliceString {
    /// Move the characters in `start..end` of the original so they render
    /// immediately before the character originally at `index`, or at the
    /// very end when `index` is the length of the original.
    ///
    /// Insertions attached to the moved chunks travel with them.
    pub fn move_range(&mut self, start: isize, end: isize, index: isize) -> Result<&mut Self> {
        let start = self.resolve(start)?;
        let end = self.resolve(end)?;
        let index = self.resolve(index)?;

        if start > end {
            return Err(EditError::InvalidRange { start, end });
        }
        if index >= start && index <= end {
            return Err(EditError::InvalidMove {
                start,
                end,
                index,
                reason: "cannot move a selection inside itself",
            });
        }
        if start == end {
            return Ok(self);
        }

        self.check_split(start)?;
        self.check_split(end)?;
        self.check_split(index)?;
        if !self.is_linear_run(start, end) {
            return Err(EditError::InvalidMove {
                start,
                end,
                index,
                reason: "the range has been broken up by an earlier move",
            });
        }

        self.split(start)?;
        self.split(end)?;
        self.split(index)?;

        let len = self.original.len();
        let (Some(first), Some(last)) = (self.index.by_start(start), self.index.by_end(end)) else {
            return Err(EditError::OutOfBounds {
                offset: end as isize,
                len,
            });
        };
        let new_right = self.index.by_start(index);

        // Already the tail and headed for the end
        if new_right.is_none() && last == self.last_chunk {
            return Ok(self);
        }

        let old_left = self.chunks[first].prev;
        let old_right = self.chunks[last].next;
        self.link(old_left, old_right);

        let new_left = match new_right {
            Some(right) => self.chunks[right].prev,
            None => Some(self.last_chunk),
        };
        self.link(new_left, Some(first));
        self.link(Some(last), new_right);

        log::debug!(
            "{}: moved {}..{} before {}",
            self.options.label().display(),
            start,
            end,
            index
        );

        Ok(self)
    }

    /// Make `right` follow `left` in render order. A missing side means
    /// the other becomes the head or tail of the list.
    fn link(&mut self, left: Option<ChunkId>, right: Option<ChunkId>) {
        match left {
            Some(id) => self.chunks[id].next = right,
            None => {
                if let Some(id) = right {
                    self.first_chunk = id;
                }
            }
        }
        match right {
            Some(id) => self.chunks[id].prev = left,
            None => {
                if let Some(id) = left {
                    self.last_chunk = id;
                }
            }
        }
    }
}
