use super::SpliceString;
use crate::error::{EditError, Result};

impl SpliceString {
    /// Replace the characters in `start..end` of the original with `content`.
    ///
    /// Insertions attached inside the range, or to the chunks it covers,
    /// are dropped. Overwriting part of an earlier overwrite fails with
    /// [`EditError::ConflictingEdit`].
    pub fn overwrite(&mut self, start: isize, end: isize, content: &str) -> Result<&mut Self> {
        let start = self.resolve(start)?;
        let end = self.resolve(end)?;

        if start == end {
            return Err(EditError::InvalidOverwrite {
                start,
                end,
                reason: "cannot overwrite a zero-length range, use append_left or prepend_right instead",
            });
        }
        if start > end {
            return Err(EditError::InvalidRange { start, end });
        }

        self.check_split(start)?;
        self.check_split(end)?;
        if !self.is_linear_run(start, end) {
            return Err(EditError::InvalidOverwrite {
                start,
                end,
                reason: "cannot overwrite across a split chunk",
            });
        }

        self.split(start)?;
        self.split(end)?;

        // Both exist now that `start` and `end` are boundaries
        let (Some(first), Some(last)) = (self.index.by_start(start), self.index.by_end(end)) else {
            return Err(EditError::InvalidRange { start, end });
        };

        self.chunks[first].edit(content);
        let mut id = first;
        while id != last {
            let Some(next) = self.chunks[id].next else {
                break;
            };
            self.chunks[next].edit("");
            id = next;
        }

        Ok(self)
    }

    /// Remove the characters in `start..end` of the original.
    ///
    /// Insertions attached to boundaries inside the range go with it; ones
    /// made with `append_left(start, ..)` or `append_right(end, ..)` survive.
    ///
    /// An empty range is a no-op, even one past the end of the original.
    pub fn remove(&mut self, start: isize, end: isize) -> Result<&mut Self> {
        if start == end {
            return Ok(self);
        }

        let start = self.resolve(start)?;
        let end = self.resolve(end)?;

        // `-1` and `len - 1` name the same offset
        if start == end {
            return Ok(self);
        }
        if start > end {
            return Err(EditError::InvalidRange { start, end });
        }

        self.check_split(start)?;
        self.check_split(end)?;
        self.split(start)?;
        self.split(end)?;

        // Follow offsets, not list order, so earlier moves don't matter
        let mut cursor = self.index.by_start(start);
        while let Some(id) = cursor {
            let chunk = &mut self.chunks[id];
            chunk.edit("");
            cursor = if chunk.end < end {
                self.index.by_start(chunk.end)
            } else {
                None
            };
        }

        Ok(self)
    }
}
