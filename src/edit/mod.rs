mod overwrite;
mod relocate;


use std::fmt;
use std::path::Path;

use crate::chunk::{Chunk, ChunkId, ChunkIndex};
use crate::error::{EditError, Result};
use crate::locator::{Location, Locator};
use crate::options::Options;

/// An immutable source string plus a set of pending edits.
///
/// Every offset passed in refers to the original string, no matter which
/// edits have already been made, so callers never re-derive positions.
/// Negative offsets count back from the end of the original.
///
/// ```
/// use strsplice::SpliceString;
///
/// let mut s = SpliceString::new("abcdefghijkl");
/// s.overwrite(3, 6, "XYZ")?.append_left(9, "!")?;
/// assert_eq!(s.to_string(), "abcXYZghi!jkl");
/// # Ok::<(), strsplice::EditError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SpliceString {
    original: String,
    intro: String,
    outro: String,
    chunks: Vec<Chunk>,
    first_chunk: ChunkId,
    last_chunk: ChunkId,
    index: ChunkIndex,
    locator: Locator,
    options: Options,
}

impl SpliceString {
    pub fn new(source: &str) -> Self {
        Self::with_options(source, Options::default())
    }

    pub fn with_options(source: &str, options: Options) -> Self {
        let chunk = Chunk::new(0, source.len(), source);

        Self {
            original: source.to_string(),
            intro: String::new(),
            outro: String::new(),
            chunks: vec![chunk],
            first_chunk: 0,
            last_chunk: 0,
            index: ChunkIndex::new(0, source.len()),
            locator: Locator::new(source),
            options,
        }
    }

    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn filename(&self) -> Option<&Path> {
        self.options.filename.as_deref()
    }

    /// Line/column of an offset into the original string
    pub fn locate(&self, offset: usize) -> Location {
        self.locator.locate(offset)
    }

    /// True if rendering no longer reproduces the original
    pub fn has_changed(&self) -> bool {
        self.to_string() != self.original
    }

    /// Append `content` to the end of the rendered string
    pub fn append(&mut self, content: &str) -> &mut Self {
        self.outro.push_str(content);
        self
    }

    /// Prepend `content` to the start of the rendered string
    pub fn prepend(&mut self, content: &str) -> &mut Self {
        self.intro.insert_str(0, content);
        self
    }

    /// Insert `content` at `index`, after anything already inserted there.
    /// It travels with the range that ends at `index` if that range is moved.
    pub fn append_left(&mut self, index: isize, content: &str) -> Result<&mut Self> {
        let index = self.resolve(index)?;
        self.split(index)?;

        match self.index.by_end(index) {
            Some(id) => self.chunks[id].append_left(content),
            None => self.intro.push_str(content),
        }
        Ok(self)
    }

    /// Insert `content` at `index`, after anything already inserted there.
    /// It travels with the range that starts at `index` if that range is moved.
    pub fn append_right(&mut self, index: isize, content: &str) -> Result<&mut Self> {
        let index = self.resolve(index)?;
        self.split(index)?;

        match self.index.by_start(index) {
            Some(id) => self.chunks[id].append_right(content),
            None => self.outro.push_str(content),
        }
        Ok(self)
    }

    /// Like [`append_left`](Self::append_left), but goes before anything
    /// previously inserted at `index`
    pub fn prepend_left(&mut self, index: isize, content: &str) -> Result<&mut Self> {
        let index = self.resolve(index)?;
        self.split(index)?;

        match self.index.by_end(index) {
            Some(id) => self.chunks[id].prepend_left(content),
            None => self.intro.insert_str(0, content),
        }
        Ok(self)
    }

    /// Like [`append_right`](Self::append_right), but goes before anything
    /// previously inserted at `index`
    pub fn prepend_right(&mut self, index: isize, content: &str) -> Result<&mut Self> {
        let index = self.resolve(index)?;
        self.split(index)?;

        match self.index.by_start(index) {
            Some(id) => self.chunks[id].prepend_right(content),
            None => self.outro.insert_str(0, content),
        }
        Ok(self)
    }

    /// Turn a possibly negative offset into a byte offset of the original
    fn resolve(&self, offset: isize) -> Result<usize> {
        let len = self.original.len();
        let resolved = if offset < 0 {
            offset.checked_add_unsigned(len)
        } else {
            Some(offset)
        };

        let resolved = match resolved {
            Some(r) if r >= 0 && r.unsigned_abs() <= len => r.unsigned_abs(),
            _ => return Err(EditError::OutOfBounds { offset, len }),
        };

        if !self.original.is_char_boundary(resolved) {
            return Err(EditError::NotCharBoundary { offset: resolved });
        }
        Ok(resolved)
    }

    /// Find the chunk a split at `offset` would divide, failing if that
    /// would cut through an edit. `None` means `offset` is already a boundary.
    ///
    /// Doesn't mutate, so callers can check every split point before
    /// making the first one.
    fn check_split(&self, offset: usize) -> Result<Option<ChunkId>> {
        if self.index.is_boundary(offset) {
            return Ok(None);
        }
        match self.index.find(&self.chunks, offset) {
            Some(id) if !self.chunks[id].is_splittable() => {
                let Location { line, column } = self.locate(offset);
                log::debug!(
                    "{}: refusing to split edited chunk at {} ({}:{})",
                    self.options.label().display(),
                    offset,
                    line,
                    column
                );
                Err(EditError::ConflictingEdit {
                    offset,
                    line,
                    column,
                })
            }
            target => Ok(target),
        }
    }

    /// Make `offset` a chunk boundary. A no-op if it already is one.
    fn split(&mut self, offset: usize) -> Result<()> {
        if let Some(id) = self.check_split(offset)? {
            self.split_chunk(id, offset);
        }
        Ok(())
    }

    fn split_chunk(&mut self, id: ChunkId, offset: usize) {
        let new_id = self.chunks.len();
        let back = self.chunks[id].split(offset, id, new_id);
        let back_end = back.end;

        log::debug!(
            "{}: split {}..{} at {}",
            self.options.label().display(),
            self.chunks[id].start,
            back_end,
            offset
        );

        if let Some(next) = back.next {
            self.chunks[next].prev = Some(new_id);
        }
        self.chunks.push(back);
        self.index.record_split(id, new_id, offset, back_end);

        if id == self.last_chunk {
            self.last_chunk = new_id;
        }
    }

    /// True if the list, followed from the chunk at `start`, covers
    /// `[start, end)` in offset order. Moves can break this.
    fn is_linear_run(&self, start: usize, end: usize) -> bool {
        let Some(mut id) = self
            .index
            .by_start(start)
            .or_else(|| self.index.find(&self.chunks, start))
        else {
            return false;
        };

        loop {
            let chunk = &self.chunks[id];
            if chunk.end >= end {
                return true;
            }
            match chunk.next {
                Some(next) if self.chunks[next].start == chunk.end => id = next,
                _ => return false,
            }
        }
    }

    /// Chunks in render order
    fn iter_chunks(&self) -> impl Iterator<Item = &Chunk> + '_ {
        std::iter::successors(Some(&self.chunks[self.first_chunk]), |chunk| {
            chunk.next.map(|id| &self.chunks[id])
        })
    }
}

impl fmt::Display for SpliceString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.intro)?;
        for chunk in self.iter_chunks() {
            write!(f, "{}", chunk)?;
        }
        f.write_str(&self.outro)
    }
}
