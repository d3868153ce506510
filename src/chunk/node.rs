use std::fmt;

/// Position of a chunk in the owning arena
pub type ChunkId = usize;

/// One contiguous range `[start, end)` of the original string.
///
/// `intro` renders immediately before `content` and `outro` immediately
/// after it. Chunks live in an arena and point at their neighbours by id;
/// list order is the render order, which differs from offset order once a
/// range has been moved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    pub start: usize,
    pub end: usize,
    pub original: String,
    pub content: String,
    pub intro: String,
    pub outro: String,
    /// `content` was set by an edit rather than copied from `original`
    pub edited: bool,
    pub prev: Option<ChunkId>,
    pub next: Option<ChunkId>,
}

impl Chunk {
    pub fn new(start: usize, end: usize, original: &str) -> Self {
        Self {
            start,
            end,
            original: original.to_string(),
            content: original.to_string(),
            intro: String::new(),
            outro: String::new(),
            edited: false,
            prev: None,
            next: None,
        }
    }

    pub fn append_left(&mut self, content: &str) {
        self.outro.push_str(content);
    }

    pub fn append_right(&mut self, content: &str) {
        self.intro.push_str(content);
    }

    pub fn prepend_left(&mut self, content: &str) {
        self.outro.insert_str(0, content);
    }

    pub fn prepend_right(&mut self, content: &str) {
        self.intro.insert_str(0, content);
    }

    /// Strictly inside; boundary offsets are never contained
    pub fn contains(&self, offset: usize) -> bool {
        self.start < offset && offset < self.end
    }

    /// Replace the rendered body and drop insertions attached to this chunk
    pub fn edit(&mut self, content: &str) {
        self.content = content.to_string();
        self.intro.clear();
        self.outro.clear();
        self.edited = true;
    }

    /// An edit with text in it is atomic over its range
    pub fn is_splittable(&self) -> bool {
        !self.edited || self.content.is_empty()
    }

    /// Split at `offset` (must satisfy `contains`), shrinking `self` to
    /// `[start, offset)` and returning the chunk for `[offset, end)`.
    ///
    /// The returned chunk takes over `outro` and the successor link. `id` is
    /// the arena slot the caller will store it in; the caller must also point
    /// the old successor's `prev` at it.
    pub fn split(&mut self, offset: usize, self_id: ChunkId, id: ChunkId) -> Chunk {
        let at = offset - self.start;
        let after = self.original.split_off(at);

        let mut back = Chunk::new(offset, self.end, &after);
        back.outro = std::mem::take(&mut self.outro);
        self.end = offset;

        if self.edited {
            back.edit("");
            self.content.clear();
        } else {
            self.content = self.original.clone();
        }

        back.next = self.next;
        back.prev = Some(self_id);
        self.next = Some(id);
        back
    }
}

impl fmt::Display for Chunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.intro, self.content, self.outro)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_strict() {
        let chunk = Chunk::new(2, 6, "cdef");
        assert!(!chunk.contains(2));
        assert!(chunk.contains(3));
        assert!(chunk.contains(5));
        assert!(!chunk.contains(6));
    }

    #[test]
    fn test_append_and_prepend_order() {
        let mut chunk = Chunk::new(0, 3, "abc");
        chunk.append_left("1");
        chunk.append_left("2");
        chunk.prepend_left("0");
        chunk.append_right("b");
        chunk.prepend_right("a");
        assert_eq!(chunk.outro, "012");
        assert_eq!(chunk.intro, "ab");
        assert_eq!(chunk.to_string(), "ababc012");
    }

    #[test]
    fn test_edit_clears_insertions() {
        let mut chunk = Chunk::new(0, 3, "abc");
        chunk.append_left(">");
        chunk.append_right("<");
        chunk.edit("xyz");
        assert!(chunk.edited);
        assert_eq!(chunk.to_string(), "xyz");
        assert!(!chunk.is_splittable());

        chunk.edit("");
        assert!(chunk.is_splittable());
    }

    #[test]
    fn test_split_unedited() {
        let mut chunk = Chunk::new(0, 6, "abcdef");
        chunk.next = Some(7);
        chunk.append_right("[");
        chunk.append_left("]");

        let back = chunk.split(2, 0, 1);

        assert_eq!((chunk.start, chunk.end), (0, 2));
        assert_eq!((back.start, back.end), (2, 6));
        assert_eq!(chunk.original, "ab");
        assert_eq!(chunk.content, "ab");
        assert_eq!(back.original, "cdef");
        assert_eq!(back.content, "cdef");
        // Outro follows the end of the range
        assert_eq!(chunk.intro, "[");
        assert_eq!(chunk.outro, "");
        assert_eq!(back.outro, "]");
        assert_eq!(chunk.next, Some(1));
        assert_eq!(back.prev, Some(0));
        assert_eq!(back.next, Some(7));
        assert!(!back.edited);
    }

    #[test]
    fn test_split_removed_chunk_stays_removed() {
        let mut chunk = Chunk::new(4, 8, "efgh");
        chunk.edit("");

        let back = chunk.split(6, 3, 9);

        assert!(chunk.edited && back.edited);
        assert_eq!(chunk.content, "");
        assert_eq!(back.content, "");
        assert_eq!(back.original, "gh");
        assert_eq!(back.start, 6);
    }
}
