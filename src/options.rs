use std::path::{Path, PathBuf};

/// Construction-time settings for a [`crate::SpliceString`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    /// Name of the file the source was read from, used to tag log output
    pub filename: Option<PathBuf>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filename(mut self, path: impl Into<PathBuf>) -> Self {
        self.filename = Some(path.into());
        self
    }

    pub(crate) fn label(&self) -> &Path {
        self.filename
            .as_deref()
            .unwrap_or_else(|| Path::new("<anonymous>"))
    }
}
