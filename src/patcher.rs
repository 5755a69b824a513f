use crate::patch::PatchSpec;
use crate::source::{self, SourceError};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PatchError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("invalid search pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// One read-match-replace-write cycle against a single file.
///
/// The file is read exactly once and written exactly once per run. There is
/// no dry-run mode, no diff preview, and no backup of the original content.
#[derive(Debug, Clone)]
pub struct Patcher<'a> {
    file: PathBuf,
    spec: PatchSpec<'a>,
}

impl<'a> Patcher<'a> {
    pub fn new(file: impl Into<PathBuf>, spec: PatchSpec<'a>) -> Self {
        Self {
            file: file.into(),
            spec,
        }
    }

    /// Load the file, substitute, and write the result back.
    ///
    /// The content is written back even when the pattern matched nowhere;
    /// success carries no signal about whether anything changed. A re-run
    /// after a successful patch is a harmless no-op write.
    pub fn run(&self) -> Result<(), PatchError> {
        let source_text = source::load(&self.file)?;
        let patched = self.spec.apply(&source_text)?;
        source::save(&self.file, &patched)?;
        Ok(())
    }

    pub fn file(&self) -> &Path {
        &self.file
    }
}
