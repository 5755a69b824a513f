//! One-shot lexical patcher for the delivery-tracker frontend.
//!
//! Replaces the `simularTrajeto` function in `src/App.jsx` with a hardcoded
//! new version. The whole pipeline is a single read-match-replace-write cycle:
//! the file is loaded once, every match of a fixed multi-line regex is swapped
//! for a fixed replacement, and the result is written back.
//!
//! # Behavior notes
//!
//! - Matching is purely lexical over raw text. No parsing, no syntax
//!   validation of the replacement.
//! - Zero matches is a silent no-op: the unchanged content is written back
//!   and the run still succeeds. Re-running after a successful patch is
//!   therefore harmless (the pattern describes the old function body, which
//!   is gone).
//! - Write-back is atomic (tempfile + fsync + rename), so a failed write
//!   leaves the original file intact.
//!
//! # Example
//!
//! ```no_run
//! use trajeto_patcher::{PatchSpec, Patcher};
//!
//! let spec = PatchSpec::new(r"old_value = \d+;", "old_value = 42;");
//! let patcher = Patcher::new("src/App.jsx", spec);
//!
//! match patcher.run() {
//!     Ok(()) => println!("patched"),
//!     Err(e) => eprintln!("patch failed: {}", e),
//! }
//! ```

pub mod anchor;
pub mod patch;
pub mod patcher;
pub mod source;

// Re-exports
pub use anchor::AnchorSpec;
pub use patch::PatchSpec;
pub use patcher::{PatchError, Patcher};
pub use source::{load, save, SourceError};
