//! Managed block location and splicing for vastssh
//!
//! Treats the target file as an opaque, ordered sequence of lines,
//! locates a marker-delimited block inside it, and replaces the block
//! interior while leaving every other line untouched. Nothing in this
//! crate knows about ssh config syntax or Vast.ai.

pub mod error;
pub mod locate;
pub mod store;

pub use error::{Error, Result};
pub use locate::{locate, Markers, Region};
pub use store::{ensure_exists, ManagedFile};
