//! UI Components for the attachment upload application.
//!
//! # Layout Components
//! - [`Hero`] - Main title and description
//!
//! # Feature Components
//! - [`AttachSection`] - drop zone, pickers, target select and action buttons
//! - [`FileList`] - basket preview (placeholder or per-file blocks)
//! - [`NoticeModal`] / [`ConfirmModal`] - shared notification and
//!   confirmation surfaces

mod attach;
mod hero;
mod modals;
mod preview;

pub use attach::*;
pub use hero::*;
pub use modals::*;
pub use preview::*;
