//! HTTP services for the attachment workflow.
//!
//! # Services
//!
//! - [`directors`] - fetch the program director list for the target select
//! - [`upload`] - host-form binding and multipart submission

pub mod directors;
pub mod upload;

pub use directors::*;
pub use upload::*;
