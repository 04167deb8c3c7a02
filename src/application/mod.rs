//! Application layer: input parsing and use cases
//!
//! This layer orchestrates domain logic and depends on I/O boundary traits.

pub mod error;
pub mod error_ext;
pub mod input;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
pub use input::{parse_args, parse_sequence};
pub use services::{SequenceReport, SequenceService};
