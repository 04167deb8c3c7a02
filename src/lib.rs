//! Post-order sequence checks for binary search trees.
//!
//! ```
//! use bstseq::is_valid_postorder;
//!
//! assert!(is_valid_postorder(Some(&[1, 3, 2, 5, 7, 6, 4])));
//! assert!(!is_valid_postorder(Some(&[7, 4, 6, 5])));
//! assert!(!is_valid_postorder(None));
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;

pub use domain::{is_valid_postorder, verify_postorder, BstArena, Department, DomainError};
