//! Domain layer: the validator, the tree it reasons about, and entities
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod arena;
pub mod department;
pub mod error;
pub mod render;
pub mod sequence;

pub use arena::{BstArena, BstNode, PostOrderIterator};
pub use department::Department;
pub use error::{DomainError, DomainResult};
pub use render::{TreeRender, ELIDED, MAX_RENDER_DEPTH};
pub use sequence::{is_valid_postorder, partition_point, verify_postorder};
