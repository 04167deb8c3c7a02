//! Sequence service
//!
//! Loads integer sequences from arguments, files or stdin and checks them
//! against the post-order rule.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info};

use crate::application::{parse_args, parse_sequence, ApplicationResult, IoResultExt};
use crate::config::Settings;
use crate::domain::{verify_postorder, BstArena, DomainError};
use crate::infrastructure::traits::InputSource;

/// Outcome of checking one sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceReport {
    /// The sequence as parsed
    pub values: Vec<i64>,
    /// First violation found, None if the sequence is valid
    pub violation: Option<DomainError>,
}

impl SequenceReport {
    pub fn is_valid(&self) -> bool {
        self.violation.is_none()
    }

    /// The BST described by a valid sequence.
    ///
    /// None for invalid sequences and for valid ones with repeated keys,
    /// which no duplicate-free tree can represent.
    pub fn tree(&self) -> Option<BstArena> {
        if !self.is_valid() {
            return None;
        }
        BstArena::from_postorder(&self.values).ok()
    }
}

/// Service for reading and validating post-order sequences.
pub struct SequenceService {
    input: Arc<dyn InputSource>,
    settings: Arc<Settings>,
}

impl SequenceService {
    /// Create a new sequence service.
    pub fn new(input: Arc<dyn InputSource>, settings: Arc<Settings>) -> Self {
        Self { input, settings }
    }

    /// Collect values from an optional file (`-` for stdin) followed by inline arguments.
    pub fn read_values(&self, args: &[String], file: Option<&Path>) -> ApplicationResult<Vec<i64>> {
        let separators = self.settings.separators.as_str();
        let mut values = match file {
            Some(path) if path == Path::new("-") => {
                debug!("read_values: stdin");
                let text = self.input.read_stdin().with_context("read stdin")?;
                parse_sequence(&text, separators)?
            }
            Some(path) => {
                debug!("read_values: file={}", path.display());
                let text = self
                    .input
                    .read_file(path)
                    .with_path_context("read sequence", path)?;
                parse_sequence(&text, separators)?
            }
            None => Vec::new(),
        };
        values.extend(parse_args(args, separators)?);
        Ok(values)
    }

    /// Check `values` and keep the first violation, if any.
    pub fn verify(&self, values: Vec<i64>) -> SequenceReport {
        let violation = verify_postorder(&values).err();
        info!(
            "verify: {} values, valid={}",
            values.len(),
            violation.is_none()
        );
        SequenceReport { values, violation }
    }

    /// Build a BST by inserting `values` in order, skipping repeats.
    pub fn build(&self, values: &[i64]) -> BstArena {
        let tree = BstArena::from_values(values.iter().copied());
        info!("build: {} nodes, depth {}", tree.len(), tree.depth());
        tree
    }
}
