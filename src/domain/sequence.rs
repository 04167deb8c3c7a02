//! Post-order sequence validation for binary search trees.
//!
//! A sequence is a valid post-order traversal when its last element (the root)
//! splits the rest into a prefix of smaller values and a suffix of values that
//! are not smaller, and both parts are valid post-order traversals themselves.
//!
//! Sub-ranges are `(offset, len)` views into the caller's slice, kept on an
//! explicit work stack so that a one-sided chain never grows the call stack.
//! Split points and violations are found with range minimum/maximum queries,
//! which keeps sorted input at O(n log n).

use tracing::{debug, instrument};

use crate::domain::error::{DomainError, DomainResult};

/// Returns `true` if `sequence` can be the post-order traversal of some BST.
///
/// Absent and empty input both yield `false`. A single element is always valid.
pub fn is_valid_postorder(sequence: Option<&[i64]>) -> bool {
    match sequence {
        Some(values) => verify_postorder(values).is_ok(),
        None => false,
    }
}

/// Validates `sequence` and reports the first violation found.
///
/// Sub-ranges are checked root first, then the left partition, then the right
/// partition. `OutOfOrder::index` is an index into `sequence`.
#[instrument(level = "debug", skip(sequence), fields(len = sequence.len()))]
pub fn verify_postorder(sequence: &[i64]) -> DomainResult<()> {
    if sequence.is_empty() {
        return Err(DomainError::EmptySequence);
    }
    let result = check_ranges(sequence);
    debug!("verified: {:?}", result);
    result
}

/// Index of the first element, excluding the trailing root, that is not less than the root.
///
/// Everything before it forms the candidate left subtree. Returns 0 for an empty range.
pub fn partition_point(range: &[i64]) -> usize {
    match range.split_last() {
        Some((&root, body)) => body
            .iter()
            .position(|&value| value >= root)
            .unwrap_or(body.len()),
        None => 0,
    }
}

fn check_ranges(sequence: &[i64]) -> DomainResult<()> {
    let extremes = RangeExtremes::new(sequence);
    let mut pending = vec![(0usize, sequence.len())];

    while let Some((offset, len)) = pending.pop() {
        if len <= 1 {
            continue;
        }
        let end = offset + len - 1;
        let root = sequence[end];

        let split = extremes.first_at_least(offset, end, root).unwrap_or(end);

        // values equal to the root end the left partition but pass here
        if let Some(index) = extremes.first_below(split, end, root) {
            return Err(DomainError::OutOfOrder {
                index,
                value: sequence[index],
                root,
            });
        }

        // left on top: ranges are visited in the same order as a recursive descent
        pending.push((split, end - split));
        pending.push((offset, split - offset));
    }
    Ok(())
}

/// Bottom-up segment tree over a sequence holding the minimum and maximum of
/// every aligned block.
struct RangeExtremes {
    leaves: usize,
    min: Vec<i64>,
    max: Vec<i64>,
}

impl RangeExtremes {
    fn new(values: &[i64]) -> Self {
        let leaves = values.len().next_power_of_two();
        let mut min = vec![i64::MAX; 2 * leaves];
        let mut max = vec![i64::MIN; 2 * leaves];
        min[leaves..leaves + values.len()].copy_from_slice(values);
        max[leaves..leaves + values.len()].copy_from_slice(values);
        for node in (1..leaves).rev() {
            min[node] = min[2 * node].min(min[2 * node + 1]);
            max[node] = max[2 * node].max(max[2 * node + 1]);
        }
        Self { leaves, min, max }
    }

    /// First index in `start..end` whose value is `>= bound`.
    fn first_at_least(&self, start: usize, end: usize, bound: i64) -> Option<usize> {
        self.first_matching(start, end, |node| self.max[node] >= bound)
    }

    /// First index in `start..end` whose value is `< bound`.
    fn first_below(&self, start: usize, end: usize, bound: i64) -> Option<usize> {
        self.first_matching(start, end, |node| self.min[node] < bound)
    }

    /// `matches(node)` must hold for a block iff it holds for one of its values.
    fn first_matching(
        &self,
        start: usize,
        end: usize,
        matches: impl Fn(usize) -> bool,
    ) -> Option<usize> {
        let mut lo = start + self.leaves;
        let mut hi = end + self.leaves;
        let mut from_left = Vec::new();
        let mut from_right = Vec::new();
        while lo < hi {
            if lo & 1 == 1 {
                from_left.push(lo);
                lo += 1;
            }
            if hi & 1 == 1 {
                hi -= 1;
                from_right.push(hi);
            }
            lo >>= 1;
            hi >>= 1;
        }

        let mut node = from_left
            .into_iter()
            .chain(from_right.into_iter().rev())
            .find(|&node| matches(node))?;
        while node < self.leaves {
            node = if matches(2 * node) {
                2 * node
            } else {
                2 * node + 1
            };
        }
        Some(node - self.leaves)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_absent_sequence_when_validating_then_invalid() {
        assert!(!is_valid_postorder(None));
    }

    #[test]
    fn given_classic_sequence_when_validating_then_valid() {
        assert!(is_valid_postorder(Some(&[1, 3, 2, 5, 7, 6, 4])));
    }

    #[test]
    fn given_right_only_chain_when_partitioning_then_split_is_zero() {
        assert_eq!(partition_point(&[7, 8, 9, 5]), 0);
    }

    #[test]
    fn given_left_only_chain_when_partitioning_then_split_is_body_len() {
        assert_eq!(partition_point(&[1, 2, 3, 5]), 3);
    }

    #[test]
    fn given_empty_range_when_partitioning_then_zero() {
        assert_eq!(partition_point(&[]), 0);
    }

    #[test]
    fn given_smaller_value_in_right_partition_when_verifying_then_reports_it() {
        // root 10 splits at 12, so 9 lands in the right partition
        let err = verify_postorder(&[1, 6, 3, 12, 9, 11, 10]).unwrap_err();
        assert_eq!(
            err,
            DomainError::OutOfOrder {
                index: 4,
                value: 9,
                root: 10
            }
        );
    }

    #[test]
    fn given_violation_below_top_level_when_verifying_then_index_is_offset() {
        // top level is fine, the left range [4, 1, 3] is not
        let err = verify_postorder(&[4, 1, 3, 12, 13, 11, 10]).unwrap_err();
        assert_eq!(
            err,
            DomainError::OutOfOrder {
                index: 1,
                value: 1,
                root: 3
            }
        );
    }

    #[test]
    fn given_range_queries_when_compared_to_linear_scan_then_agree() {
        let values = [5, -3, 9, 9, 0, 12, 7, -8, 4, 6, 11];
        let extremes = RangeExtremes::new(&values);
        for start in 0..values.len() {
            for end in start..=values.len() {
                for bound in [-9, -3, 0, 5, 9, 13] {
                    let window = &values[start..end];
                    assert_eq!(
                        extremes.first_at_least(start, end, bound),
                        window.iter().position(|&v| v >= bound).map(|p| start + p)
                    );
                    assert_eq!(
                        extremes.first_below(start, end, bound),
                        window.iter().position(|&v| v < bound).map(|p| start + p)
                    );
                }
            }
        }
    }

    #[test]
    fn given_long_chain_on_small_stack_when_verifying_then_completes() {
        let handle = std::thread::Builder::new()
            .stack_size(64 * 1024)
            .spawn(|| {
                let ascending: Vec<i64> = (0..50_000).collect();
                let mut broken = vec![7, 4, 6, 5];
                broken.extend(8..50_000);
                (verify_postorder(&ascending), verify_postorder(&broken))
            })
            .unwrap();
        let (ascending, broken) = handle.join().unwrap();
        assert_eq!(ascending, Ok(()));
        assert_eq!(
            broken,
            Err(DomainError::OutOfOrder {
                index: 1,
                value: 4,
                root: 5
            })
        );
    }
}
