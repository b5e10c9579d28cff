//! Merging presorted sequences and counting integers

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::{Error, Result};

/// Positions found by a merge of two sorted sequences
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SortedMerge {
    /// Indices into `a` of values missing from `b`
    pub only_a: Vec<usize>,
    /// Indices into `b` of values missing from `a`
    pub only_b: Vec<usize>,
    /// Index pairs `(in a, in b)` of shared values
    pub common: Vec<(usize, usize)>,
}

/// Values found by a merge of two sorted sequences
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MergedElements<T> {
    pub only_a: Vec<T>,
    pub only_b: Vec<T>,
    pub common: Vec<T>,
}

fn check_strictly_ascending<T: PartialOrd>(name: &str, values: &[T]) -> Result<()> {
    match values.windows(2).position(|w| w[0].partial_cmp(&w[1]) != Some(Ordering::Less)) {
        Some(pos) => Err(Error::InvalidArgument(format!(
            "{} is not sorted ascending without duplicates at index {}",
            name,
            pos + 1
        ))),
        None => Ok(()),
    }
}

/// Merge two ascending, duplicate-free sequences in one linear pass
pub fn merge_sorted_indices<T: PartialOrd>(a: &[T], b: &[T]) -> Result<SortedMerge> {
    check_strictly_ascending("a", a)?;
    check_strictly_ascending("b", b)?;

    let mut merge = SortedMerge::default();
    let (mut i, mut j) = (0, 0);

    while i < a.len() && j < b.len() {
        match a[i].partial_cmp(&b[j]) {
            Some(Ordering::Less) => {
                merge.only_a.push(i);
                i += 1;
            }
            Some(Ordering::Greater) => {
                merge.only_b.push(j);
                j += 1;
            }
            Some(Ordering::Equal) => {
                merge.common.push((i, j));
                i += 1;
                j += 1;
            }
            None => {
                return Err(Error::InvalidArgument(format!(
                    "cannot compare a[{}] with b[{}]",
                    i, j
                )));
            }
        }
    }

    merge.only_a.extend(i..a.len());
    merge.only_b.extend(j..b.len());

    Ok(merge)
}

/// Elements only in `a`, only in `b`, and in both
pub fn merge_sorted<T: PartialOrd + Clone>(a: &[T], b: &[T]) -> Result<MergedElements<T>> {
    let merge = merge_sorted_indices(a, b)?;
    Ok(MergedElements {
        only_a: merge.only_a.iter().map(|&i| a[i].clone()).collect(),
        only_b: merge.only_b.iter().map(|&j| b[j].clone()).collect(),
        common: merge.common.iter().map(|&(i, _)| a[i].clone()).collect(),
    })
}

/// Distinct non-negative integers in ascending order, with their counts
pub fn frequency_of_ints(values: &[i64]) -> Result<(Vec<u64>, Vec<usize>)> {
    let mut counts: BTreeMap<u64, usize> = BTreeMap::new();
    for &v in values {
        let v = u64::try_from(v).map_err(|_| {
            Error::InvalidArgument(format!("cannot count negative value {}", v))
        })?;
        *counts.entry(v).or_default() += 1;
    }
    Ok(counts.into_iter().unzip())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_simple_merge() {
        let merged = merge_sorted(&[1, 3, 5], &[2, 3, 4]).unwrap();
        assert_eq!(merged.only_a, vec![1, 5]);
        assert_eq!(merged.only_b, vec![2, 4]);
        assert_eq!(merged.common, vec![3]);
    }

    #[test]
    fn test_tail_is_kept() {
        let merged = merge_sorted(&[1, 2], &[2, 7, 8, 9]).unwrap();
        assert_eq!(merged.only_a, vec![1]);
        assert_eq!(merged.only_b, vec![7, 8, 9]);
        assert_eq!(merged.common, vec![2]);

        let merged = merge_sorted(&[5, 6, 7], &[1]).unwrap();
        assert_eq!(merged.only_a, vec![5, 6, 7]);
        assert_eq!(merged.only_b, vec![1]);
    }

    #[test]
    fn test_empty_inputs() {
        let empty: [i32; 0] = [];
        let merged = merge_sorted(&empty, &[1, 2]).unwrap();
        assert!(merged.only_a.is_empty());
        assert_eq!(merged.only_b, vec![1, 2]);
        assert!(merged.common.is_empty());
    }

    #[test]
    fn test_indices() {
        let merge = merge_sorted_indices(&[0.5, 1.5, 2.5], &[1.5, 3.0]).unwrap();
        assert_eq!(merge.only_a, vec![0, 2]);
        assert_eq!(merge.only_b, vec![1]);
        assert_eq!(merge.common, vec![(1, 0)]);
    }

    #[test]
    fn test_unsorted_or_duplicate_input_rejected() {
        assert!(matches!(merge_sorted(&[3, 1], &[1]), Err(Error::InvalidArgument(_))));
        assert!(matches!(merge_sorted(&[1], &[2, 2]), Err(Error::InvalidArgument(_))));
        assert!(matches!(
            merge_sorted(&[1.0, f64::NAN], &[1.0]),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(merge_sorted(&[f64::NAN], &[1.0]), Err(Error::InvalidArgument(_))));
    }

    /// Sorted, duplicate-free values drawn from a small deterministic generator
    fn sorted_sample(state: &mut u64, len: usize, range: u64) -> Vec<u64> {
        let mut values: Vec<u64> = (0..len)
            .map(|_| {
                *state = state
                    .wrapping_mul(6364136223846793005)
                    .wrapping_add(1442695040888963407);
                (*state >> 33) % range
            })
            .collect();
        values.sort_unstable();
        values.dedup();
        values
    }

    #[test]
    fn test_matches_brute_force_sets() {
        let mut state = 7u64;
        for round in 0..200 {
            let a = sorted_sample(&mut state, round % 40, 60);
            let b = sorted_sample(&mut state, (round * 7) % 45, 60);
            let merged = merge_sorted(&a, &b).unwrap();

            let set_a: FxHashSet<u64> = a.iter().copied().collect();
            let set_b: FxHashSet<u64> = b.iter().copied().collect();
            let only_a: Vec<u64> = a.iter().copied().filter(|v| !set_b.contains(v)).collect();
            let only_b: Vec<u64> = b.iter().copied().filter(|v| !set_a.contains(v)).collect();
            let common: Vec<u64> = a.iter().copied().filter(|v| set_b.contains(v)).collect();

            assert_eq!(merged.only_a, only_a, "round {}", round);
            assert_eq!(merged.only_b, only_b, "round {}", round);
            assert_eq!(merged.common, common, "round {}", round);
        }
    }

    #[test]
    fn test_frequency_of_ints() {
        let (values, counts) = frequency_of_ints(&[1, 3, 4, 2, 5, 2, 3]).unwrap();
        assert_eq!(values, vec![1, 2, 3, 4, 5]);
        assert_eq!(counts, vec![1, 2, 2, 1, 1]);
        assert!(matches!(frequency_of_ints(&[1, -1]), Err(Error::InvalidArgument(_))));
        let (values, _) = frequency_of_ints(&[i64::MAX, 0]).unwrap();
        assert_eq!(values, vec![0, i64::MAX as u64]);
        assert_eq!(frequency_of_ints(&[]).unwrap(), (vec![], vec![]));
    }
}
