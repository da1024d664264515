use itertools::Itertools;

use crate::interval::{intersect, Interval};

/// Merge overlapping intervals. Includes book-ended intervals.
///
/// # Arguments
/// * `intervals`: Valid intervals to merge. Callers must not pass an empty set.
///
/// # Returns
/// * Disjoint intervals sorted by start.
///     * No two neighbours satisfy `next.st <= prev.end`.
pub fn merge_intervals<I>(intervals: I) -> Vec<Interval>
where
    I: IntoIterator<Item = Interval>,
{
    let mut intervals = intervals.into_iter().sorted_by(|a, b| a.st.cmp(&b.st));
    let Some(first) = intervals.next() else {
        return Vec::new();
    };
    let mut merged: Vec<Interval> = vec![first];
    for itv in intervals {
        let Some(last) = merged.last_mut() else {
            unreachable!()
        };
        // (if) First case:
        // 1-3
        //   2-4
        // (if) Second case:
        // 1-2
        //   2-3
        // (else) Third case:
        // 1-2
        //     3-4
        if itv.st <= last.end {
            last.end = std::cmp::max(last.end, itv.end);
        } else {
            merged.push(itv);
        }
    }
    merged
}

/// Total time shared by two sets of merged intervals.
///
/// Every pair is intersected. Both sets are expected to come from [`merge_intervals`] so no
/// instant is counted twice.
///
/// # Arguments
/// * `itvs_1`: Merged intervals.
/// * `itvs_2`: Merged intervals.
///
/// # Returns
/// * Summed length of all pairwise intersections. Zero if either side is empty.
///     * Saturates at [`u64::MAX`], reachable only with unmerged input.
pub fn total_overlap(itvs_1: &[Interval], itvs_2: &[Interval]) -> u64 {
    itvs_1
        .iter()
        .cartesian_product(itvs_2.iter())
        .filter_map(|(a, b)| intersect(a, b))
        .fold(0, |total, itv| total.saturating_add(itv.length()))
}
