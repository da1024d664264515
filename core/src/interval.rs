use itertools::Itertools;

/// A closed span of time `[st, end]` in a single numeric timeline.
///
/// Construction does not validate coordinates. Raw segments built from marker lists may have
/// `st > end`. See [`Interval::is_valid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval {
    pub st: i64,
    pub end: i64,
}

impl Interval {
    pub fn new(st: i64, end: i64) -> Self {
        Self { st, end }
    }

    /// Duration covered. Zero for a single-point or reversed interval.
    ///
    /// Unsigned since a span over the full `i64` range does not fit in an `i64`.
    pub fn length(&self) -> u64 {
        if self.is_valid() {
            self.end.abs_diff(self.st)
        } else {
            0
        }
    }

    pub fn is_valid(&self) -> bool {
        self.st <= self.end
    }
}

impl From<(i64, i64)> for Interval {
    fn from((st, end): (i64, i64)) -> Self {
        Self::new(st, end)
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.st, self.end)
    }
}

/// Intersect two intervals.
///
/// # Arguments
/// * `a`: First interval.
/// * `b`: Second interval.
///
/// # Returns
/// * The shared span, or [`None`] if `max(starts) > min(ends)`.
///     * Intervals touching at a single point yield a zero-length interval, not [`None`].
pub fn intersect(a: &Interval, b: &Interval) -> Option<Interval> {
    let st = std::cmp::max(a.st, b.st);
    let end = std::cmp::min(a.end, b.end);
    if st > end {
        None
    } else {
        Some(Interval::new(st, end))
    }
}

/// Pair consecutive markers into raw segments. `[a, b, c, d]` becomes `[(a, b), (c, d)]`.
///
/// # Returns
/// * [`None`] if the number of markers is odd.
pub fn pair_markers(markers: &[i64]) -> Option<Vec<Interval>> {
    if markers.len() % 2 != 0 {
        return None;
    }
    Some(
        markers
            .iter()
            .copied()
            .tuples::<(i64, i64)>()
            .map(Interval::from)
            .collect_vec(),
    )
}
