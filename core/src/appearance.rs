use serde::Deserialize;

use crate::{
    interval::{intersect, pair_markers, Interval},
    intervals::{merge_intervals, total_overlap},
};

/// Presence markers for a single lesson.
///
/// Each slot is a flat list of timestamps where consecutive pairs form `(start, end)` segments.
/// A missing slot is [`None`].
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct AppearanceInput {
    /// Lesson window. Only the first pair is used.
    pub lesson: Option<Vec<i64>>,
    /// Pupil presence.
    pub pupil: Option<Vec<i64>>,
    /// Tutor presence.
    pub tutor: Option<Vec<i64>>,
}

impl AppearanceInput {
    pub fn new(lesson: Vec<i64>, pupil: Vec<i64>, tutor: Vec<i64>) -> Self {
        Self {
            lesson: Some(lesson),
            pupil: Some(pupil),
            tutor: Some(tutor),
        }
    }

    /// First pair of lesson markers, regardless of its validity.
    pub fn lesson_window(&self) -> Option<Interval> {
        match self.lesson.as_deref() {
            Some([st, end, ..]) => Some(Interval::new(*st, *end)),
            _ => None,
        }
    }
}

/// Joint appearance of pupil and tutor within a lesson.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Appearance {
    /// Total time both were present.
    pub total: u64,
    /// Lesson window used for clipping. [`None`] if the input was rejected before clipping.
    pub lesson: Option<Interval>,
    /// Merged pupil segments within the lesson.
    pub pupil: Vec<Interval>,
    /// Merged tutor segments within the lesson.
    pub tutor: Vec<Interval>,
}

/// Clip raw segments to the lesson window, dropping any without an intersection.
fn clip_to_lesson(lesson: &Interval, segments: &[Interval]) -> Vec<Interval> {
    segments
        .iter()
        .filter_map(|seg| intersect(lesson, seg))
        .collect()
}

/// Calculate the time the pupil and tutor were both present in the lesson.
///
/// Malformed input is not an error. It yields a total of zero with no segments:
/// * A missing `lesson`, `pupil`, or `tutor`.
/// * An odd number of markers in any of them.
/// * An empty lesson or one whose first pair has zero length.
/// * No pupil or no tutor presence inside the lesson window.
///
/// # Arguments
/// * `input`: Lesson, pupil, and tutor markers.
///
/// # Returns
/// * [`Appearance`] with the total and the merged segments that produced it.
pub fn appearance_detailed(input: &AppearanceInput) -> Appearance {
    let (Some(lesson), Some(pupil), Some(tutor)) = (
        input.lesson.as_deref(),
        input.pupil.as_deref(),
        input.tutor.as_deref(),
    ) else {
        log::debug!("Missing lesson, pupil, or tutor markers.");
        return Appearance::default();
    };

    let (Some(lesson_segs), Some(pupil_segs), Some(tutor_segs)) = (
        pair_markers(lesson),
        pair_markers(pupil),
        pair_markers(tutor),
    ) else {
        log::debug!("Odd number of markers.");
        return Appearance::default();
    };

    let Some(lesson_itv) = lesson_segs.first().copied() else {
        log::debug!("No lesson markers.");
        return Appearance::default();
    };
    if lesson_itv.st == lesson_itv.end {
        log::debug!("Empty lesson window at {lesson_itv}.");
        return Appearance::default();
    }
    if lesson_segs.len() > 1 {
        log::debug!(
            "Ignoring {} lesson segment(s) after {lesson_itv}.",
            lesson_segs.len() - 1
        );
    }

    let pupil_clipped = clip_to_lesson(&lesson_itv, &pupil_segs);
    let tutor_clipped = clip_to_lesson(&lesson_itv, &tutor_segs);
    if pupil_clipped.is_empty() || tutor_clipped.is_empty() {
        log::debug!("No pupil or tutor presence within {lesson_itv}.");
        return Appearance {
            lesson: Some(lesson_itv),
            ..Default::default()
        };
    }

    let pupil_merged = merge_intervals(pupil_clipped);
    let tutor_merged = merge_intervals(tutor_clipped);
    let total = total_overlap(&pupil_merged, &tutor_merged);

    Appearance {
        total,
        lesson: Some(lesson_itv),
        pupil: pupil_merged,
        tutor: tutor_merged,
    }
}

/// Calculate the time the pupil and tutor were both present in the lesson.
/// Zero for malformed input. See [`appearance_detailed`].
pub fn appearance(input: &AppearanceInput) -> u64 {
    appearance_detailed(input).total
}
