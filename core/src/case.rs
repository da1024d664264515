use eyre::bail;
use itertools::Itertools;
use polars::prelude::*;
use serde::Deserialize;

use crate::{
    appearance::{appearance_detailed, AppearanceInput},
    config::Config,
    interval::Interval,
};

/// A named lesson with an optional expected answer.
#[derive(Deserialize, Debug, Default, Clone)]
pub struct Case {
    pub name: Option<String>,
    pub lesson: Option<Vec<i64>>,
    pub pupil: Option<Vec<i64>>,
    pub tutor: Option<Vec<i64>>,
    /// Expected joint appearance.
    pub answer: Option<u64>,
}

impl Case {
    pub fn input(&self) -> AppearanceInput {
        AppearanceInput {
            lesson: self.lesson.clone(),
            pupil: self.pupil.clone(),
            tutor: self.tutor.clone(),
        }
    }
}

/// Result of evaluating a single [`Case`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseReport {
    pub name: String,
    pub lesson: Option<Interval>,
    pub appearance: u64,
    pub answer: Option<u64>,
    pub pupil: Vec<Interval>,
    pub tutor: Vec<Interval>,
}

impl CaseReport {
    /// Whether the computed appearance agrees with the expected answer. [`None`] without an answer.
    pub fn matches(&self) -> Option<bool> {
        self.answer.map(|answer| answer == self.appearance)
    }
}

/// Evaluate cases in order. Unnamed cases are named by their position as `case_<idx>`.
pub fn evaluate_cases(cases: &[Case]) -> Vec<CaseReport> {
    cases
        .iter()
        .enumerate()
        .map(|(idx, case)| {
            let name = case.name.clone().unwrap_or_else(|| format!("case_{idx}"));
            let input = case.input();
            let res = appearance_detailed(&input);
            match case.answer {
                Some(answer) if answer != res.total => log::warn!(
                    "Case {name} has appearance {}. Expected {answer}.",
                    res.total
                ),
                _ => log::debug!("Case {name} has appearance {}.", res.total),
            }
            CaseReport {
                name,
                lesson: input.lesson_window(),
                appearance: res.total,
                answer: case.answer,
                pupil: res.pupil,
                tutor: res.tutor,
            }
        })
        .collect()
}

fn join_itvs(itvs: &[Interval]) -> String {
    itvs.iter().map(|itv| itv.to_string()).join(",")
}

/// Convert reports into a [`DataFrame`].
///
/// Columns: `name, lesson_st, lesson_end, appearance, answer, matches`.
/// With [`GeneralConfig::report_segments`](crate::config::GeneralConfig), also
/// `pupil_segments` and `tutor_segments` as comma-joined `st-end` pairs.
pub fn reports_to_df(reports: &[CaseReport], cfg: &Config) -> eyre::Result<DataFrame> {
    let mut columns = vec![
        Column::new(
            "name".into(),
            reports.iter().map(|r| r.name.as_str()).collect_vec(),
        ),
        Column::new(
            "lesson_st".into(),
            reports
                .iter()
                .map(|r| r.lesson.map(|itv| itv.st))
                .collect_vec(),
        ),
        Column::new(
            "lesson_end".into(),
            reports
                .iter()
                .map(|r| r.lesson.map(|itv| itv.end))
                .collect_vec(),
        ),
        Column::new(
            "appearance".into(),
            reports.iter().map(|r| r.appearance).collect_vec(),
        ),
        Column::new(
            "answer".into(),
            reports.iter().map(|r| r.answer).collect_vec(),
        ),
        Column::new(
            "matches".into(),
            reports.iter().map(|r| r.matches()).collect_vec(),
        ),
    ];
    if cfg.general.report_segments {
        columns.push(Column::new(
            "pupil_segments".into(),
            reports.iter().map(|r| join_itvs(&r.pupil)).collect_vec(),
        ));
        columns.push(Column::new(
            "tutor_segments".into(),
            reports.iter().map(|r| join_itvs(&r.tutor)).collect_vec(),
        ));
    }
    Ok(DataFrame::new(columns)?)
}

/// Evaluate cases and build a report.
///
/// # Arguments
/// * `cases`: Cases to evaluate.
/// * `cfg`: Report configuration.
///
/// # Returns
/// * Report [`DataFrame`]. See [`reports_to_df`].
/// * Error if [`GeneralConfig::fail_on_mismatch`](crate::config::GeneralConfig) is set and any
///   case disagrees with its answer.
pub fn run_cases(cases: &[Case], cfg: &Config) -> eyre::Result<DataFrame> {
    log::info!("Evaluating {} case(s).", cases.len());
    let reports = evaluate_cases(cases);

    let n_checked = reports.iter().filter(|r| r.answer.is_some()).count();
    let mismatched = reports
        .iter()
        .filter(|r| r.matches() == Some(false))
        .map(|r| r.name.as_str())
        .collect_vec();
    log::info!(
        "{} of {n_checked} case(s) with answers matched.",
        n_checked - mismatched.len()
    );
    if cfg.general.fail_on_mismatch && !mismatched.is_empty() {
        bail!("Mismatched case(s): {}", mismatched.join(", "));
    }
    reports_to_df(&reports, cfg)
}

#[cfg(test)]
mod tests {
    use super::{evaluate_cases, reports_to_df, run_cases, Case};
    use crate::{config::Config, interval::Interval};

    fn cases() -> Vec<Case> {
        vec![
            Case {
                name: Some(String::from("adjacent")),
                lesson: Some(vec![0, 100]),
                pupil: Some(vec![10, 20, 20, 30]),
                tutor: Some(vec![15, 25]),
                answer: Some(10),
            },
            Case {
                lesson: Some(vec![0, 100]),
                pupil: Some(vec![10, 50]),
                tutor: Some(vec![30, 70]),
                answer: Some(25),
                ..Default::default()
            },
            Case {
                pupil: Some(vec![0, 200]),
                tutor: Some(vec![0, 200]),
                ..Default::default()
            },
        ]
    }

    #[test]
    fn test_evaluate_cases() {
        let reports = evaluate_cases(&cases());
        assert_eq!(reports.len(), 3);

        assert_eq!(reports[0].name, "adjacent");
        assert_eq!(reports[0].appearance, 10);
        assert_eq!(reports[0].matches(), Some(true));
        assert_eq!(reports[0].pupil, vec![Interval::new(10, 30)]);

        assert_eq!(reports[1].name, "case_1");
        assert_eq!(reports[1].appearance, 20);
        assert_eq!(reports[1].matches(), Some(false));

        assert_eq!(reports[2].name, "case_2");
        assert_eq!(reports[2].lesson, None);
        assert_eq!(reports[2].appearance, 0);
        assert_eq!(reports[2].matches(), None);
    }

    #[test]
    fn test_reports_to_df() -> eyre::Result<()> {
        let reports = evaluate_cases(&cases());

        let df = reports_to_df(&reports, &Config::default())?;
        assert_eq!(df.shape(), (3, 6));

        let mut cfg = Config::default();
        cfg.general.report_segments = true;
        let df = reports_to_df(&reports, &cfg)?;
        assert_eq!(df.shape(), (3, 8));
        let pupil_segments = df
            .column("pupil_segments")?
            .as_materialized_series()
            .str()?
            .clone();
        assert_eq!(pupil_segments.get(0), Some("10-30"));
        assert_eq!(pupil_segments.get(2), Some(""));
        Ok(())
    }

    #[test]
    fn test_run_cases_fail_on_mismatch() -> eyre::Result<()> {
        let df = run_cases(&cases(), &Config::default())?;
        assert_eq!(df.height(), 3);

        let mut cfg = Config::default();
        cfg.general.fail_on_mismatch = true;
        let err = run_cases(&cases(), &cfg).unwrap_err();
        assert!(err.to_string().contains("case_1"));

        assert!(run_cases(&cases()[..1], &cfg).is_ok());
        Ok(())
    }
}
