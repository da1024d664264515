use serde::Deserialize;

#[derive(Deserialize, Debug, Default, Clone)]
pub struct Config {
    /// General config.
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
/// Config for batch runs and reports.
pub struct GeneralConfig {
    /// Add merged pupil and tutor segments to the report.
    pub report_segments: bool,
    /// Fail the run if any case disagrees with its expected answer.
    pub fail_on_mismatch: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            report_segments: false,
            fail_on_mismatch: false,
        }
    }
}
