use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Input TOML file of cases.
    /// Format: [[case]] tables with name, lesson, pupil, tutor, and answer.
    #[arg(short = 'i', long, conflicts_with_all = ["lesson", "pupil", "tutor"])]
    pub input: Option<PathBuf>,

    /// Lesson markers. Comma-separated. Only the first pair is used.
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    pub lesson: Option<Vec<i64>>,

    /// Pupil presence markers. Comma-separated start,end pairs.
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    pub pupil: Option<Vec<i64>>,

    /// Tutor presence markers. Comma-separated start,end pairs.
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    pub tutor: Option<Vec<i64>>,

    /// Output report TSV file. Defaults to stdout.
    /// Format: name,lesson_st,lesson_end,appearance,answer,matches
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Config file.
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Log debug messages.
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

impl Cli {
    /// Whether any inline markers were given.
    pub fn is_inline(&self) -> bool {
        self.lesson.is_some() || self.pupil.is_some() || self.tutor.is_some()
    }
}
