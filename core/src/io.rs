use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use polars::prelude::*;
use serde::Deserialize;

use crate::{case::Case, config::Config};

#[derive(Deserialize, Debug, Default)]
struct CaseFile {
    #[serde(default)]
    case: Vec<Case>,
}

/// Write TSV file to file or stdout.
pub fn write_tsv(df: &mut DataFrame, path: Option<impl AsRef<Path>>) -> eyre::Result<()> {
    let mut file: Box<dyn Write> = if let Some(path) = path {
        Box::new(BufWriter::new(File::create(path)?))
    } else {
        Box::new(BufWriter::new(std::io::stdout()))
    };
    CsvWriter::new(&mut file)
        .include_header(true)
        .with_separator(b'\t')
        .finish(df)?;
    Ok(())
}

/// Parse cases from a TOML document with a `[[case]]` array of tables.
///
/// # Examples
/// ```
/// let cases = rs_appearance::io::parse_cases(
///     r#"
///     [[case]]
///     name = "full"
///     lesson = [0, 100]
///     pupil = [0, 100]
///     tutor = [0, 100]
///     answer = 100
///     "#,
/// ).unwrap();
/// assert_eq!(cases.len(), 1);
/// ```
pub fn parse_cases(cases_str: &str) -> eyre::Result<Vec<Case>> {
    let case_file: CaseFile = toml::from_str(cases_str)?;
    Ok(case_file.case)
}

/// Read cases from a TOML file. See [`parse_cases`].
pub fn read_cases(path: impl AsRef<Path>) -> eyre::Result<Vec<Case>> {
    let cases_str = std::fs::read_to_string(path)?;
    parse_cases(&cases_str)
}

pub fn read_cfg(path: Option<impl AsRef<Path>>) -> eyre::Result<Config> {
    if let Some(cfg_path) = path {
        let cfg_str = std::fs::read_to_string(cfg_path)?;
        toml::from_str(&cfg_str).map_err(Into::into)
    } else {
        Ok(Config::default())
    }
}
