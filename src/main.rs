use clap::Parser;
use cli::Cli;
use eyre::bail;
use rs_appearance::{
    case::{run_cases, Case},
    io::{read_cases, read_cfg, write_tsv},
};

mod cli;

fn main() -> eyre::Result<()> {
    let cli = Cli::parse();

    simple_logger::SimpleLogger::new()
        .with_level(if cli.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .init()?;

    let cfg = read_cfg(cli.config.as_ref())?;

    let cases: Vec<Case> = if let Some(input) = cli.input.as_ref() {
        log::info!("Reading cases from {}.", input.display());
        read_cases(input)?
    } else if cli.is_inline() {
        vec![Case {
            name: Some(String::from("inline")),
            lesson: cli.lesson,
            pupil: cli.pupil,
            tutor: cli.tutor,
            answer: None,
        }]
    } else {
        bail!("Provide an input file with --input or markers with --lesson, --pupil, and --tutor.")
    };

    let mut df = run_cases(&cases, &cfg)?;

    // Write report to file or stdout
    write_tsv(&mut df, cli.output)?;

    log::info!("Done!");
    Ok(())
}
