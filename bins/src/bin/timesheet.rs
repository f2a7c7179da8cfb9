// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! *Part of the wider Timesheet project*
//!
//! The Timesheet CLI: loads a JSON rows file, builds the layout model and
//! prints the computed scale strip and segments as text or JSON.  This plays
//! the renderer's part: it supplies the reference section length and consumes
//! the engine's outputs.
//!

use clap::{Parser, ValueEnum};
use serde::Serialize;
use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, LevelFilter, TermLogger, TerminalMode,
};
use std::fs;
use std::path::PathBuf;
use timesheet_core::{Date, EventInput, Year};
use timesheet_layout::{SectionOut, SegmentOut, Span, Timesheet};

#[macro_use]
extern crate log;
extern crate simplelog;

/// Timesheet CLI args using [clap]
#[derive(Parser, Debug)]
#[command(version, about = "Compute a timesheet layout from a JSON rows file")]
pub struct Cli {
    /// Path to the JSON rows file (an array of 2-4 string rows)
    #[arg(long)]
    pub data: PathBuf,

    /// Lower bound of the span hint.  Defaults to the first row's start year
    #[arg(long)]
    pub min_year: Option<i64>,

    /// Upper bound of the span hint.  Defaults to the first row's start year
    #[arg(long)]
    pub max_year: Option<i64>,

    /// The reference length of one scale section (columns for text output)
    #[arg(long, default_value_t = 8.0)]
    pub section_length: f64,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Log the engine's debug output
    #[arg(long, short)]
    pub verbose: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum Format {
    Text,
    Json,
}

/// Entry point for the Timesheet CLI
fn main() {
    let args = Cli::parse();

    // Setup logging
    let config_log = ConfigBuilder::new()
        .add_filter_allow_str("timesheet")
        .build();

    let log_level = if args.verbose {
        LevelFilter::Trace
    } else {
        LevelFilter::Warn
    };

    CombinedLogger::init(vec![TermLogger::new(
        log_level,
        config_log,
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )])
    .unwrap();

    if let Err(error) = run(args) {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

fn run(args: Cli) -> Result<(), Box<dyn std::error::Error>> {
    // Load the rows
    let json = fs::read_to_string(&args.data)?;
    let rows: Vec<EventInput> = serde_json::from_str(&json)?;
    info!("Loaded {} rows from {}", rows.len(), args.data.display());

    // Build the model
    let hint = span_hint(&args, &rows)?;
    let model = Timesheet::build(rows, hint)?;

    // Print the layout
    match args.format {
        Format::Json => print_json(&model, args.section_length)?,
        Format::Text => print_text(&model, args.section_length),
    }

    Ok(())
}

/// The span hint: the `--min-year`/`--max-year` flags where given, the first
/// row's start year otherwise
fn span_hint(args: &Cli, rows: &[EventInput]) -> Result<Span, Box<dyn std::error::Error>> {
    let fallback = || -> Result<Year, Box<dyn std::error::Error>> {
        let first = rows
            .first()
            .ok_or("the rows file is empty and no span flags were given")?;
        Ok(Date::parse(first.start_text())?.year())
    };

    let min_year = match args.min_year {
        Some(year) => Year::try_from(year)?,
        None => fallback()?,
    };
    let max_year = match args.max_year {
        Some(year) => Year::try_from(year)?,
        None => fallback()?,
    };

    Ok(Span::from(min_year, max_year)?)
}

/// The JSON output shape
#[derive(Serialize)]
struct Output {
    use_months: bool,
    span: Span,
    sections: Vec<SectionOut>,
    segments: Vec<SegmentOut>,
}

fn print_json(model: &Timesheet, section_len: f64) -> Result<(), serde_json::Error> {
    let output = Output {
        use_months: model.use_months(),
        span: model.span(),
        sections: model.sections_for_drawing(),
        segments: model.segments_for_drawing(section_len),
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Proportional ASCII rendering: the scale strip on one line, one bar per
/// event below it.  The section length is a column count here
fn print_text(model: &Timesheet, section_len: f64) {
    let columns = (section_len.round() as usize).max(1);

    // The scale strip, one `|label...` cell per section
    let mut strip = String::new();
    for section in model.sections_for_drawing() {
        let mut label = section.label.clone();
        label.truncate(columns - 1);
        strip.push('|');
        strip.push_str(&format!("{label:<width$}", width = columns - 1));
    }
    strip.push('|');
    println!("{strip}");

    // One bar per event, offset past the strip's leading `|`
    for segment in model.segments_for_drawing(section_len) {
        let lead = segment.offset.round().max(0.0) as usize + 1;
        let bar = (segment.width.round() as usize).max(1);
        println!(
            "{:lead$}{} {} {}",
            "",
            "=".repeat(bar),
            segment.date_label,
            segment.tooltip,
        );
    }
}
