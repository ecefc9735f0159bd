use anyhow::Result;
use clap::Parser;
use kripke_frames::config::OutputFormat;
use kripke_frames::model::{discover_frame_files, load_frame};
use kripke_frames::report::{exit_status, render_json, render_text, FrameReport};
use kripke_frames::{Config, FrameClass, FrameProperty};
use std::path::PathBuf;
use std::process::ExitCode;

/// Check Kripke frame files for reflexivity, symmetry and transitivity.
#[derive(Parser, Debug)]
#[command(name = "framecheck", version)]
struct Args {
    /// Frame files or directories containing them (.json, .toml, .yaml).
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Output format (default from config, else text).
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Exit with status 1 if any frame lacks this property (repeatable).
    #[arg(long, value_enum)]
    require: Vec<FrameProperty>,

    /// Exit with status 1 if any frame is not a frame for this class
    /// (K, T, KB, K4, B, S4, KB4, S5).
    #[arg(long)]
    class: Option<FrameClass>,

    /// Fail with status 2 on unreadable paths or malformed frame files.
    #[arg(long)]
    strict: bool,

    /// Config file (default: $FRAMECHECK_CONFIG, else ./framecheck.toml).
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    let config = Config::load(args.config.as_deref())?;

    // RUST_LOG wins over the configured level
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or("RUST_LOG", config.log_level()),
    )
    .init();

    let mut files = Vec::new();
    let mut skipped = 0usize;

    for path in &args.paths {
        match discover_frame_files(path) {
            Ok(found) => files.extend(found),
            Err(e) => {
                log::warn!("Skipping {}: {}", path.display(), e);
                skipped += 1;
            }
        }
    }

    let mut reports = Vec::with_capacity(files.len());

    for file in &files {
        let report = load_frame(file).and_then(|loaded| FrameReport::evaluate(&loaded));
        match report {
            Ok(report) => reports.push(report),
            Err(e) => {
                log::warn!("Skipping {}: {}", file.display(), e);
                skipped += 1;
            }
        }
    }

    let format = args.format.unwrap_or(config.report.format);
    match format {
        OutputFormat::Text => print!("{}", render_text(&reports, config.report.show_class)),
        OutputFormat::Json => println!("{}", render_json(&reports)?),
    }

    for report in &reports {
        let missing = report.missing(&args.require);
        if !missing.is_empty() {
            let names: Vec<String> = missing.iter().map(ToString::to_string).collect();
            eprintln!("{}: not {}", report.name, names.join(", "));
        }
        if let Some(class) = args.class {
            if !report.admitted_by(class) {
                eprintln!("{}: not a {} frame (is {})", report.name, class, report.class);
            }
        }
    }

    if skipped > 0 {
        eprintln!("{} path(s) or frame file(s) could not be checked", skipped);
    }

    let strict = args.strict || config.report.strict;
    Ok(ExitCode::from(exit_status(
        &reports,
        &args.require,
        args.class,
        skipped,
        strict,
    )))
}
