//! documentate: generate documentation from Python projects.
//!
//! `documentate -i my_project -o docs [-t html|site|markdown|json]`

use anyhow::{Context, Result};
use clap::Parser;
use documentate::{DocConfig, Pipeline, DEFAULT_TEMPLATE};
use documentate_model::ExtractorConfig;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "documentate",
    version,
    about = "Generate documentation from python projects"
)]
struct Cli {
    /// The directory of the python project to generate documentation for
    #[arg(short = 'i', long)]
    input: PathBuf,

    /// The directory to put the generated documentation in
    #[arg(short = 'o', long)]
    output: PathBuf,

    /// Output profile: html (default), site, markdown, json
    #[arg(short = 't', long, default_value = DEFAULT_TEMPLATE)]
    template: String,

    /// Descend into subdirectories of the input directory
    #[arg(short = 'r', long)]
    recursive: bool,

    /// Extract files one at a time
    #[arg(long)]
    sequential: bool,

    /// Number of extraction threads
    #[arg(short = 'j', long)]
    jobs: Option<usize>,

    /// Stop extracting after the first file that fails
    #[arg(long)]
    fail_fast: bool,

    /// Leave docstrings out of the output
    #[arg(long)]
    no_docs: bool,

    /// More log output (-v info, -vv debug)
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn doc_config(&self) -> DocConfig {
        let mut extractor = ExtractorConfig::default()
            .with_recursive(self.recursive)
            .with_parallel(!self.sequential)
            .with_abort_on_error(self.fail_fast)
            .with_docs(!self.no_docs);
        if let Some(jobs) = self.jobs {
            extractor = extractor.with_workers(jobs);
        }

        DocConfig::new(&self.input, &self.output)
            .with_template(&self.template)
            .with_extractor(extractor)
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<bool> {
    let pipeline = Pipeline::new(cli.doc_config()).context("invalid configuration")?;
    let report = pipeline
        .run()
        .with_context(|| format!("failed to document {}", cli.input.display()))?;

    for failure in &report.failures {
        eprintln!("warning: {}", failure);
    }
    eprintln!(
        "documented {} of {} files, wrote {} documents to {}",
        report.modules_documented,
        report.files_discovered,
        report.documents_written.len(),
        cli.output.display()
    );

    Ok(report.is_success())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        // Some files or documents failed
        Ok(false) => ExitCode::from(2),
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::from(1)
        }
    }
}
