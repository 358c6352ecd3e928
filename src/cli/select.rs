use crate::config::resolve::{resolve_config, CliOverrides};
use crate::errors::Result;
use crate::locate::{selective_ui_tests, LocateOptions};
use crate::output::json::Metadata;
use crate::output::OutputFormat;
use crate::parse::LineImportExtractor;
use clap::Args;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Args)]
pub struct SelectArgs {
    /// Changed source paths; read from the repository diff when omitted
    pub paths: Vec<String>,

    /// Project directory whose sources form the corpus
    #[arg(long, default_value = ".")]
    pub project_root: PathBuf,

    /// Path substring that marks a matching test source
    #[arg(long)]
    pub pattern: Option<String>,

    /// Scan the whole project instead of the top level only
    #[arg(long)]
    pub recursive: bool,

    /// Report each impacted test once even when reachable via several paths
    #[arg(long)]
    pub dedup: bool,

    /// Output format
    #[arg(long)]
    pub format: Option<OutputFormat>,

    /// Include glob patterns
    #[arg(long)]
    pub include: Vec<String>,

    /// Exclude glob patterns
    #[arg(long)]
    pub exclude: Vec<String>,

    /// Suppress progress output
    #[arg(long)]
    pub quiet: bool,
}

impl SelectArgs {
    fn to_cli_overrides(&self) -> CliOverrides {
        CliOverrides {
            pattern: self.pattern.clone(),
            recursive: self.recursive,
            dedup: self.dedup,
            format: self.format.map(|f| f.to_string()),
            quiet: self.quiet,
            include: self.include.clone(),
            exclude: self.exclude.clone(),
        }
    }
}

pub fn run(args: &SelectArgs) -> Result<()> {
    let start = Instant::now();
    let config = resolve_config(&args.project_root, &args.to_cli_overrides())?;

    let changed: Vec<String> = if args.paths.is_empty() {
        let repo = crate::git::open_repo(&args.project_root)?;
        crate::git::changed_files(&repo)?
    } else {
        args.paths.clone()
    };

    let opts = LocateOptions {
        project_root: args.project_root.clone(),
        pattern: config.pattern.clone(),
        recursive: config.recursive,
        dedup: config.dedup,
        include: config.include.clone(),
        exclude: config.exclude.clone(),
    };

    let progress = if !config.quiet {
        let pb = indicatif::ProgressBar::new_spinner();
        pb.set_message(format!("sifting {} changed file(s)", changed.len()));
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        Some(pb)
    } else {
        None
    };

    let results = selective_ui_tests(&changed, &opts, &LineImportExtractor::new());

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }
    let results = results?;

    let elapsed_ms = start.elapsed().as_millis() as u64;
    let metadata = Metadata {
        project_root: args.project_root.clone(),
        pattern: config.pattern.clone(),
        recursive: config.recursive,
        dedup: config.dedup,
        changed_files: changed.len(),
        elapsed_ms,
    };

    let format: OutputFormat = config.format.parse().unwrap_or_default();
    let mut stdout = std::io::stdout();
    match format {
        OutputFormat::Json => {
            crate::output::json::write_selection_json(&mut stdout, &results, &metadata)?;
        }
        OutputFormat::Text => {
            crate::output::text::write_selection_text(&mut stdout, &results)?;
        }
    }

    if !config.quiet {
        let total: usize = results.iter().map(|r| r.tests.len()).sum();
        eprintln!(
            "Selected {} UI test(s) from {} changed file(s) in {:.2}s",
            total,
            changed.len(),
            elapsed_ms as f64 / 1000.0
        );
    }

    Ok(())
}
