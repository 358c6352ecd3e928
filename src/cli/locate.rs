use crate::config::resolve::{resolve_config, CliOverrides};
use crate::errors::Result;
use crate::locate::{locate, LocateOptions, SelectionResult};
use crate::output::OutputFormat;
use crate::parse::LineImportExtractor;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct LocateArgs {
    /// Changed source file to start from
    pub path: PathBuf,

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
}

impl LocateArgs {
    fn to_cli_overrides(&self) -> CliOverrides {
        CliOverrides {
            pattern: self.pattern.clone(),
            recursive: self.recursive,
            dedup: self.dedup,
            format: self.format.map(|f| f.to_string()),
            include: self.include.clone(),
            exclude: self.exclude.clone(),
            ..Default::default()
        }
    }
}

pub fn run(args: &LocateArgs) -> Result<()> {
    let config = resolve_config(&args.project_root, &args.to_cli_overrides())?;

    let opts = LocateOptions {
        project_root: args.project_root.clone(),
        pattern: config.pattern.clone(),
        recursive: config.recursive,
        dedup: config.dedup,
        include: config.include.clone(),
        exclude: config.exclude.clone(),
    };

    let tests = locate(&args.path, &opts, &LineImportExtractor::new())?;

    let format: OutputFormat = config.format.parse().unwrap_or_default();
    let mut stdout = std::io::stdout();
    match format {
        OutputFormat::Json => {
            let result = SelectionResult {
                source: args.path.to_string_lossy().into_owned(),
                tests,
            };
            serde_json::to_writer_pretty(&mut stdout, &result)?;
            use std::io::Write;
            writeln!(stdout)?;
        }
        OutputFormat::Text => {
            use std::io::Write;
            for test in &tests {
                writeln!(stdout, "{test}")?;
            }
        }
    }

    Ok(())
}
