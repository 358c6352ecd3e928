use crate::config::resolve::{resolve_config, CliOverrides};
use crate::errors::Result;
use crate::graph::tree;
use crate::ident;
use crate::output::OutputFormat;
use crate::parse::{ImportExtractor, LineImportExtractor};
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct TreeArgs {
    /// Source file to root the tree at
    pub path: PathBuf,

    /// Project directory whose sources form the corpus
    #[arg(long, default_value = ".")]
    pub project_root: PathBuf,

    /// Scan the whole project instead of the top level only
    #[arg(long)]
    pub recursive: bool,

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

impl TreeArgs {
    fn to_cli_overrides(&self) -> CliOverrides {
        CliOverrides {
            recursive: self.recursive,
            format: self.format.map(|f| f.to_string()),
            include: self.include.clone(),
            exclude: self.exclude.clone(),
            ..Default::default()
        }
    }
}

pub fn run(args: &TreeArgs) -> Result<()> {
    let config = resolve_config(&args.project_root, &args.to_cli_overrides())?;

    let identifier = ident::package_name(&args.path)?;
    let corpus = crate::walk::list_sources(
        &args.project_root,
        config.recursive,
        &config.include,
        &config.exclude,
    )?;

    let extractor: &dyn ImportExtractor = &LineImportExtractor::new();
    let root = tree::build(&identifier, &args.path, &corpus, extractor)?;

    let format: OutputFormat = config.format.parse().unwrap_or_default();
    let mut stdout = std::io::stdout();
    match format {
        OutputFormat::Json => crate::output::json::write_tree_json(&mut stdout, &root)?,
        OutputFormat::Text => crate::output::text::write_tree(&mut stdout, &root)?,
    }

    Ok(())
}
