use crate::config::schema::FileConfig;
use crate::config::ResolvedConfig;
use crate::errors::{Result, SiftError};
use std::path::{Path, PathBuf};

/// CLI overrides extracted from command arguments.
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub pattern: Option<String>,
    pub recursive: bool,
    pub dedup: bool,
    pub format: Option<String>,
    pub quiet: bool,
    pub include: Vec<String>,
    pub exclude: Vec<String>,
}

/// Resolve configuration by applying layers bottom-up:
/// 1. Built-in defaults
/// 2. User config (~/.config/testsift/config.toml)
/// 3. Project config (nearest .testsift.toml walking up from working_dir)
/// 4. CLI overrides
pub fn resolve_config(working_dir: &Path, cli: &CliOverrides) -> Result<ResolvedConfig> {
    let mut config = ResolvedConfig::default();
    let mut loaded_files = Vec::new();

    if let Some(user_config_path) = find_user_config() {
        if user_config_path.exists() {
            apply_config_file(&mut config, &user_config_path)?;
            loaded_files.push(user_config_path);
        }
    }

    if let Some(project_config_path) = find_project_config(working_dir) {
        apply_config_file(&mut config, &project_config_path)?;
        loaded_files.push(project_config_path);
    }

    apply_cli_overrides(&mut config, cli);

    config.loaded_files = loaded_files;
    Ok(config)
}

fn apply_config_file(config: &mut ResolvedConfig, path: &Path) -> Result<()> {
    let content = std::fs::read_to_string(path)
        .map_err(|_| SiftError::Config(format!("Could not read config: {}", path.display())))?;
    let file_config = FileConfig::from_toml(&content)
        .map_err(|e| SiftError::Config(format!("Invalid config {}: {e}", path.display())))?;
    apply_file_config(config, &file_config);
    Ok(())
}

fn apply_file_config(config: &mut ResolvedConfig, file: &FileConfig) {
    if let Some(pattern) = &file.defaults.pattern {
        config.pattern = pattern.clone();
    }
    if let Some(recursive) = file.defaults.recursive {
        config.recursive = recursive;
    }
    if let Some(dedup) = file.defaults.dedup {
        config.dedup = dedup;
    }
    if let Some(format) = &file.defaults.format {
        config.format = format.clone();
    }
    if let Some(quiet) = file.defaults.quiet {
        config.quiet = quiet;
    }
    if !file.targeting.include.is_empty() {
        config.include = file.targeting.include.clone();
    }
    if !file.targeting.exclude.is_empty() {
        config.exclude = file.targeting.exclude.clone();
    }
}

fn apply_cli_overrides(config: &mut ResolvedConfig, cli: &CliOverrides) {
    if let Some(pattern) = &cli.pattern {
        config.pattern = pattern.clone();
    }
    if cli.recursive {
        config.recursive = true;
    }
    if cli.dedup {
        config.dedup = true;
    }
    if let Some(format) = &cli.format {
        config.format = format.clone();
    }
    if cli.quiet {
        config.quiet = true;
    }
    if !cli.include.is_empty() {
        config.include = cli.include.clone();
    }
    if !cli.exclude.is_empty() {
        config.exclude = cli.exclude.clone();
    }
}

fn find_user_config() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("testsift").join("config.toml"))
}

fn find_project_config(start: &Path) -> Option<PathBuf> {
    let mut dir = start.to_path_buf();
    loop {
        let config_path = dir.join(".testsift.toml");
        if config_path.exists() {
            return Some(config_path);
        }
        if !dir.pop() {
            return None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn defaults_without_any_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = resolve_config(dir.path(), &CliOverrides::default()).unwrap();
        assert_eq!(config.pattern, "src/androidTest/java/");
        assert!(!config.recursive);
        assert!(!config.dedup);
        assert_eq!(config.format, "text");
    }

    #[test]
    fn project_config_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(".testsift.toml"),
            "[defaults]\nrecursive = true\nformat = \"json\"\n",
        )
        .unwrap();

        let config = resolve_config(dir.path(), &CliOverrides::default()).unwrap();
        assert!(config.recursive);
        assert_eq!(config.format, "json");
        assert_eq!(config.loaded_files.len(), 1);
    }

    #[test]
    fn project_config_found_from_subdirectory() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(".testsift.toml"), "[defaults]\ndedup = true\n").unwrap();
        let nested = dir.path().join("app/src");
        fs::create_dir_all(&nested).unwrap();

        let config = resolve_config(&nested, &CliOverrides::default()).unwrap();
        assert!(config.dedup);
    }

    #[test]
    fn cli_overrides_win_over_project_config() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(".testsift.toml"),
            "[defaults]\npattern = \"src/test/java/\"\n",
        )
        .unwrap();

        let cli = CliOverrides {
            pattern: Some("src/androidTest/kotlin/".to_string()),
            ..Default::default()
        };
        let config = resolve_config(dir.path(), &cli).unwrap();
        assert_eq!(config.pattern, "src/androidTest/kotlin/");
    }

    #[test]
    fn invalid_toml_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(".testsift.toml"), "defaults = not toml").unwrap();
        let err = resolve_config(dir.path(), &CliOverrides::default()).unwrap_err();
        assert!(matches!(err, SiftError::Config(_)));
    }
}
