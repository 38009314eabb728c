//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use shop_core::{StoreApp, StoreConfig};
use shop_observability::{LogLevel, SessionId, StructuredLogger};

use crate::output::Output;

/// Config file names searched from the working directory upwards.
pub const CONFIG_NAMES: [&str; 3] = ["store.toml", ".store.toml", "store.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// Store configuration.
    pub config: StoreConfig,
    /// Where the config came from; `None` for the bundled one.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            let path = PathBuf::from(path);
            let config = StoreConfig::load(&path)
                .with_context(|| format!("Failed to load config: {}", path.display()))?;
            (config, Some(path))
        } else {
            match find_config(&cwd)? {
                Some((config, path)) => (config, Some(path)),
                None => (StoreConfig::bundled_or_default(), None),
            }
        };

        match &config_path {
            Some(path) => output.debug(&format!("Using config {}", path.display())),
            None => output.debug("Using bundled config"),
        }

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Build the store app from the loaded config.
    pub fn app(&self) -> StoreApp {
        StoreApp::new(self.config.clone())
    }

    /// Session logger. `--verbose` lowers the level to debug.
    pub fn logger(&self, app: &StoreApp) -> StructuredLogger {
        let log = app
            .logger(SessionId::from_seed(u64::from(std::process::id())))
            .with_component("cli");
        if self.output.is_verbose() {
            log.with_min_level(LogLevel::Debug)
        } else {
            log
        }
    }
}

/// Find a config file in the directory tree.
///
/// The first candidate that exists is loaded; a file that fails to load is
/// an error rather than a reason to keep searching.
fn find_config(start: &Path) -> Result<Option<(StoreConfig, PathBuf)>> {
    let mut current = start.to_path_buf();
    loop {
        for name in &CONFIG_NAMES {
            let path = current.join(name);
            if path.exists() {
                let config = StoreConfig::load(&path)
                    .with_context(|| format!("Failed to load config: {}", path.display()))?;
                return Ok(Some((config, path)));
            }
        }

        if !current.pop() {
            break;
        }
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_config_walks_up() {
        let root = std::env::temp_dir().join(format!("shop-cli-ctx-{}", std::process::id()));
        let nested = root.join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(root.join("store.toml"), "[store]\nname = \"FOUND\"\n").unwrap();

        let (config, path) = find_config(&nested).unwrap().unwrap();
        assert_eq!(config.store.name, "FOUND");
        assert_eq!(path, root.join("store.toml"));

        std::fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn test_find_config_reports_broken_file() {
        let root = std::env::temp_dir().join(format!("shop-cli-ctx-broken-{}", std::process::id()));
        let nested = root.join("a");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(root.join("store.toml"), "[store\nname = 1").unwrap();

        let result = find_config(&nested);
        std::fs::remove_dir_all(&root).unwrap();

        let err = result.unwrap_err();
        assert!(format!("{:#}", err).contains(&root.join("store.toml").display().to_string()));
    }
}
