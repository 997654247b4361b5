//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};
use tracing::debug;

const PROJECT_FILES: [&str; 2] = ["funwave.toml", ".funwave.toml"];
const ENV_PREFIX: &str = "FUNWAVE_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Explicit config path (if provided)
    /// 2. Project root: `./funwave.toml` or `./.funwave.toml`
    /// 3. XDG config: `$XDG_CONFIG_HOME/funwave-tools/config.toml`
    /// 4. Environment: `FUNWAVE_INPUT__WIDTH=60`
    /// 5. Default values
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, Box<figment::Error>> {
        Self::figment(config_path).extract().map_err(Box::new)
    }

    /// Merged sources, before extraction.
    pub fn figment(config_path: Option<&Path>) -> Figment {
        let mut figment = Figment::new()
            .merge(Serialized::defaults(FileConfig::default()))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            debug!("Using global config {}", global_path.display());
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(path) = Self::project_config_path() {
            debug!("Using project config {}", path.display());
            figment = figment.merge(Toml::file(&path));
        }

        if let Some(path) = config_path {
            debug!("Using config {}", path.display());
            figment = figment.merge(Toml::file(path));
        }

        figment
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/funwave-tools/config.toml if set,
    /// otherwise falls back to ~/.config/funwave-tools/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("funwave-tools").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Describe the config file locations being used.
    pub fn config_sources() -> Vec<String> {
        let mut sources = Vec::new();

        match Self::project_config_path() {
            Some(path) => sources.push(format!("[FOUND] Project: {}", path.display())),
            None => sources.push("[     ] Project: ./funwave.toml or ./.funwave.toml".to_string()),
        }

        if let Some(path) = Self::global_config_path() {
            let mark = if path.exists() { "FOUND" } else { "     " };
            sources.push(format!("[{mark}] Global:  {}", path.display()));
        }

        sources.push(format!("[     ] Env:     {ENV_PREFIX}<SECTION>__<KEY>"));
        sources.push("[     ] Default: built-in defaults".to_string());
        sources
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert!(config.input.minimal);
        assert_eq!(config.input.width, 40);
        assert!(config.json.pretty);
    }

    #[test]
    fn test_global_config_path_names_the_tool() {
        if let Some(path) = ConfigLoader::global_config_path() {
            assert!(path.ends_with("funwave-tools/config.toml"));
        }
    }

    #[test]
    fn test_explicit_file_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[input]\nwidth = 72\nmodules = [\"PARALLEL\"]\n\n[json]\ndetailed = true"
        )
        .unwrap();

        let config = ConfigLoader::load(Some(file.path())).unwrap();
        assert_eq!(config.input.width, 72);
        assert_eq!(config.input.modules, vec!["PARALLEL".to_string()]);
        assert!(config.input.minimal);
        assert!(config.json.detailed);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[input]\nwidth = \"wide\"").unwrap();
        assert!(ConfigLoader::load(Some(file.path())).is_err());
    }

    #[test]
    fn test_config_sources_end_with_defaults() {
        let sources = ConfigLoader::config_sources();
        assert_eq!(sources.last().map(String::as_str), Some("[     ] Default: built-in defaults"));
    }
}
