use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::FileType;

pub const CONFIG_FILE_NAME: &str = ".langgenrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_languages")]
    pub languages: Vec<String>,
    #[serde(default)]
    pub file_type: FileType,
    #[serde(default = "default_file_name")]
    pub file_name: String,
    #[serde(default = "default_short_keys")]
    pub short_keys: bool,
    #[serde(default = "default_lang_root")]
    pub lang_root: String,
    #[serde(default = "default_views_root")]
    pub views_root: String,
    #[serde(default = "default_app_root")]
    pub app_root: String,
    #[serde(default)]
    pub ignores: Vec<String>,
}

fn default_languages() -> Vec<String> {
    vec!["en".to_string()]
}

fn default_file_name() -> String {
    "lang".to_string()
}

fn default_short_keys() -> bool {
    true
}

fn default_lang_root() -> String {
    "lang".to_string()
}

fn default_views_root() -> String {
    "resources/views".to_string()
}

fn default_app_root() -> String {
    "app".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            languages: default_languages(),
            file_type: FileType::default(),
            file_name: default_file_name(),
            short_keys: default_short_keys(),
            lang_root: default_lang_root(),
            views_root: default_views_root(),
            app_root: default_app_root(),
            ignores: Vec::new(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if no locale is configured, a locale or the file name
    /// is blank, or a pattern in `ignores` is not a valid glob.
    pub fn validate(&self) -> Result<()> {
        if self.languages.is_empty() {
            bail!("At least one locale must be configured in 'languages'");
        }

        if let Some(blank) = self.languages.iter().find(|l| l.trim().is_empty()) {
            bail!("Invalid locale in 'languages': \"{}\"", blank);
        }

        if self.file_name.trim().is_empty() {
            bail!("'fileName' must not be empty");
        }

        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
