use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".directivesrc.json";

/// Which value parser a directive label feeds its value into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValueKind {
    /// JSON-like object body, e.g. `semi: 2, quotes: [2, "double"]`.
    Structured,
    /// `name` / `name:value` tokens, e.g. `foo:writable bar`.
    List,
    /// Comma-separated names, e.g. `browser, node`.
    Flags,
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueKind::Structured => write!(f, "structured"),
            ValueKind::List => write!(f, "list"),
            ValueKind::Flags => write!(f, "flags"),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Recognized directive labels and the parser each one routes to.
    #[serde(default = "default_labels")]
    pub labels: IndexMap<String, ValueKind>,
}

fn default_labels() -> IndexMap<String, ValueKind> {
    [
        ("eslint", ValueKind::Structured),
        ("eslint-disable", ValueKind::Flags),
        ("eslint-enable", ValueKind::Flags),
        ("eslint-disable-line", ValueKind::Flags),
        ("eslint-disable-next-line", ValueKind::Flags),
        ("eslint-env", ValueKind::Flags),
        ("exported", ValueKind::Flags),
        ("global", ValueKind::List),
        ("globals", ValueKind::List),
    ]
    .into_iter()
    .map(|(label, kind)| (label.to_string(), kind))
    .collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            labels: default_labels(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Labels must be non-empty and must not contain whitespace, since the
    /// label is terminated by the first whitespace character in a comment.
    pub fn validate(&self) -> Result<()> {
        if self.labels.is_empty() {
            bail!("'labels' must contain at least one directive label");
        }

        for label in self.labels.keys() {
            if label.is_empty() {
                bail!("Invalid label in 'labels': label must not be empty");
            }
            if label.contains(char::is_whitespace) {
                bail!(
                    "Invalid label in 'labels': \"{}\" must not contain whitespace",
                    label
                );
            }
        }

        Ok(())
    }

    /// Parser kind for a label, if the label is configured.
    pub fn kind_of(&self, label: &str) -> Option<ValueKind> {
        self.labels.get(label).copied()
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
            tracing::debug!(path = %path.display(), "loading config file");
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
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
