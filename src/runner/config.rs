//! Benchmark profiles.
//!
//! Profiles live in `sortbench.toml` in the current directory, or in the file passed
//! with `--config`:
//!
//! ```toml
//! [profiles.default]
//! size = 1000 # Optional. Default to 1000
//! algorithms = ["Merge Sort", "quick"] # Optional. Default to all four
//! lower = 1 # Optional. Default to 1
//! upper = 10000 # Optional. Default to 10000
//! seed = 42 # Optional. Default to a random seed
//! format = "table" # Optional. One of plain, table, yaml. Default to plain
//! ```
use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use sortbench::{Algorithm, ReportFormat, DEFAULT_RANGE};

pub const DEFAULT_CONFIG_FILE: &str = "./sortbench.toml";

#[derive(Deserialize, Debug)]
pub struct Config {
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

fn default_size() -> i64 {
    1000
}

fn all_algorithms() -> Vec<String> {
    Algorithm::ALL.iter().map(|a| a.name().to_owned()).collect()
}

fn default_lower() -> i64 {
    *DEFAULT_RANGE.start()
}

fn default_upper() -> i64 {
    *DEFAULT_RANGE.end()
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Profile {
    /// Number of values to sort
    #[serde(default = "default_size")]
    pub size: i64,
    /// Algorithm names, run in this order
    #[serde(default = "all_algorithms")]
    pub algorithms: Vec<String>,
    /// Smallest generated value
    #[serde(default = "default_lower")]
    pub lower: i64,
    /// Largest generated value
    #[serde(default = "default_upper")]
    pub upper: i64,
    /// Dataset seed
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub format: ReportFormat,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            size: default_size(),
            algorithms: all_algorithms(),
            lower: default_lower(),
            upper: default_upper(),
            seed: None,
            format: ReportFormat::default(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            profiles: [("default".to_owned(), Profile::default())]
                .into_iter()
                .collect(),
        }
    }
}

impl Config {
    pub fn parse(s: &str) -> anyhow::Result<Config> {
        let mut config = toml::from_str::<Config>(s)?;
        config.profiles.entry("default".to_owned()).or_default();
        Ok(config)
    }

    /// Load profiles from `path`, or from `./sortbench.toml` if no path is given.
    /// A missing default file yields the built-in default profile.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Config> {
        let file = match path {
            Some(path) => {
                if !path.is_file() {
                    anyhow::bail!("Failed to load config file {}", path.display());
                }
                path.to_owned()
            }
            None => {
                let path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !path.is_file() {
                    log::debug!("{} not found, using default profile", DEFAULT_CONFIG_FILE);
                    return Ok(Config::default());
                }
                path
            }
        };
        let s = std::fs::read_to_string(&file)?;
        Self::parse(&s).map_err(|e| anyhow::anyhow!("Invalid config {}: {}", file.display(), e))
    }

    pub fn profile(&self, name: &str) -> anyhow::Result<Profile> {
        let Some(profile) = self.profiles.get(name).cloned() else {
            anyhow::bail!("Could not find profile `{}`", name);
        };
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempdir::TempDir;

    #[test]
    fn empty_config_has_default_profile() -> anyhow::Result<()> {
        let config = Config::parse("")?;
        assert_eq!(config.profile("default")?, Profile::default());
        assert!(config.profile("missing").is_err());
        Ok(())
    }

    #[test]
    fn profiles_fill_in_defaults() -> anyhow::Result<()> {
        let config = Config::parse(
            r#"
            [profiles.quick]
            size = 50
            algorithms = ["merge", "Quick Sort"]
            seed = 7
            format = "table"
            "#,
        )?;
        let profile = config.profile("quick")?;
        assert_eq!(profile.size, 50);
        assert_eq!(profile.algorithms, vec!["merge", "Quick Sort"]);
        assert_eq!(profile.lower, 1);
        assert_eq!(profile.upper, 10000);
        assert_eq!(profile.seed, Some(7));
        assert_eq!(profile.format, ReportFormat::Table);
        assert_eq!(config.profile("default")?, Profile::default());
        Ok(())
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(Config::parse("[profiles.default]\nsizes = 3\n").is_err());
        assert!(Config::parse("[profiles.default]\nformat = \"csv\"\n").is_err());
    }

    #[test]
    fn load_from_file() -> anyhow::Result<()> {
        let dir = TempDir::new("sortbench")?;
        let path = dir.path().join("bench.toml");
        std::fs::write(&path, "[profiles.big]\nsize = 100000\n")?;
        let config = Config::load(Some(&path))?;
        assert_eq!(config.profile("big")?.size, 100000);
        assert!(Config::load(Some(&dir.path().join("missing.toml"))).is_err());
        Ok(())
    }
}
