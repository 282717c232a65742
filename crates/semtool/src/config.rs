use anyhow::Context;
use anyhow::Result;
use camino::{Utf8Path, Utf8PathBuf};
use freeform_semver::Style;
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::io::Read;

pub const CONFIG_FILE_NAME: &str = "semtool.toml";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Order {
    Ascending,
    #[default]
    Descending,
}

/// the resolved config
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Config {
    pub order: Order,
    pub style: Style,
    pub skip_invalid: bool,
}

/// semtool.toml as written on disk
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigToml {
    order: Option<Order>,
    style: Option<Style>,

    #[serde(default = "bool::default")]
    skip_invalid: bool,
}

impl Config {

    pub fn from_reader<R: Read>(mut read: R) -> Result<Config> {

        let toml = {
            let mut contents = String::new();
            read.read_to_string(&mut contents)?;
            toml::from_str::<ConfigToml>(&contents).context("failed to parse config")?
        };

        Ok(Config {
            order: toml.order.unwrap_or_default(),
            style: toml.style.unwrap_or_default(),
            skip_invalid: toml.skip_invalid,
        })
    }

    pub fn from_path<P: AsRef<Utf8Path>>(path: P) -> Result<Config> {
        let path = path.as_ref();
        let file = File::open(path).with_context(|| format!("failed to open config file {path}"))?;
        Self::from_reader(BufReader::new(file))
    }

    /// Load the given file, or search for one. No file at all means defaults.
    pub fn load(path: Option<&Utf8Path>) -> Result<Config> {
        let path = match path {
            Some(path) => Some(path.to_path_buf()),
            None => find_config_file()?,
        };

        match path {
            Some(path) => {
                tracing::debug!("using config file {path}");
                Self::from_path(path)
            }
            None => {
                tracing::debug!("no config file, using defaults");
                Ok(Config::default())
            }
        }
    }
}

/// search for the config file
/// 1. semtool.toml next to the executable
/// 2. semtool.toml in the current directory
fn find_config_file() -> Result<Option<Utf8PathBuf>> {

    let exe = std::env::current_exe()?.with_file_name(CONFIG_FILE_NAME);
    if let Ok(path) = Utf8PathBuf::from_path_buf(exe) {
        if path.is_file() {
            return Ok(Some(path));
        }
    }

    let cwd = std::env::current_dir()?.join(CONFIG_FILE_NAME);
    if let Ok(path) = Utf8PathBuf::from_path_buf(cwd) {
        if path.is_file() {
            return Ok(Some(path));
        }
    }

    Ok(None)
}
