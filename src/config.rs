//! Run configuration: where to look for surfaces, how to name outputs, which tool to call and what to expect.
//!
//! All values have built-in defaults matching the usual HCP naming convention, so an empty TOML file is a
//! valid configuration.

use serde::{Deserialize, Serialize};

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

pub const DEFAULT_WB_COMMAND: &str = "wb_command";
pub const DEFAULT_INPUT_SUFFIX: &str = ".surf.gii";
pub const DEFAULT_OUTPUT_SUFFIX: &str = ".func.gii";
pub const DEFAULT_MARKER: &str = "mid";
pub const DEFAULT_PATTERNS: [&str; 2] = ["**/*mid*.surf.gii", "**/*midthickness*.surf.gii"];


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub input_dir: PathBuf,
    /// Continue with the next surface if computing one fails.
    pub keep_going: bool,
    pub discovery: DiscoveryConfig,
    pub workbench: WorkbenchConfig,
    pub expected: ExpectedFields,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            input_dir: PathBuf::from("."),
            keep_going: false,
            discovery: DiscoveryConfig::default(),
            workbench: WorkbenchConfig::default(),
            expected: ExpectedFields::default(),
        }
    }
}

impl Config {
    /// Read a configuration from a TOML file. Missing keys get their default values.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Config> {
        let raw = fs::read_to_string(path)?;
        Config::from_toml_str(&raw)
    }

    pub fn from_toml_str(raw: &str) -> Result<Config> {
        Ok(toml::from_str(raw)?)
    }
}


/// File naming convention used to find input surfaces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoveryConfig {
    /// Glob patterns, relative to the input directory.
    pub patterns: Vec<String>,
    pub input_suffix: String,
    pub output_suffix: String,
    /// Substring every discovered file name must contain.
    pub marker: String,
}

impl Default for DiscoveryConfig {
    fn default() -> DiscoveryConfig {
        DiscoveryConfig {
            patterns: DEFAULT_PATTERNS.iter().map(|p| p.to_string()).collect(),
            input_suffix: String::from(DEFAULT_INPUT_SUFFIX),
            output_suffix: String::from(DEFAULT_OUTPUT_SUFFIX),
            marker: String::from(DEFAULT_MARKER),
        }
    }
}


#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum InspectStrategy {
    /// Scrape the full file-information report.
    Text,
    /// Use the tool's narrow queries, scraping the full report only as a fallback.
    Structured,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkbenchConfig {
    pub program: String,
    pub strategy: InspectStrategy,
}

impl Default for WorkbenchConfig {
    fn default() -> WorkbenchConfig {
        WorkbenchConfig {
            program: String::from(DEFAULT_WB_COMMAND),
            strategy: InspectStrategy::Text,
        }
    }
}


/// The field values a valid vertex area metric file must report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpectedFields {
    pub data_type: String,
    pub maps_to_surface: String,
    pub number_of_maps: String,
    pub map_name: String,
}

impl Default for ExpectedFields {
    fn default() -> ExpectedFields {
        ExpectedFields {
            data_type: String::from("Metric"),
            maps_to_surface: String::from("true"),
            number_of_maps: String::from("1"),
            map_name: String::from("vertex areas"),
        }
    }
}
