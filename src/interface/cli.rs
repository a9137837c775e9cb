use std::path::PathBuf;

use clap::{App, ArgMatches};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(transparent)]
    Clap(#[from] clap::Error),

    #[error("window size must be non-zero, got {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
}

/// Everything the program can be told on the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub shader: PathBuf,
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub vsync: bool,
}

impl Config {
    /// Reads the process arguments. `--help` and `--version` print and exit from in here.
    pub fn from_args() -> Result<Self, ConfigError> {
        let yaml = load_yaml!("cli.yml");
        let matches = App::from_yaml(yaml).get_matches();

        Self::from_matches(&matches)
    }

    pub fn from_matches(matches: &ArgMatches) -> Result<Self, ConfigError> {
        let width = value_t!(matches, "width", u32)?;
        let height = value_t!(matches, "height", u32)?;
        if width == 0 || height == 0 {
            return Err(ConfigError::InvalidSize { width, height });
        }

        Ok(Self {
            shader: PathBuf::from(matches.value_of("shader").unwrap_or_default()),
            width,
            height,
            title: matches.value_of("title").unwrap_or_default().to_owned(),
            vsync: !matches.is_present("no-vsync"),
        })
    }
}
