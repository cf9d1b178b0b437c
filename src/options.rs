use crate::consts;
use serde::Deserialize;
use std::num::ParseIntError;
use std::path::Path;
use thiserror::Error;

/// Parameters fixed for the lifetime of a game
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct Options {
    /// Number of rows (and of columns) of the grid
    pub(crate) dimension: u16,

    /// Number of apples kept on the grid
    pub(crate) apples: usize,
}

impl Options {
    /// Parse a settings file consisting of two whitespace-separated integers:
    /// the grid dimension followed by the number of apples
    pub(crate) fn from_settings(s: &str) -> Result<Options, SettingsError> {
        let mut words = s.split_whitespace();
        let dimension = words
            .next()
            .ok_or(SettingsError::Missing("dimension"))?
            .parse::<u16>()
            .map_err(|e| SettingsError::Parse("dimension", e))?;
        let apples = words
            .next()
            .ok_or(SettingsError::Missing("apple count"))?
            .parse::<usize>()
            .map_err(|e| SettingsError::Parse("apple count", e))?;
        if words.next().is_some() {
            return Err(SettingsError::Trailing);
        }
        Ok(Options { dimension, apples })
    }

    /// Read a settings file from disk.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or does not contain
    /// exactly two integers.
    pub(crate) fn load_settings(path: &Path) -> Result<Options, SettingsError> {
        let content = fs_err::read_to_string(path)?;
        Options::from_settings(&content)
    }
}

impl Default for Options {
    fn default() -> Options {
        Options {
            dimension: consts::DEFAULT_DIMENSION,
            apples: consts::DEFAULT_APPLES,
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum SettingsError {
    #[error("failed to read settings file")]
    Read(#[from] std::io::Error),
    #[error("settings file does not give a {0}")]
    Missing(&'static str),
    #[error("invalid {0} in settings file")]
    Parse(&'static str, #[source] ParseIntError),
    #[error("settings file contains more than two values")]
    Trailing,
}
