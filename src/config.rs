use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufReader, path::Path};

use crate::Result;

/// Scanner settings. Every field has a default, so `{}` is a valid config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanConfig {
    /// A tab advances the indentation width to the next multiple of this value.
    #[serde(default = "default_tab_width")]
    pub tab_width: usize,

    /// Scan trivia (white space, comments, line feeds) but do not yield it.
    #[serde(default)]
    pub skip_trivia: bool,

    /// Emit `INDENT` / `DEDENT` tokens from the indentation stack.
    #[serde(default = "default_true")]
    pub track_indentation: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            tab_width: default_tab_width(),
            skip_trivia: false,
            track_indentation: default_true(),
        }
    }
}

impl ScanConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let config = serde_json::from_reader(reader)?;
        Ok(config)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

fn default_tab_width() -> usize {
    8
}

fn default_true() -> bool {
    true
}
