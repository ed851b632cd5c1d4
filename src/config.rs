// Copyright (c) 2025 Nikolay Denev <ndenev@gmail.com>
// SPDX-License-Identifier: BSD-3-Clause

//! Preset persistence for kubequery
//!
//! All presets live in a single JSON document, by default `~/.kubequery`:
//! - `filters` - per-item filter templates (`-w`)
//! - `selects` - field selection templates (`-s`)
//! - `shorts` - named substrings usable as `$name` inside any template
//!
//! The file is seeded from the built-in presets on first run and is never
//! written again; users edit it by hand.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ffi::OsString;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{ConfigError, MacroKind};
use crate::presets::{BuiltinPresets, Expander};

/// File name of the preset file inside the home directory
pub const CONFIG_FILE_NAME: &str = ".kubequery";

/// Get the preset file path
///
/// `$HOME` wins over `$APPDATA`; if neither is set the platform home
/// directory is tried before falling back to the working directory.
pub fn config_path() -> PathBuf {
    resolve_config_path(
        std::env::var_os("HOME"),
        std::env::var_os("APPDATA"),
        dirs::home_dir(),
    )
}

fn resolve_config_path(
    home: Option<OsString>,
    appdata: Option<OsString>,
    platform_home: Option<PathBuf>,
) -> PathBuf {
    home.filter(|h| !h.is_empty())
        .or_else(|| appdata.filter(|a| !a.is_empty()))
        .map(PathBuf::from)
        .or(platform_home)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
}

/// The three preset dictionaries
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Presets {
    /// Filter macros, applied to each item of the listing
    #[serde(default)]
    pub filters: BTreeMap<String, String>,

    /// Selection macros, projected into the result array
    #[serde(default)]
    pub selects: BTreeMap<String, String>,

    /// Named substrings substituted into expanded templates
    #[serde(default)]
    pub shorts: BTreeMap<String, String>,
}

impl From<&BuiltinPresets> for Presets {
    fn from(builtin: &BuiltinPresets) -> Self {
        fn to_map(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
            entries
                .iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect()
        }

        Self {
            filters: to_map(builtin.filters),
            selects: to_map(builtin.selects),
            shorts: to_map(builtin.shorts),
        }
    }
}

impl Presets {
    /// Load presets, writing `defaults` to `path` first if it does not exist
    pub fn load_or_seed(path: &Path, defaults: &BuiltinPresets) -> Result<Self, ConfigError> {
        if !path.exists() {
            Self::seed(path, defaults)?;
        }
        Self::load(path)
    }

    /// Load presets from disk
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            action: "read",
            path: path.to_path_buf(),
            source,
        })?;
        let presets: Presets =
            serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        debug!(
            path = %path.display(),
            filters = presets.filters.len(),
            selects = presets.selects.len(),
            shorts = presets.shorts.len(),
            "Loaded presets"
        );
        Ok(presets)
    }

    /// Write `defaults` to a new file at `path`
    ///
    /// The content is written to a temp file next to `path` and linked into
    /// place without clobbering, so a reader never sees a partial file. If a
    /// concurrent run got there first its file is kept.
    pub fn seed(path: &Path, defaults: &BuiltinPresets) -> Result<(), ConfigError> {
        let io_err = move |action: &'static str| {
            move |source: std::io::Error| ConfigError::Io {
                action,
                path: path.to_path_buf(),
                source,
            }
        };

        let content =
            serde_json::to_string_pretty(&Presets::from(defaults)).map_err(ConfigError::Serialize)?;

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut temp_file = tempfile::NamedTempFile::new_in(dir).map_err(io_err("create"))?;
        writeln!(temp_file, "{}", content).map_err(io_err("write"))?;

        match temp_file.persist_noclobber(path) {
            Ok(_) => {
                info!(path = %path.display(), "Seeded config file with built-in presets");
                Ok(())
            }
            Err(e) if e.error.kind() == ErrorKind::AlreadyExists => {
                debug!(path = %path.display(), "Config file created concurrently, keeping it");
                Ok(())
            }
            Err(e) => Err(io_err("create")(e.error)),
        }
    }

    /// Expander over the filter dictionary
    pub fn filters(&self) -> Expander<'_> {
        Expander::new(MacroKind::Filter, &self.filters, &self.shorts)
    }

    /// Expander over the select dictionary
    pub fn selects(&self) -> Expander<'_> {
        Expander::new(MacroKind::Select, &self.selects, &self.shorts)
    }
}
