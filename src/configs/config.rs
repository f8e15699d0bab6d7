/*
 * Copyright 2021 Constantin A. <emoji.builder@c1710.de>
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 *
 */

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::errors::{DataError, GenerationError};
use crate::generator::OutputCategory;
use crate::sources::{DEFAULT_DATASOURCE_VERSION, DEFAULT_EMOJIBASE_VERSION, EmojiDataSource};
use crate::sources::deserialize::{DataFormat, DeserializeError};
use crate::sources::fs_source::FsSource;
#[cfg(feature = "online")]
use crate::sources::online::OnlineSource;

/// The files a configuration is looked up in (in this order)
pub const CONFIG_FILES: [&str; 3] = [
    "emoji_sheet_mapper.yaml",
    "emoji_sheet_mapper.yml",
    "emoji_sheet_mapper.json",
];

/// Where to find the host application and the datasets and where to put the JSON files.
///
/// Every field is optional in a configuration file.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GeneratorConfig {
    /// The root of the host application.
    /// If it's relative, it's relative to the configuration file.
    pub project_root: PathBuf,
    /// The translation directory of the host application; its `*.json` files name the locales
    pub locales_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Contains the `emojibase-data` and `emoji-datasource` packages
    pub data_dir: PathBuf,
    /// Fetch the datasets from the web instead of `data_dir`
    pub online: bool,
    pub emojibase_version: String,
    pub datasource_version: String,
    /// The shortcode presets joined into the compact datasets, e.g. `cldr` or `github`
    pub shortcode_presets: Vec<String>,
    /// Ignore `FE0F` when no exact hex code match is found
    pub ignore_fe0f: bool,
    pub categories: Vec<OutputCategory>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            project_root: PathBuf::from("."),
            locales_dir: PathBuf::from("app/javascript/mastodon/locales"),
            output_dir: PathBuf::from("public/emoji"),
            data_dir: PathBuf::from("node_modules"),
            online: false,
            emojibase_version: String::from(DEFAULT_EMOJIBASE_VERSION),
            datasource_version: String::from(DEFAULT_DATASOURCE_VERSION),
            shortcode_presets: vec![String::from("cldr")],
            ignore_fe0f: false,
            categories: vec![OutputCategory::Locales, OutputCategory::Meta],
        }
    }
}

impl GeneratorConfig {
    /// Loads a configuration file; its format is chosen by the file extension (JSON or YAML).
    pub fn from_file(path: &Path) -> Result<Self, GenerationError> {
        let config_error = |error: DeserializeError| GenerationError::Config {
            path: path.to_path_buf(),
            error,
        };
        let format = DataFormat::for_file(path).unwrap_or_default();
        let file = File::open(path).map_err(|error| config_error(error.into()))?;
        let mut config: Self = format.deserialize(BufReader::new(file))
            .map_err(|error| config_error(error.into()))?;
        if let Some(parent) = path.parent() {
            config.normalize_paths(parent);
        }
        Ok(config)
    }

    /// Uses the first of the [CONFIG_FILES] in a directory or the default configuration
    /// (with the directory as the project root) if there is none.
    pub fn load_from_dir(dir: &Path) -> Result<Self, GenerationError> {
        let config_file = CONFIG_FILES.iter()
            .map(|file| dir.join(file))
            .find(|path| path.is_file());
        match config_file {
            Some(path) => {
                info!("Using configuration {}", path.display());
                Self::from_file(&path)
            }
            None => Ok(Self {
                project_root: dir.to_path_buf(),
                ..Self::default()
            })
        }
    }

    fn normalize_paths(&mut self, root_dir: &Path) {
        self.project_root = relate_path(root_dir, &self.project_root);
    }

    pub fn locales_path(&self) -> PathBuf {
        relate_path(&self.project_root, &self.locales_dir)
    }

    pub fn output_path(&self) -> PathBuf {
        relate_path(&self.project_root, &self.output_dir)
    }

    pub fn data_path(&self) -> PathBuf {
        relate_path(&self.project_root, &self.data_dir)
    }

    /// Creates the data source this configuration asks for
    pub fn data_source(&self) -> Result<Box<dyn EmojiDataSource>, DataError> {
        #[cfg(feature = "online")]
        {
            if self.online {
                let source = OnlineSource::new(&self.emojibase_version, &self.datasource_version)?;
                return Ok(Box::new(source));
            }
        }
        #[cfg(not(feature = "online"))]
        {
            if self.online {
                warn!("Built without the online feature, reading the datasets from {}",
                      self.data_path().display());
            }
        }
        Ok(Box::new(FsSource::new(self.data_path())))
    }
}

fn relate_path(base_dir: &Path, target_path: &Path) -> PathBuf {
    // We use has_root here instead of is_absolute since otherwise
    // \file would be equal to .\file on Windows, which does not seem to be the usual expected
    // behavior.
    if !target_path.has_root() {
        base_dir.join(target_path)
    } else {
        target_path.to_path_buf()
    }
}
