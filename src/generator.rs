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
//! Generates `<output>/<category>/<locale>.json` for every locale that both the host application
//! and emojibase-data support.
//!
//! Every file is an independent job. Jobs run in parallel and a failing job doesn't stop the others;
//! all failures are collected and returned together once every job is done.

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::fs;
use std::path::{Path, PathBuf};

use itertools::{Either, Itertools};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::configs::config::GeneratorConfig;
use crate::errors::GenerationError;
use crate::locales;
use crate::locales::SUPPORTED_LOCALES;
use crate::mapper::{category_index, merge_with_table, unicode_mapping};
use crate::sources::EmojiDataSource;
use crate::tables::compact_table::CompactTable;

/// The kinds of JSON files, each one written to its own directory
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum OutputCategory {
    /// `locales/<locale>.json`: hex code -> label, e.g. for alt texts
    Locales,
    /// `meta/<locale>.json`: sheet coordinates and shortcodes, see [crate::emojis::merged::MergedEmoji]
    Meta,
    /// `categories/<locale>.json`: localized group names and shortcode aliases,
    /// see [crate::emojis::messages::CategoryIndex]
    Categories,
}

impl OutputCategory {
    pub fn dir_name(&self) -> &'static str {
        match self {
            OutputCategory::Locales => "locales",
            OutputCategory::Meta => "meta",
            OutputCategory::Categories => "categories",
        }
    }
}

impl Display for OutputCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// What a successful run generated
#[derive(Debug, Default, Clone, PartialEq)]
pub struct GenerationReport {
    /// The locales both sides support
    pub locales: Vec<String>,
    pub written: Vec<PathBuf>,
    /// The locales each category has been generated for
    pub generated: BTreeMap<OutputCategory, Vec<String>>,
}

#[derive(Debug)]
pub struct Generator {
    locales_dir: PathBuf,
    output_dir: PathBuf,
    shortcode_presets: Vec<String>,
    ignore_fe0f: bool,
    categories: Vec<OutputCategory>,
    source: Box<dyn EmojiDataSource>,
}

impl Generator {
    /// Creates a generator with the data source the configuration asks for
    pub fn new(config: &GeneratorConfig) -> Result<Self, GenerationError> {
        let source = config.data_source()
            .map_err(GenerationError::Source)?;
        Ok(Self::with_source(config, source))
    }

    pub fn with_source(config: &GeneratorConfig, source: Box<dyn EmojiDataSource>) -> Self {
        Self {
            locales_dir: config.locales_path(),
            output_dir: config.output_path(),
            shortcode_presets: config.shortcode_presets.clone(),
            ignore_fe0f: config.ignore_fe0f,
            categories: config.categories.clone(),
            source,
        }
    }

    /// The locales emojibase-data provides that the host application has a translation file for
    pub fn calculate_locales(&self) -> Result<Vec<String>, GenerationError> {
        let app_locales = locales::app_locales(&self.locales_dir)
            .map_err(|error| GenerationError::FileSystem {
                path: self.locales_dir.clone(),
                error,
            })?;
        Ok(locales::intersect(&SUPPORTED_LOCALES, &app_locales))
    }

    /// Builds the JSON content of one file
    pub fn render(&self, category: OutputCategory, locale: &str) -> Result<String, GenerationError> {
        let data_error = |error| GenerationError::Data {
            category,
            locale: locale.to_owned(),
            error,
        };
        let json = match category {
            OutputCategory::Locales => {
                let compact = self.source.fetch_compact(locale)
                    .map_err(data_error)?;
                serde_json::to_string_pretty(&unicode_mapping(&compact))?
            }
            OutputCategory::Meta => {
                let compact = self.source.fetch_compact_with_shortcodes(locale, &self.shortcode_presets)
                    .map_err(data_error)?;
                let sheet = self.source.fetch_sheet()
                    .map_err(data_error)?;
                let mut table = CompactTable::new_fe0f(self.ignore_fe0f);
                table.extend(compact);
                serde_json::to_string_pretty(&merge_with_table(&table, &sheet))?
            }
            OutputCategory::Categories => {
                let compact = self.source.fetch_compact_with_shortcodes(locale, &self.shortcode_presets)
                    .map_err(data_error)?;
                let messages = self.source.fetch_messages(locale)
                    .map_err(data_error)?;
                serde_json::to_string_pretty(&category_index(&compact, &messages))?
            }
        };
        Ok(json)
    }

    /// Renders one file and writes it to `dir`, replacing an existing one
    pub fn generate(&self, category: OutputCategory, locale: &str, dir: &Path) -> Result<PathBuf, GenerationError> {
        let json = self.render(category, locale)?;
        let path = dir.join(format!("{}.json", locale));
        fs::write(&path, json)
            .map_err(|error| GenerationError::FileSystem {
                path: path.clone(),
                error,
            })?;
        debug!("Wrote {}", path.display());
        Ok(path)
    }

    /// Generates every category for every locale.
    ///
    /// If the directory of a category can't be created, none of its files are generated.
    /// All other jobs still run.
    pub fn generate_all(&self) -> Result<GenerationReport, GenerationError> {
        let locales = self.calculate_locales()?;
        if locales.is_empty() {
            warn!("No locale in {} is supported by emojibase-data", self.locales_dir.display());
        }

        let (directories, mut errors): (Vec<_>, Vec<_>) = self.categories.iter()
            .unique()
            .map(|category| {
                let dir = self.output_dir.join(category.dir_name());
                match fs::create_dir_all(&dir) {
                    Ok(()) => Ok((*category, dir)),
                    Err(error) => Err(GenerationError::FileSystem { path: dir, error }),
                }
            })
            .partition_map(|result| match result {
                Ok(directory) => Either::Left(directory),
                Err(error) => Either::Right(error),
            });
        errors.iter()
            .for_each(|error| error!("{}", error));

        let jobs: Vec<(OutputCategory, &Path, &str)> = directories.iter()
            .flat_map(|(category, dir)| locales.iter()
                .map(move |locale| (*category, dir.as_path(), locale.as_str())))
            .collect();

        let results: Vec<_> = jobs.par_iter()
            .map(|(category, dir, locale)| (*category, *locale, self.generate(*category, locale, dir)))
            .collect();

        let mut report = GenerationReport {
            locales: locales.clone(),
            ..GenerationReport::default()
        };
        for (category, locale, result) in results {
            match result {
                Ok(path) => {
                    report.written.push(path);
                    report.generated.entry(category)
                        .or_insert_with(Vec::new)
                        .push(locale.to_owned());
                }
                Err(error) => {
                    error!("{}", error);
                    errors.push(error);
                }
            }
        }

        report.generated.iter()
            .for_each(|(category, locales)| info!("Generated emoji JSON files ({}) for locales: {}",
                                                  category,
                                                  locales.join(", ")));

        if errors.is_empty() {
            Ok(report)
        } else {
            Err(errors.into())
        }
    }
}
