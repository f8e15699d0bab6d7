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

use std::collections::HashMap;
use std::io::{Cursor, Read};
use std::sync::RwLock;

use reqwest::StatusCode;

use crate::errors::DataError;
use crate::sources::{Dataset, EmojiDataSource};

/// A CDN that mirrors the npm packages
pub const CDN_URL: &str = "https://cdn.jsdelivr.net/npm";

/// Fetches the datasets for fixed package versions from the web.
#[derive(Debug)]
pub struct OnlineSource {
    client: reqwest::blocking::Client,
    emojibase_version: String,
    datasource_version: String,
}

impl OnlineSource {
    pub fn new(emojibase_version: &str, datasource_version: &str) -> Result<Self, DataError> {
        let client = reqwest::blocking::Client::builder().build()?;
        Ok(Self {
            client,
            emojibase_version: emojibase_version.to_owned(),
            datasource_version: datasource_version.to_owned(),
        })
    }

    /// A simple helper function to build the URLs for the different datasets.
    pub fn build_url(&self, dataset: &Dataset<'_>) -> String {
        let version = match dataset {
            Dataset::Sheet => &self.datasource_version,
            _ => &self.emojibase_version,
        };
        format!("{}/{}@{}/{}", CDN_URL, dataset.package(), version, dataset.file())
    }

    fn get(&self, dataset: &Dataset<'_>) -> Result<bytes::Bytes, DataError> {
        let url = self.build_url(dataset);
        // Check if we can return the file from the cache already
        if let Ok(cache) = (&*DATASET_CACHE as &DatasetCache).read() {
            if let Some(cached) = cache.get(&url) {
                return Ok(cached.clone());
            }
        }
        info!("Downloading {}", url);
        let response = self.client.get(&url).send()?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(DataError::not_found(dataset));
        }
        let bytes = response.error_for_status()?.bytes()?;

        if let Ok(mut cache) = (&*DATASET_CACHE as &DatasetCache).write() {
            // Another job might have downloaded it in the meantime, but the content is the same
            cache.entry(url).or_insert_with(|| bytes.clone());
        }
        Ok(bytes)
    }
}

impl EmojiDataSource for OnlineSource {
    fn request(&self, dataset: &Dataset<'_>) -> Result<Box<dyn Read + '_>, DataError> {
        let bytes = self.get(dataset)?;
        Ok(Box::new(Cursor::new(bytes)))
    }
}

type DatasetCache = RwLock<HashMap<String, bytes::Bytes>>;

// Only lives for one run. The sheet is shared by every locale, so it benefits most
lazy_static! {
    static ref DATASET_CACHE: DatasetCache =
        RwLock::new(HashMap::with_capacity(64));
}
