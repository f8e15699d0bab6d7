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
//! Converts emoji metadata from the emojibase and emoji-datasource packages into the static
//! JSON files a web client loads at runtime.

#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;

/// The data model for both upstream datasets and the merged output
pub mod emojis;
/// Lookup tables that join the datasets by hex code
pub mod tables;
/// Joins the compact and the sheet dataset into the output formats
pub mod mapper;
/// Providers for the upstream datasets (file system, memory, web)
pub mod sources;
/// The locales the data provider and the host application support
pub mod locales;
/// Writes the JSON files for every locale
pub mod generator;
pub mod configs;
pub mod errors;

#[cfg(test)]
mod tests;
