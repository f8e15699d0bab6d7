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

#[macro_use]
extern crate log;

use std::process::exit;

use env_logger::Env;

use emoji_sheet_mapper::configs::config::GeneratorConfig;
use emoji_sheet_mapper::errors::GenerationError;
use emoji_sheet_mapper::generator::{GenerationReport, Generator};

fn run() -> Result<GenerationReport, GenerationError> {
    let current_dir = std::env::current_dir()
        .map_err(|error| GenerationError::FileSystem {
            path: ".".into(),
            error,
        })?;
    let config = GeneratorConfig::load_from_dir(&current_dir)?;
    let generator = Generator::new(&config)?;
    generator.generate_all()
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    match run() {
        Ok(report) => info!("Wrote {} files", report.written.len()),
        // The single failures have already been logged by the generator
        Err(GenerationError::Multiple(errors)) => {
            error!("{} of the emoji JSON files couldn't be generated", errors.len());
            exit(1);
        }
        Err(error) => {
            error!("{}", error);
            exit(1);
        }
    }
}
