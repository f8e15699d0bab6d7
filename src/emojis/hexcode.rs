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
//! Hex codes identify an emoji in both datasets, e.g. `1F468-200D-1F469`.
//! Before two datasets can be joined their hex codes have to be brought into the same shape.

use itertools::Itertools;
use regex::Regex;
use serde::{Deserialize, Deserializer};
use serde::de::Error;

/// The emoji presentation selector
pub const FE0F: &str = "FE0F";

lazy_static! {
    static ref DELIMITERS: Regex = Regex::new(r"[-_\s]+").unwrap();
    static ref HEXCODE: Regex = Regex::new(r"^[0-9A-F]{1,8}(-[0-9A-F]{1,8})*$").unwrap();
}

/// Converts a hex code into the canonical form used as a join key:
/// upper case with single dashes between the codepoints.
/// # Examples
/// ```
/// use emoji_sheet_mapper::emojis::hexcode::normalize_hexcode;
///
/// assert_eq!(normalize_hexcode("1f600"), "1F600");
/// assert_eq!(normalize_hexcode(" 1f468_200d 1F469 "), "1F468-200D-1F469");
/// ```
pub fn normalize_hexcode(raw: &str) -> String {
    DELIMITERS.split(raw.trim())
        .filter(|codepoint| !codepoint.is_empty())
        .map(|codepoint| codepoint.to_uppercase())
        .join("-")
}

/// Checks whether an already normalized hex code only consists of hexadecimal codepoints
pub fn is_valid(hexcode: &str) -> bool {
    HEXCODE.is_match(hexcode)
}

/// Removes every `FE0F` from a normalized hex code.
/// # Examples
/// ```
/// use emoji_sheet_mapper::emojis::hexcode::strip_fe0f;
///
/// assert_eq!(strip_fe0f("263A-FE0F"), "263A");
/// assert_eq!(strip_fe0f("1F3F3-FE0F-200D-1F308"), "1F3F3-200D-1F308");
/// ```
pub fn strip_fe0f(hexcode: &str) -> String {
    hexcode.split('-')
        .filter(|codepoint| *codepoint != FE0F)
        .join("-")
}

/// Builds the emoji itself from its hex code, mostly for log messages.
/// # Examples
/// ```
/// use emoji_sheet_mapper::emojis::hexcode::display_emoji;
///
/// assert_eq!(display_emoji("1F914"), Some(String::from("🤔")));
/// assert_eq!(display_emoji("XYZ"), None);
/// ```
pub fn display_emoji(hexcode: &str) -> Option<String> {
    hexcode.split('-')
        .map(|codepoint| u32::from_str_radix(codepoint, 16).ok().and_then(std::char::from_u32))
        .collect()
}

/// Deserializes a hex code and normalizes it on the way.
/// Anything that isn't a sequence of hexadecimal codepoints is rejected.
pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where D: Deserializer<'de> {
    let raw = String::deserialize(deserializer)?;
    let hexcode = normalize_hexcode(&raw);
    if is_valid(&hexcode) {
        Ok(hexcode)
    } else {
        Err(D::Error::custom(format!("invalid hex code: {:?}", raw)))
    }
}
