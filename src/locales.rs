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

use std::io;
use std::path::Path;

use itertools::Itertools;

/// The locales emojibase-data provides datasets for
pub const SUPPORTED_LOCALES: [&str; 28] = [
    "bn", "da", "de", "en-gb", "en", "es-mx", "es", "et", "fi", "fr", "hi", "hu", "it", "ja",
    "ko", "lt", "ms", "nb", "nl", "pl", "pt", "ru", "sv", "th", "uk", "vi", "zh", "zh-hant",
];

/// Checks (case-insensitively) whether emojibase-data has datasets for a locale.
/// # Examples
/// ```
/// use emoji_sheet_mapper::locales::is_supported;
///
/// assert!(is_supported("en"));
/// assert!(is_supported("zh-Hant"));
/// assert!(!is_supported("xx"));
/// ```
pub fn is_supported(locale: &str) -> bool {
    SUPPORTED_LOCALES.iter()
        .any(|supported| supported.eq_ignore_ascii_case(locale))
}

/// Lists the locales of the host application, i.e. the names of the `*.json` files in its
/// translation directory, in lower case and sorted.
pub fn app_locales(locales_dir: &Path) -> io::Result<Vec<String>> {
    let entries = std::fs::read_dir(locales_dir)?;
    Ok(entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .filter(|path| path.extension()
            .map(|extension| extension == "json")
            .unwrap_or(false))
        .filter_map(|path| path.file_stem()
            .map(|stem| stem.to_string_lossy().to_lowercase()))
        .sorted()
        .dedup()
        .collect())
}

/// Returns the provider's locales that the host application supports as well.
///
/// The comparison is case-insensitive; the result keeps the provider's order and spelling.
/// # Examples
/// ```
/// use emoji_sheet_mapper::locales::intersect;
///
/// let generated = intersect(&["en", "fr", "de"], &["en", "FR", "xx"]);
/// assert_eq!(generated, vec!["en", "fr"]);
/// ```
pub fn intersect<P, H>(provider_locales: &[P], host_locales: &[H]) -> Vec<String>
    where P: AsRef<str>, H: AsRef<str> {
    provider_locales.iter()
        .map(|locale| AsRef::<str>::as_ref(locale))
        .filter(|locale| host_locales.iter()
            .any(|host_locale| AsRef::<str>::as_ref(host_locale).eq_ignore_ascii_case(locale)))
        .unique()
        .map(String::from)
        .collect()
}
