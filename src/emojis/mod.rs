/// Normalization of hex codes
pub mod hexcode;
/// Entries of the locale-aware emojibase `compact.json` datasets
pub mod compact;
/// Entries of the emoji-datasource sprite-sheet index
pub mod sheet;
/// The merged output format
pub mod merged;
/// Localized group names and the category index built from them
pub mod messages;
