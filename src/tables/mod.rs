/// The hex code to emoji lookup used while merging
pub mod compact_table;
