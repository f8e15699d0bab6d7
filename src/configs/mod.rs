/// The configuration of the generator and how it is loaded
pub mod config;
