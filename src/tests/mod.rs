mod generator_test;
mod locales_test;

/// The installed packages used as test data
pub const TEST_DATA: &str = "test_files/node_modules";
/// A host application with the translations for `de`, `en`, `fr` and `xx`
pub const TEST_PROJECT: &str = "test_files/project";

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
