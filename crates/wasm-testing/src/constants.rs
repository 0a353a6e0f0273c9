use lazy_static::lazy_static;
use std::path::PathBuf;

pub const FIXTURE_EXTENSION: &str = "json";

pub const FIXTURES_ENV: &str = "WASM_TEST_FIXTURES";
pub const SKIP_FILE_ENV: &str = "WASM_TEST_SKIP_FILE";

lazy_static! {
    pub static ref DEFAULT_FIXTURES_PATH: PathBuf =
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("test_data/fixtures");
    pub static ref DEFAULT_SKIP_FILE: PathBuf =
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("test_data/wasm-tests-skip.yml");
}
