//! Environment overrides, kept in their own test binary so the process
//! environment is not shared with other configuration tests

use cistern_engine::utils::config::EngineConfig;
use std::io::Write;

#[test]
fn environment_overrides_file() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(b"[report]\ntime_unit = \"hour\"\n").unwrap();
    file.flush().unwrap();

    std::env::set_var("CISTERN_REPORT__TIME_UNIT", "minute");
    let config = EngineConfig::load_from(file.path());
    std::env::remove_var("CISTERN_REPORT__TIME_UNIT");

    assert_eq!(config.unwrap().report.time_unit, "minute");
}
