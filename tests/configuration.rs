//! Tests for configuration system

mod helpers;

use plateup::Config;
use plateup::config::LogFormat;
use temp_dir::TempDir;

#[test]
fn test_config_loads_from_default_toml() {
    let config = Config::load(None).expect("Failed to load config");

    assert_eq!(config.storage.path, "plateup.json");
    assert_eq!(config.observability.log_level, "warn");
    assert_eq!(config.observability.format, LogFormat::Pretty);
    assert_eq!(config.recipe.default_servings, 2);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_file_overrides_defaults() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = helpers::write_file(
        &dir,
        "plateup.toml",
        r#"
[storage]
path = "/tmp/plateup-kitchen.json"

[observability]
format = "json"

[recipe]
default_servings = 4
"#,
    )?;

    let config = Config::load(Some(helpers::path_string(&path)))?;

    assert_eq!(config.storage.path, "/tmp/plateup-kitchen.json");
    assert_eq!(config.observability.format, LogFormat::Json);
    assert_eq!(config.observability.log_level, "warn");
    assert_eq!(config.recipe.default_servings, 4);

    Ok(())
}

#[test]
fn test_missing_config_file_falls_back_to_defaults() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let missing = dir.child("nope.toml");

    let config = Config::load(Some(helpers::path_string(&missing)))?;

    assert_eq!(config.storage.path, "plateup.json");
    assert_eq!(config.recipe.default_servings, 2);

    Ok(())
}

#[test]
fn test_out_of_range_servings_fail_validation() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = helpers::write_file(&dir, "plateup.toml", "[recipe]\ndefault_servings = 12\n")?;

    let config = Config::load(Some(helpers::path_string(&path)))?;

    assert!(config.validate().is_err());

    Ok(())
}

#[test]
fn test_environment_overrides_catalog_path() -> anyhow::Result<()> {
    // only this test touches PLATEUP__CATALOG__PATH
    unsafe {
        std::env::set_var("PLATEUP__CATALOG__PATH", "recipes/custom.json");
    }

    let config = Config::load(None);

    unsafe {
        std::env::remove_var("PLATEUP__CATALOG__PATH");
    }

    assert_eq!(config?.catalog.path.as_deref(), Some("recipes/custom.json"));

    Ok(())
}
