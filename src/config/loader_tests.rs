//! Tests for configuration file loading.

use super::*;
use serial_test::serial;
use std::env;
use std::fs;

/// RAII guard to ensure environment variable cleanup even under test parallelism.
/// Removes the var on drop, preventing test pollution in parallel execution.
struct EnvGuard(&'static str);

impl EnvGuard {
    fn new(name: &'static str) -> Self {
        env::remove_var(name);
        EnvGuard(name)
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        env::remove_var(self.0);
    }
}

#[test]
fn default_config_path_ends_with_config_toml() {
    let path = default_config_path().expect("Should have default path");
    let path_str = path.to_string_lossy();
    assert!(
        path_str.contains("teapot-list") && path_str.ends_with("config.toml"),
        "Path should contain 'teapot-list' and end with 'config.toml', got: {}",
        path_str
    );
}

#[test]
fn load_config_file_returns_ok_none_for_missing_file() {
    let result = load_config_file("/nonexistent/path/to/config.toml");
    assert_eq!(
        result,
        Ok(None),
        "Missing config file should return Ok(None), not an error"
    );
}

#[test]
fn load_config_file_parses_valid_toml() {
    let config_path = env::temp_dir().join("teapot_list_test_config.toml");

    let toml_content = r#"
vertical_spacing = 2.0
estimated_item_height = 4.0
sections = 3
items_per_section = 9

[insets]
top = 0.0
right = 5.0
"#;
    fs::write(&config_path, toml_content).expect("Failed to write test config");

    let config = load_config_file(&config_path)
        .expect("Should successfully parse valid TOML")
        .expect("Should return Some(ConfigFile) for existing file");

    assert_eq!(config.vertical_spacing, Some(2.0));
    assert_eq!(config.estimated_item_height, Some(4.0));
    assert_eq!(config.sections, Some(3));
    assert_eq!(config.items_per_section, Some(9));
    let insets = config.insets.expect("insets table present");
    assert_eq!(insets.top, Some(0.0));
    assert_eq!(insets.left, None);
    assert_eq!(insets.right, Some(5.0));

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_returns_error_for_invalid_toml() {
    let config_path = env::temp_dir().join("teapot_list_test_invalid.toml");
    fs::write(&config_path, "this is not valid TOML ][}{").expect("Failed to write test config");

    let result = load_config_file(&config_path);

    match result {
        Err(ConfigError::ParseError { path, reason: _ }) => {
            assert_eq!(path, config_path);
        }
        _ => panic!("Expected ParseError, got {:?}", result),
    }

    fs::remove_file(config_path).ok();
}

#[test]
fn config_file_rejects_unknown_fields() {
    let result: Result<ConfigFile, _> = toml::from_str("theme = \"monokai\"");
    assert!(result.is_err(), "Unknown keys should be rejected");

    let result: Result<ConfigFile, _> = toml::from_str("[insets]\nmiddle = 3.0");
    assert!(result.is_err(), "Unknown inset keys should be rejected");
}

#[test]
fn resolved_config_default_has_terminal_values() {
    let config = ResolvedConfig::default();
    assert_eq!(config.vertical_spacing, 1.0);
    assert_eq!(config.estimated_item_height, 1.0);
    assert_eq!(config.insets, EdgeInsets::new(1.0, 2.0, 1.0, 2.0));
    assert_eq!(config.sections, 7);
    assert_eq!(config.items_per_section, 7);
}

#[test]
fn merge_config_uses_defaults_when_none() {
    assert_eq!(merge_config(None), ResolvedConfig::default());
}

#[test]
fn merge_config_overrides_with_config_file_values() {
    let file = ConfigFile {
        vertical_spacing: Some(3.0),
        sections: Some(2),
        insets: Some(InsetsSection {
            left: Some(0.0),
            ..InsetsSection::default()
        }),
        ..ConfigFile::default()
    };

    let resolved = merge_config(Some(file));

    assert_eq!(resolved.vertical_spacing, 3.0);
    assert_eq!(resolved.sections, 2);
    assert_eq!(resolved.items_per_section, 7);
    assert_eq!(resolved.insets, EdgeInsets::new(1.0, 0.0, 1.0, 2.0));
}

#[test]
fn layout_config_reflects_resolved_values() {
    let resolved = ResolvedConfig {
        vertical_spacing: 8.0,
        estimated_item_height: 10.0,
        insets: EdgeInsets::uniform(20.0),
        ..ResolvedConfig::default()
    };
    assert_eq!(resolved.layout_config(), LayoutConfig::default());
}

#[test]
fn data_source_reflects_resolved_counts() {
    let resolved = ResolvedConfig {
        sections: 2,
        items_per_section: 4,
        ..ResolvedConfig::default()
    };
    assert_eq!(resolved.data_source(), TeapotDataSource::new(2, 4));
}

#[test]
#[serial(teapot_list_spacing)]
fn apply_env_overrides_respects_spacing_var() {
    let _guard = EnvGuard::new(SPACING_ENV_VAR);
    env::set_var(SPACING_ENV_VAR, "2.5");

    let config = apply_env_overrides(ResolvedConfig::default()).expect("valid value");

    assert_eq!(config.vertical_spacing, 2.5);
}

#[test]
#[serial(teapot_list_spacing)]
fn apply_env_overrides_rejects_invalid_spacing() {
    let _guard = EnvGuard::new(SPACING_ENV_VAR);
    env::set_var(SPACING_ENV_VAR, "-1");

    let result = apply_env_overrides(ResolvedConfig::default());

    assert_eq!(
        result,
        Err(ConfigError::InvalidEnv {
            var: SPACING_ENV_VAR,
            value: "-1".to_string()
        })
    );
}

#[test]
#[serial(teapot_list_spacing)]
fn apply_env_overrides_no_change_when_env_var_not_set() {
    let _guard = EnvGuard::new(SPACING_ENV_VAR);

    let config = apply_env_overrides(ResolvedConfig::default()).expect("nothing to parse");

    assert_eq!(config, ResolvedConfig::default());
}

#[test]
fn apply_cli_overrides_only_touches_given_values() {
    let config = apply_cli_overrides(ResolvedConfig::default(), Some(3), None, Some(0.0));

    assert_eq!(config.sections, 3);
    assert_eq!(config.items_per_section, 7);
    assert_eq!(config.vertical_spacing, 0.0);
}

#[test]
#[serial(teapot_list_config)]
fn load_config_with_precedence_prefers_explicit_path() {
    let _guard = EnvGuard::new(CONFIG_ENV_VAR);
    let explicit = env::temp_dir().join("teapot_list_explicit.toml");
    let from_env = env::temp_dir().join("teapot_list_env.toml");
    fs::write(&explicit, "sections = 1").expect("write explicit");
    fs::write(&from_env, "sections = 2").expect("write env");
    env::set_var(CONFIG_ENV_VAR, &from_env);

    let config = load_config_with_precedence(Some(explicit.clone()))
        .expect("parses")
        .expect("present");

    assert_eq!(config.sections, Some(1));
    fs::remove_file(explicit).ok();
    fs::remove_file(from_env).ok();
}

#[test]
#[serial(teapot_list_config)]
fn load_config_with_precedence_uses_env_var_when_no_explicit_path() {
    let _guard = EnvGuard::new(CONFIG_ENV_VAR);
    let from_env = env::temp_dir().join("teapot_list_env_only.toml");
    fs::write(&from_env, "items_per_section = 4").expect("write env");
    env::set_var(CONFIG_ENV_VAR, &from_env);

    let config = load_config_with_precedence(None)
        .expect("parses")
        .expect("present");

    assert_eq!(config.items_per_section, Some(4));
    fs::remove_file(from_env).ok();
}
