use std::env;
use std::fs;

use super::*;
use crate::taxonomy::{Category, Taxonomy};
use crate::testutil::with_temp_cwd;

const ENV_KEYS: &[&str] = &["BACKLOG_INPUT", "BACKLOG_OUTPUT", "BACKLOG_LOG_FILE"];

/// Clears the backlog env vars for the duration of a test.
struct EnvGuard;

impl EnvGuard {
    fn clean() -> Self {
        for key in ENV_KEYS {
            env::remove_var(key);
        }
        Self
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for key in ENV_KEYS {
            env::remove_var(key);
        }
    }
}

fn args(list: &[&str]) -> Vec<String> {
    std::iter::once("backlog")
        .chain(list.iter().copied())
        .map(String::from)
        .collect()
}

#[test]
fn test_config_default() {
    let config = Config::default();
    assert_eq!(config.files_input, DEFAULT_INPUT);
    assert_eq!(config.files_output, DEFAULT_OUTPUT);
    assert_eq!(config.files_log, None);
    assert!(!config.quiet);
    assert_eq!(config.taxonomy, Taxonomy::default());
}

#[test]
fn test_config_with_taxonomy() {
    let taxonomy = Taxonomy::new(vec![Category::new("Only", &["Widgets"])]);
    let config = Config::default().with_taxonomy(taxonomy.clone());
    assert_eq!(config.taxonomy, taxonomy);
}

#[test]
fn test_config_parse_toml() {
    let toml = r#"
# comment
[files]
input = "issues.json"
output = "out/BACKLOG.md"  # trailing comment
log = "backlog.log"

[other]
ignored = 1
"#;
    let config = Config::parse_toml(toml).unwrap();
    assert_eq!(config.files_input, "issues.json");
    assert_eq!(config.files_output, "out/BACKLOG.md");
    assert_eq!(config.files_log, Some("backlog.log".to_string()));
}

#[test]
fn test_config_parse_toml_hash_inside_string() {
    let config = Config::parse_toml("[files]\ninput = \"a#b.json\"\n").unwrap();
    assert_eq!(config.files_input, "a#b.json");
}

#[test]
fn test_config_parse_toml_empty_log_disables() {
    let config = Config::parse_toml("[files]\nlog = \"\"\n").unwrap();
    assert_eq!(config.files_log, None);
}

#[test]
fn test_config_parse_toml_invalid() {
    assert!(matches!(
        Config::parse_toml("[files]\ninput = issues.json\n"),
        Err(ConfigError::Parse(_))
    ));
    assert!(matches!(
        Config::parse_toml("[files]\njust a line\n"),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn test_default_toml_roundtrip() {
    let config = Config::parse_toml(&Config::default_toml()).unwrap();
    assert_eq!(config.files_input, DEFAULT_INPUT);
    assert_eq!(config.files_output, DEFAULT_OUTPUT);
    assert_eq!(config.files_log, None);
}

#[test]
fn test_parse_args_flags() {
    let cli = parse_args(args(&[
        "-i", "in.json", "--output", "out.md", "--log-file", "run.log", "-q",
    ]));
    assert_eq!(cli.input, Some("in.json".to_string()));
    assert_eq!(cli.output, Some("out.md".to_string()));
    assert_eq!(cli.log_file, Some("run.log".to_string()));
    assert!(cli.quiet);
    assert!(!cli.help);
}

#[test]
fn test_parse_args_help_version_config() {
    assert!(parse_args(args(&["--help"])).help);
    assert!(parse_args(args(&["-V"])).version);
    let cli = parse_args(args(&["-c", "custom.toml", "--bogus"]));
    assert_eq!(cli.config, Some("custom.toml".to_string()));
}

#[test]
fn test_parse_args_missing_value() {
    let cli = parse_args(args(&["--input"]));
    assert_eq!(cli.input, None);
}

#[test]
fn test_config_apply_cli() {
    let mut config = Config::default();
    let cli = CliArgs {
        output: Some("docs/BACKLOG.md".to_string()),
        quiet: true,
        ..Default::default()
    };
    config.apply_cli(&cli);
    assert_eq!(config.files_input, DEFAULT_INPUT);
    assert_eq!(config.files_output, "docs/BACKLOG.md");
    assert!(config.quiet);
}

#[test]
fn test_config_load_precedence() {
    with_temp_cwd(|| {
        let _env = EnvGuard::clean();
        fs::write(
            DEFAULT_CONFIG_FILE,
            "[files]\ninput = \"file.json\"\noutput = \"file.md\"\nlog = \"file.log\"\n",
        )
        .unwrap();
        env::set_var("BACKLOG_OUTPUT", "env.md");
        env::set_var("BACKLOG_LOG_FILE", "env.log");

        let cli = parse_args(args(&["--log-file", "cli.log"]));
        let config = Config::load(&cli).unwrap();

        assert_eq!(config.files_input, "file.json");
        assert_eq!(config.files_output, "env.md");
        assert_eq!(config.files_log, Some("cli.log".to_string()));
    });
}

#[test]
fn test_config_load_without_file() {
    with_temp_cwd(|| {
        let _env = EnvGuard::clean();
        let config = Config::load(&CliArgs::default()).unwrap();
        assert_eq!(config.files_input, DEFAULT_INPUT);
        assert_eq!(config.files_output, DEFAULT_OUTPUT);
    });
}

#[test]
fn test_config_load_ignores_invalid_implicit_file() {
    with_temp_cwd(|| {
        let _env = EnvGuard::clean();
        fs::write(DEFAULT_CONFIG_FILE, "[files]\ninput = broken\n").unwrap();
        let config = Config::load(&CliArgs::default()).unwrap();
        assert_eq!(config.files_input, DEFAULT_INPUT);
    });
}

#[test]
fn test_config_load_explicit_file_errors() {
    with_temp_cwd(|| {
        let _env = EnvGuard::clean();
        let cli = parse_args(args(&["--config", "missing.toml"]));
        assert!(matches!(Config::load(&cli), Err(ConfigError::Io(_))));

        fs::write("bad.toml", "[files]\noutput = nope\n").unwrap();
        let cli = parse_args(args(&["--config", "bad.toml"]));
        assert!(matches!(Config::load(&cli), Err(ConfigError::Parse(_))));
    });
}

#[test]
fn test_env_empty_log_file_disables_logging() {
    with_temp_cwd(|| {
        let _env = EnvGuard::clean();
        fs::write(DEFAULT_CONFIG_FILE, "[files]\nlog = \"file.log\"\n").unwrap();
        env::set_var("BACKLOG_LOG_FILE", "");
        let config = Config::load(&CliArgs::default()).unwrap();
        assert_eq!(config.files_log, None);
    });
}
