//! Tests for config functionality.

use crate::config::types::default_messages;
use crate::config::{CONFIG_FILE_NAME, Config};
use crate::error::CgiError;
use tempfile::TempDir;

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.layout, "pages/success_layout.html");
    assert_eq!(config.content_type, "text/html");
    assert!(config.emit_header);
    assert!(!config.charset);
    assert_eq!(config.page.title, "PHP Test");
    assert_eq!(config.page.icon, "🐘");
    assert_eq!(config.page.heading, "PHP CGI Executed Successfully");
    assert_eq!(config.page.messages.len(), 5);
    assert!(config.page.extra.is_empty());
}

#[test]
fn test_default_messages_are_exact() {
    assert_eq!(
        default_messages(),
        vec![
            "PHP is running through CGI! 🐘",
            "CGI + PHP = retro and cool 😎",
            "Your Webserv just executed real PHP code ✨",
            "Did someone say PHP-Fu? 👊",
            "The elephant approves this message 🐘💙",
        ]
    );
}

#[test]
fn test_parse_minimal_yaml() {
    let config = Config::from_yaml("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_parse_partial_yaml() {
    let yaml = r#"
charset: true
page:
  title: CGI Test
"#;
    let config = Config::from_yaml(yaml).unwrap();

    // Specified values should be used
    assert!(config.charset);
    assert_eq!(config.page.title, "CGI Test");

    // Unspecified values should use defaults
    assert!(config.emit_header);
    assert_eq!(config.page.heading, "PHP CGI Executed Successfully");
    assert_eq!(config.page.messages, default_messages());
}

#[test]
fn test_parse_full_yaml() {
    let yaml = r#"
layout: templates/ok.html
content_type: application/xhtml+xml
emit_header: false
charset: true
page:
  title: CGI Test
  icon: "🐍"
  heading: Python CGI
  messages:
    - one
    - two
  extra:
    body: "<p>Dynamic content here!</p>"
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.layout, "templates/ok.html");
    assert_eq!(config.content_type, "application/xhtml+xml");
    assert!(!config.emit_header);
    assert!(config.charset);
    assert_eq!(config.page.icon, "🐍");
    assert_eq!(config.page.messages, vec!["one", "two"]);
    assert_eq!(
        config.page.extra.get("body").map(String::as_str),
        Some("<p>Dynamic content here!</p>")
    );
}

#[test]
fn test_unknown_fields_ignored() {
    let yaml = r#"
future_option: 42
page:
  future_page_option: true
"#;
    assert!(Config::from_yaml(yaml).is_ok());
}

#[test]
fn test_invalid_yaml() {
    let err = Config::from_yaml("emit_header: [not, a, bool]").unwrap_err();
    assert!(matches!(err, CgiError::ConfigError(_)));
    assert!(err.to_string().contains("failed to parse config YAML"));
}

#[test]
fn test_validate_empty_messages() {
    let err = Config::from_yaml("page:\n  messages: []\n").unwrap_err();
    assert!(err.to_string().contains("page.messages"));
}

#[test]
fn test_validate_empty_layout() {
    let err = Config::from_yaml("layout: \"\"\n").unwrap_err();
    assert!(err.to_string().contains("layout must not be empty"));
}

#[test]
fn test_validate_content_type_line_break() {
    let mut config = Config::default();
    config.content_type = "text/html\r\nX-Injected: 1".to_string();
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("line breaks"));
}

#[test]
fn test_validate_extra_name() {
    let err = Config::from_yaml("page:\n  extra:\n    \"{{x}}\": y\n").unwrap_err();
    assert!(err.to_string().contains("invalid placeholder name"));

    let err = Config::from_yaml("page:\n  extra:\n    \"has space\": y\n").unwrap_err();
    assert!(err.to_string().contains("invalid placeholder name"));
}

#[test]
fn test_validate_extra_cannot_override_builtin() {
    let err = Config::from_yaml("page:\n  extra:\n    time: never\n").unwrap_err();
    assert!(err.to_string().contains("built-in placeholder 'time'"));
}

#[test]
fn test_yaml_roundtrip_preserves_emoji() {
    let config = Config::default();
    let yaml = config.to_yaml().unwrap();
    let parsed = Config::from_yaml(&yaml).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn test_resolve_without_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::resolve(dir.path(), None).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_resolve_discovers_file_in_server_root() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(CONFIG_FILE_NAME), "charset: true\n").unwrap();

    let config = Config::resolve(dir.path(), None).unwrap();
    assert!(config.charset);
}

#[test]
fn test_resolve_explicit_path_wins() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(CONFIG_FILE_NAME), "charset: true\n").unwrap();
    let explicit = dir.path().join("other.yaml");
    std::fs::write(&explicit, "emit_header: false\n").unwrap();

    let config = Config::resolve(dir.path(), Some(&explicit)).unwrap();
    assert!(!config.emit_header);
    assert!(!config.charset);
}

#[test]
fn test_resolve_explicit_path_missing() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.yaml");

    let err = Config::resolve(dir.path(), Some(&missing)).unwrap_err();
    assert!(matches!(err, CgiError::ConfigError(_)));
    assert!(err.to_string().contains("failed to read config file"));
}
