use super::*;

#[test]
fn from_values_defaults_when_unset() {
    let cfg = ServerConfig::from_values(None, None).unwrap();
    assert_eq!(cfg, ServerConfig { port: DEFAULT_PORT, assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR) });
}

#[test]
fn from_values_treats_blank_as_unset() {
    let cfg = ServerConfig::from_values(Some("  "), Some("")).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.assets_dir, PathBuf::from(DEFAULT_ASSETS_DIR));
}

#[test]
fn from_values_parses_overrides() {
    let cfg = ServerConfig::from_values(Some("8080"), Some("/srv/deeple/media")).unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.assets_dir, PathBuf::from("/srv/deeple/media"));
}

#[test]
fn from_values_rejects_invalid_port() {
    for raw in ["http", "-1", "70000"] {
        let err = ServerConfig::from_values(Some(raw), None).unwrap_err();
        assert!(matches!(err, ServerConfigError::InvalidPort { ref value, .. } if value == raw));
    }
}

#[test]
fn invalid_port_message_names_the_value() {
    let err = ServerConfig::from_values(Some("http"), None).unwrap_err();
    assert!(err.to_string().starts_with("invalid PORT \"http\""));
}

#[test]
fn from_env_reads_port_and_assets_dir() {
    // Only this test touches PORT and ASSETS_DIR.
    unsafe {
        std::env::set_var("PORT", "4100");
        std::env::set_var("ASSETS_DIR", "media");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.port, 4100);
    assert_eq!(cfg.assets_dir, PathBuf::from("media"));

    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("ASSETS_DIR");
    }
}
