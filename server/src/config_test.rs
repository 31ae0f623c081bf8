use super::*;
use std::collections::HashMap;

fn config_from(pairs: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    ServerConfig::from_lookup(|var| vars.get(var).cloned())
}

#[test]
fn defaults_when_nothing_is_set() {
    let cfg = config_from(&[]).unwrap();
    assert_eq!(cfg, ServerConfig::default());
    assert_eq!(cfg.bind_addr().to_string(), "0.0.0.0:5001");
}

#[test]
fn overrides_are_applied() {
    let cfg = config_from(&[
        ("HOST", "127.0.0.1"),
        ("PORT", "8080"),
        ("MODEL_PATH", "/srv/model.yaml"),
        ("STATIC_DIR", "/srv/static"),
    ])
    .unwrap();
    assert_eq!(cfg.bind_addr().to_string(), "127.0.0.1:8080");
    assert_eq!(cfg.model_path, PathBuf::from("/srv/model.yaml"));
    assert_eq!(cfg.static_dir, PathBuf::from("/srv/static"));
}

#[test]
fn bad_port_is_rejected() {
    let err = config_from(&[("PORT", "not-a-port")]).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "PORT", .. }));
    assert_eq!(err.to_string(), r#"invalid PORT: "not-a-port""#);
}

#[test]
fn bad_host_is_rejected() {
    assert!(matches!(config_from(&[("HOST", "localhost:80")]), Err(ConfigError::Invalid { var: "HOST", .. })));
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = config_from(&[("PORT", "  "), ("MODEL_PATH", "")]).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.model_path, PathBuf::from(DEFAULT_MODEL_PATH));
}
