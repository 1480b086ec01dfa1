#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use randstatus_server::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
server:
  host: "0.0.0.0"
  prot: 8080 # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code().as_str(), "INVALID_CONFIG");
}

#[test]
fn ok_minimal_config() {
    let cfg = config::load_from_str("version: 1\n").expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.server.host, "0.0.0.0");
    assert_eq!(cfg.server.port, 8080);
}

#[test]
fn overrides_host_and_port() {
    let ok = r#"
version: 1
server:
  host: "127.0.0.1"
  port: 9090
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.server.addr(), "127.0.0.1:9090");
}

#[test]
fn rejects_unknown_version() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert_eq!(err.code().as_str(), "UNSUPPORTED_VERSION");
}

#[test]
fn rejects_empty_host() {
    let bad = r#"
version: 1
server:
  host: "  "
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code().as_str(), "INVALID_CONFIG");
}

#[test]
fn missing_file_is_invalid_config() {
    let err = config::load_from_file("/nonexistent/randstatus.yaml").expect_err("must fail");
    assert_eq!(err.code().as_str(), "INVALID_CONFIG");
}

#[test]
fn defaults_bind_all_interfaces_on_8080() {
    let cfg = config::ServerConfig::default();
    assert_eq!(cfg.server.addr(), "0.0.0.0:8080");
    cfg.validate().expect("defaults are valid");
}
