use dnsfault_domain::config::{CliOverrides, Config, ConfigError};
use dnsfault_domain::{IcmpErrorKind, ResponseMode};
use std::io::Write;

#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.server.bind_address, "0.0.0.0");
    assert_eq!(config.server.dns_port, 5354);
    assert_eq!(config.server.recv_buffer_size, 1024);
    assert_eq!(config.simulator.mode, "SERVFAIL");
    assert_eq!(config.simulator.icmp_kind(), IcmpErrorKind::default());
    assert_eq!(config.logging.level, "info");
    assert!(!config.logging.json);
    assert!(config.validate().is_ok());
}

#[test]
fn test_load_from_file_with_partial_sections() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
        [server]
        dns_port = 5300

        [simulator]
        mode = "ICMP_ERROR"
        icmp_code = 3
        "#
    )
    .unwrap();

    let path = file.path().to_str().unwrap();
    let config = Config::load(Some(path), CliOverrides::default()).unwrap();

    assert_eq!(config.server.dns_port, 5300);
    assert_eq!(config.server.bind_address, "0.0.0.0");
    assert_eq!(config.simulator.parsed_mode(), Some(ResponseMode::NetworkUnreachable));
    assert_eq!(config.simulator.icmp_type, 3);
    assert_eq!(config.simulator.icmp_code, 3);
}

#[test]
fn test_cli_overrides_win() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[simulator]\nmode = \"NOERROR\"\n").unwrap();

    let overrides = CliOverrides {
        mode: Some("FORMERR".to_string()),
        bind_address: Some("127.0.0.1".to_string()),
        dns_port: Some(5399),
        icmp_type: None,
        icmp_code: Some(10),
        log_level: Some("debug".to_string()),
    };
    let config = Config::load(Some(file.path().to_str().unwrap()), overrides).unwrap();

    assert_eq!(config.simulator.parsed_mode(), Some(ResponseMode::FormatError));
    assert_eq!(config.server.listen_addr(), "127.0.0.1:5399");
    assert_eq!(config.simulator.icmp_kind(), IcmpErrorKind::new(3, 10));
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn test_unknown_mode_passes_validation() {
    let overrides = CliOverrides {
        mode: Some("BOGUS".to_string()),
        ..Default::default()
    };
    let mut config = Config::default();
    config.apply_cli_overrides(overrides);
    assert!(config.validate().is_ok());
    assert_eq!(config.simulator.parsed_mode(), None);
}

#[test]
fn test_missing_explicit_file_is_read_error() {
    let result = Config::load(Some("/nonexistent/dnsfault.toml"), CliOverrides::default());
    assert!(matches!(result, Err(ConfigError::FileRead(_, _))));
}

#[test]
fn test_validate_rejects_port_zero() {
    let mut config = Config::default();
    config.server.dns_port = 0;
    assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
}

#[test]
fn test_validate_rejects_tiny_recv_buffer() {
    let mut config = Config::default();
    config.server.recv_buffer_size = 8;
    assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[server\ndns_port = ").unwrap();
    let result = Config::load(Some(file.path().to_str().unwrap()), CliOverrides::default());
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_save_and_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dnsfault.toml");
    let path = path.to_str().unwrap();

    let mut config = Config::default();
    config.simulator.mode = "NOTIMPL".to_string();
    config.save(path).unwrap();

    let reloaded = Config::load(Some(path), CliOverrides::default()).unwrap();
    assert_eq!(reloaded.simulator.parsed_mode(), Some(ResponseMode::NotImplemented));
}

#[test]
fn test_listen_addr_brackets_ipv6() {
    let mut config = Config::default();
    config.server.bind_address = "::1".to_string();
    assert_eq!(config.server.listen_addr(), "[::1]:5354");
}


#[test]
fn test_validate_icmp_mode_needs_room_for_quoted_datagram() {
    let mut config = Config::default();
    config.simulator.mode = "ICMP_ERROR".to_string();
    config.server.recv_buffer_size = 27;
    assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));

    config.server.recv_buffer_size = 28;
    assert!(config.validate().is_ok());
}

#[test]
fn test_validate_dns_mode_accepts_small_recv_buffer() {
    let mut config = Config::default();
    config.simulator.mode = "SERVFAIL".to_string();
    config.server.recv_buffer_size = 20;
    assert!(config.validate().is_ok());
}
