mod common;

use std::io::Write;

use peaking_server::{router, ConfigError, ServerConfig};
use tokio::io::{AsyncReadExt, AsyncWriteExt};

#[tokio::test]
async fn test_health_route_answers_ok() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = tokio::spawn(async move {
        axum::serve(listener, router(common::context())).await
    });

    let mut stream = tokio::net::TcpStream::connect(addr).await.unwrap();
    stream
        .write_all(b"GET /health HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
        .await
        .unwrap();
    let mut response = String::new();
    stream.read_to_string(&mut response).await.unwrap();

    assert!(response.starts_with("HTTP/1.1 200"), "{response}");
    assert!(response.ends_with("ok"), "{response}");
    server.abort();
}

#[test]
fn test_config_file_with_peaking_table() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[server]
port = 9001
queue_capacity = 4

[logging]
level = "debug"

[peaking.overlay]
mode = "Replace"
"#
    )
    .unwrap();

    let config = ServerConfig::from_file(file.path()).unwrap();
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 9001);
    assert_eq!(config.server.queue_capacity, 4);
    assert_eq!(config.logging.level, "debug");
    assert_eq!(
        config.peaking.overlay.mode,
        peaking_core::pipeline::OverlayMode::Replace
    );
}

#[test]
fn test_missing_config_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let err = ServerConfig::from_file(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::ReadFile(..)));
}

#[test]
fn test_invalid_config_is_a_parse_error() {
    let err = ServerConfig::from_toml_str("[server]\nport = \"high\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_config_toml_roundtrip() {
    let config = ServerConfig::default();
    let text = config.to_toml_string().unwrap();
    assert_eq!(ServerConfig::from_toml_str(&text).unwrap(), config);
}
