//! Tests for configuration system

use boxline::Config;
use temp_dir::TempDir;

#[test]
fn test_config_loads_from_default_toml() {
    let config = Config::load(None).expect("Failed to load config");

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.email.contact_address, "sales@boxline.localhost");
    assert_eq!(config.stats.cache_ttl_secs, 3600);
    assert_eq!(config.map.offices.len(), 3);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_loads_from_path() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("boxline.toml");
    std::fs::write(
        &path,
        r#"
[server]
host = "0.0.0.0"
port = 8080

[email]
smtp_host = "smtp.example.com"
smtp_username = "relay@example.com"
contact_address = "ops@example.com"

[stats]
cache_ttl_secs = 60
"#,
    )?;

    let config = Config::load(Some(path.to_string_lossy().into_owned()))?;

    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.email.smtp_port, 587);
    assert_eq!(config.email.sender(), "relay@example.com");
    assert_eq!(config.stats.cache_ttl_secs, 60);
    assert_eq!(config.site.name, "Boxline Packaging");
    // No [map] section: built-in locations
    assert_eq!(config.map.offices.len(), 4);
    assert!(config.validate().is_ok());

    Ok(())
}

#[test]
fn test_config_missing_file_uses_defaults() -> anyhow::Result<()> {
    let config = Config::load(Some("does/not/exist.toml".to_owned()))?;

    assert_eq!(config.server.port, 3000);
    // No operator inbox configured
    assert!(config.validate().is_err());

    Ok(())
}
