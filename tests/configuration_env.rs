//! Environment overrides live in their own test binary: the process
//! environment is shared by every test in a binary.

use boxline::Config;

#[test]
fn test_environment_overrides_file() {
    unsafe {
        std::env::set_var("BOXLINE__SERVER__PORT", "4100");
        std::env::set_var("BOXLINE__STATS__CACHE_TTL_SECS", "120");
        std::env::set_var("SMTP_USERNAME", "relay@boxline.test");
        std::env::set_var("SMTP_PASSWORD", "secret");
        std::env::set_var("CONTACT_EMAIL", "ops@boxline.test");
    }

    let config = Config::load(None).expect("Failed to load config");

    assert_eq!(config.server.port, 4100);
    assert_eq!(config.stats.cache_ttl_secs, 120);
    assert_eq!(config.email.smtp_username, "relay@boxline.test");
    assert_eq!(config.email.smtp_password, "secret");
    assert!(config.email.has_credentials());
    assert_eq!(config.email.contact_address, "ops@boxline.test");
    // From the file, untouched by the environment
    assert_eq!(config.email.smtp_host, "localhost");
}
