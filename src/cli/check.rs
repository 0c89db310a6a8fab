use boxline::Config;

fn mask(secret: &str) -> &'static str {
    if secret.is_empty() { "<unset>" } else { "<redacted>" }
}

pub fn print(config: &Config) -> anyhow::Result<()> {
    println!("server       {}:{}", config.server.host, config.server.port);
    println!("site         {}", config.site.name);
    println!(
        "smtp         {}:{} (user {}, password {})",
        config.email.smtp_host,
        config.email.smtp_port,
        mask(&config.email.smtp_username),
        mask(&config.email.smtp_password)
    );
    println!("from         {}", config.email.sender());
    println!("contact      {}", config.email.contact_address);
    println!(
        "stats        {} (ttl {}s)",
        if config.stats.source_url.is_empty() {
            "<fallback only>"
        } else {
            config.stats.source_url.as_str()
        },
        config.stats.cache_ttl_secs
    );
    println!(
        "map          {} offices, {} markets",
        config.map.offices.len(),
        config.map.markets.len()
    );
    println!(
        "logging      {} ({})",
        config.observability.log_level, config.observability.log_format
    );

    Ok(())
}
