//! Basic strict-mode loading example

use envbind::EnvBind;

#[derive(Debug, Default, EnvBind)]
struct Config {
    // Required field: loading fails when DATABASE_URL is not set
    #[env("DATABASE_URL,required")]
    pub database_url: String,

    // Optional field with a custom variable name
    #[env("HTTP_ADDR")]
    pub server_addr: String,

    // Numeric field
    #[env("MAX_CONNECTIONS")]
    pub max_connections: i64,

    // Boolean field
    #[env("DEBUG_MODE")]
    pub debug_mode: bool,
}

fn main() -> anyhow::Result<()> {
    // Set environment variables for demonstration
    std::env::set_var("DATABASE_URL", "postgres://localhost/mydb");
    std::env::set_var("HTTP_ADDR", "0.0.0.0:3000");
    std::env::set_var("MAX_CONNECTIONS", "10");
    std::env::set_var("DEBUG_MODE", "false");

    // Load configuration in place
    let mut config = Config::default();
    config.load_strict()?;

    println!("Configuration loaded:");
    println!("  Database URL: {}", config.database_url);
    println!("  Server Address: {}", config.server_addr);
    println!("  Max Connections: {}", config.max_connections);
    println!("  Debug Mode: {}", config.debug_mode);

    Ok(())
}
