//! Lazy-mode loading example
//!
//! Lazy loading processes every field, deriving a variable name from the
//! field identifier when no annotation is present.

use envbind::{to_upper_snake_case, EnvBind};

#[derive(Debug, Default, EnvBind)]
struct Config {
    // No annotation: read from LISTEN_ADDR in lazy mode
    pub listen_addr: String,

    // Explicit annotations still win over derived names
    #[env("PG_URL")]
    pub database_url: String,

    // Computed at runtime, never read from the environment
    #[env("-")]
    pub cache_dir: String,
}

fn main() -> anyhow::Result<()> {
    // Set environment variables for demonstration
    std::env::set_var("LISTEN_ADDR", "0.0.0.0:8080");
    std::env::set_var("PG_URL", "postgres://localhost/mydb");
    std::env::set_var("CACHE_DIR", "ignored either way");

    let mut config = Config::default();
    config.load_lazy()?;

    println!("Configuration loaded lazily:");
    println!("  Listen Address: {}", config.listen_addr);
    println!("  Database URL: {}", config.database_url);
    println!("  Cache Dir: {:?}", config.cache_dir);

    // The name derivation is available standalone
    println!(
        "  \"listen_addr\" reads from {}",
        to_upper_snake_case("listen_addr")
    );

    Ok(())
}
