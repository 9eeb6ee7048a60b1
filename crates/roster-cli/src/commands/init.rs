//! The `roster init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("roster.toml").exists() {
        println!("roster.toml already exists, skipping.");
    } else {
        std::fs::write("roster.toml", SAMPLE_CONFIG)?;
        println!("Created roster.toml");
    }

    println!("\nNext steps:");
    println!("  1. Edit roster.toml to change the pass threshold");
    println!("  2. Run: roster stats");
    println!("  3. Run: roster shell");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# roster configuration

# Minimum score counted as passing (0-100)
pass_threshold = 60

# How long notices stay visible, in milliseconds
notice_ms = 3000

# Load the four sample students when a session starts
seed_on_start = true
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::config::RosterConfig;

    #[test]
    fn sample_config_parses_to_defaults() {
        let config = RosterConfig::from_toml_str(SAMPLE_CONFIG).unwrap();
        assert_eq!(config, RosterConfig::default());
    }
}
