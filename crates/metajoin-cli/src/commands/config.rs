//! Config command - print the effective configuration.

use std::path::PathBuf;

pub fn run(config: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let config = super::load_config(config.as_deref())?;
    config.validate()?;
    print!("{}", config.to_toml()?);
    Ok(())
}
