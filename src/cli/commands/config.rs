//! Config command handler

use crate::args::ConfigSubcommand;
use credit_manager::config::Config;
use credit_manager::error;
use std::io::{self, BufRead, Write};

/// Dispatch config subcommands, exiting with status 1 on failure
pub fn run(subcommand: Option<ConfigSubcommand>, config: &mut Config, defaults: &Config) {
    let result = match subcommand {
        None => get(config, None),
        Some(ConfigSubcommand::Get { key }) => get(config, key.as_deref()),
        Some(ConfigSubcommand::Set { key, value }) => set(config, &key, &value),
        Some(ConfigSubcommand::Unset { key }) => unset(config, defaults, &key),
        Some(ConfigSubcommand::Reset) => reset(&mut io::stdin().lock()),
    };

    if let Err(e) = result {
        error!("config command failed: {e}");
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn get(config: &Config, key: Option<&str>) -> Result<(), String> {
    match key {
        Some(k) => {
            let value = config
                .get(k)
                .ok_or_else(|| format!("Unknown config key: '{k}'"))?;
            println!("{value}");
        }
        None => {
            println!("\n=== Configuration ===\n");
            print!("{config}");
        }
    }
    Ok(())
}

fn set(config: &mut Config, key: &str, value: &str) -> Result<(), String> {
    config.set(key, value)?;
    config
        .save()
        .map_err(|e| format!("Failed to save config: {e}"))?;
    println!("✓ Set {key} = {value}");
    Ok(())
}

fn unset(config: &mut Config, defaults: &Config, key: &str) -> Result<(), String> {
    config.unset(key, defaults)?;
    config
        .save()
        .map_err(|e| format!("Failed to save config: {e}"))?;
    println!("✓ Reset {key} to default");
    Ok(())
}

fn reset(input: &mut impl BufRead) -> Result<(), String> {
    if !Config::get_config_file_path().exists() {
        println!("✓ Config is already at defaults");
        return Ok(());
    }

    print!("Are you sure you want to reset config to defaults? (y/n): ");
    io::stdout().flush().ok();

    if confirmed(input) {
        Config::reset().map_err(|e| format!("Failed to remove config file: {e}"))?;
        println!("✓ Config reset to defaults");
    } else {
        println!("✗ Reset cancelled");
    }
    Ok(())
}

/// Read one answer line; only `y` / `yes` (any case) confirm
fn confirmed(input: &mut impl BufRead) -> bool {
    let mut response = String::new();
    if input.read_line(&mut response).is_err() {
        return false;
    }
    let answer = response.trim();
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirmation_answers() {
        assert!(confirmed(&mut "y\n".as_bytes()));
        assert!(confirmed(&mut "YES\n".as_bytes()));
        assert!(!confirmed(&mut "n\n".as_bytes()));
        assert!(!confirmed(&mut "yep\n".as_bytes()));
        assert!(!confirmed(&mut "".as_bytes()));
    }

    #[test]
    fn test_get_unknown_key_fails() {
        let config = Config::from_defaults();
        assert!(get(&config, Some("token")).is_err());
        assert!(get(&config, Some("level")).is_ok());
    }
}
