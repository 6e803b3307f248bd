//! CLI command implementations.

use std::io::{self, Read};
use std::path::{Path, PathBuf};

use cronb::config::resolve_config_path;
use cronb::{Config, Error, FieldSet, Result};
use serde_json::{Map, Value};

/// Resolve the config file and apply --five/--six overrides.
pub fn load_config(path: Option<&Path>, five: bool, six: bool) -> Result<(Config, Option<PathBuf>)> {
    let path = path.map(Path::to_path_buf).or_else(resolve_config_path);
    let mut config = match &path {
        Some(p) => Config::load_from(p)?,
        None => Config::default(),
    };

    if five {
        config.fields = FieldSet::Standard;
    } else if six {
        config.fields = FieldSet::WithYear;
    }

    Ok((config, path))
}

/// Split a FIELD=VALUE argument.
fn split_assignment(arg: &str) -> Result<(&str, &str)> {
    arg.split_once('=')
        .ok_or_else(|| Error::Config(format!("Expected FIELD=VALUE, got \"{}\"", arg)))
}

pub fn build(config: &Config, expr: &str, set: &[String], add: &[String], remove: &[String]) -> Result<()> {
    let mut cron = config.parse(expr)?;

    for arg in set {
        let (field, values) = split_assignment(arg)?;
        let values: Vec<&str> = values.split(',').filter(|v| !v.is_empty()).collect();
        cron.set(field, values)?;
    }

    for arg in add {
        let (field, value) = split_assignment(arg)?;
        cron.add_value(field, value)?;
    }

    for arg in remove {
        let (field, value) = split_assignment(arg)?;
        cron.remove_value(field, value)?;
    }

    println!("{}", cron.build());
    Ok(())
}

pub fn validate(config: &Config, expr: &str) -> Result<()> {
    cronb::validate_expression_str(config.fields, expr)?;
    println!("valid");
    Ok(())
}

pub fn get(config: &Config, expr: &str, field: &str) -> Result<()> {
    let cron = config.parse(expr)?;
    println!("{}", cron.get(field)?);
    Ok(())
}

pub fn dump(config: &Config, expr: &str) -> Result<()> {
    let cron = config.parse(expr)?;
    println!("{}", serde_json::to_string_pretty(cron.expression())?);
    Ok(())
}

pub fn load(config: &Config, file: Option<&Path>) -> Result<()> {
    let contents = match file {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let map: Map<String, Value> = serde_json::from_str(&contents)?;
    let mut cron = config.builder();
    cron.set_all_json(&map)?;

    println!("{}", cron.build());
    Ok(())
}

pub fn show_config(config: &Config, path: Option<&Path>, init: bool) -> Result<()> {
    if init {
        let path = path.ok_or_else(|| {
            Error::Config("Could not determine a config path; pass --config".to_string())
        })?;
        config.save_to(path)?;
        eprintln!("Wrote {}", path.display());
    }

    if let Some(path) = path {
        println!("# {}", path.display());
    }
    let contents = toml::to_string_pretty(config)
        .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
    print!("{}", contents);
    Ok(())
}
