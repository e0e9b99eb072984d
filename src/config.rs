use anyhow::{Context, Result};
use mealcal_core::MealEntry;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct Config {
    /// Ordered meal rotation; day 1 of the month takes the first entry
    #[serde(default)]
    pub meals: Vec<MealEntry>,
}

/// Get the default config file path (~/.config/mealcal/config.toml)
pub fn config_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .context("Could not determine config directory")?
        .join("mealcal");
    Ok(config_dir.join("config.toml"))
}

/// Load config from the given path, falling back to the default location.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => config_path()?,
    };

    if !path.exists() {
        anyhow::bail!(
            "Config file not found at {}\n\n\
            Create it with your meal rotation:\n\n\
            [[meals]]\n\
            breakfast = \"Poha\"\n\
            dinner = \"Dal Tadka with Rice\"\n\n\
            [[meals]]\n\
            breakfast = \"Aloo Paratha\"\n\
            dinner = \"Palak Paneer with Roti\"\n\n\
            Then run `mealcal` again.",
            path.display()
        );
    }

    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file at {}", path.display()))?;

    let config: Config = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file at {}", path.display()))?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_meals_array() {
        let config: Config = toml::from_str(
            r#"
            [[meals]]
            breakfast = "Poha"
            dinner = "Dal Tadka"

            [[meals]]
            breakfast = "Upma"
            dinner = "Chole"
            "#,
        )
        .unwrap();

        assert_eq!(config.meals.len(), 2);
        assert_eq!(config.meals[0].breakfast, "Poha");
        assert_eq!(config.meals[1].dinner, "Chole");
    }

    #[test]
    fn test_missing_meals_key_parses_as_empty() {
        // The grid builder rejects the empty rotation later with a
        // descriptive error, so parsing stays lenient here
        let config: Config = toml::from_str("").unwrap();
        assert!(config.meals.is_empty());
    }
}
