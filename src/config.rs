use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use dirs;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub theme: ThemeConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    pub background_color: String,
    pub text_color: String,
    pub accent_color: String,
    pub operator_color: String,
    pub font_size: i32,
    pub width: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub group_thousands: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: ThemeConfig {
                background_color: "#0a0a0a".to_string(), // Almost black
                text_color: "#e0e0e0".to_string(), // Slightly softer white
                accent_color: "#4a9eff".to_string(), // Bright blue accent
                operator_color: "#ff9f43".to_string(), // Orange operator keys
                font_size: 18,
                width: 340,
            },
            display: DisplayConfig {
                group_thousands: true,
            },
        }
    }
}

impl Config {
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("keypad_calculator")
            .join("config.toml")
    }

    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        let path = Self::config_path();

        if !path.exists() {
            let default = Config::default();
            default.save()?;
            return Ok(default);
        }

        let contents = fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let path = Self::config_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string(self)?;
        fs::write(&path, contents)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_round_trips_through_toml() {
        let default = Config::default();
        let serialized = toml::to_string(&default).unwrap();
        let parsed: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.theme.background_color, default.theme.background_color);
        assert_eq!(parsed.theme.font_size, default.theme.font_size);
        assert!(parsed.display.group_thousands);
    }
}
