use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

use crate::models::settings::Settings;

const SETTINGS_FILE_NAME: &str = "settings.toml";

/// Reads and writes `settings.toml`.
pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Settings file in the platform config directory.
    pub fn default_path() -> PathBuf {
        if let Some(dirs) = ProjectDirs::from("com", "HolidayCountdown", "HolidayCountdown") {
            dirs.config_dir().join(SETTINGS_FILE_NAME)
        } else {
            log::warn!("Unable to resolve project directory; using current dir for settings");
            PathBuf::from(SETTINGS_FILE_NAME)
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the current settings; a missing file yields the defaults.
    pub fn get(&self) -> Result<Settings> {
        if !self.path.exists() {
            return Ok(Settings::default());
        }

        let data = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read settings from {}", self.path.display()))?;
        let mut settings: Settings = toml::from_str(&data)
            .with_context(|| format!("failed to parse settings from {}", self.path.display()))?;

        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings in {}: {}", self.path.display(), e))?;
        settings.normalize_codes();

        Ok(settings)
    }

    /// Update settings
    pub fn update(&self, settings: &Settings) -> Result<()> {
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create dir {}", parent.display()))?;
        }

        let data = toml::to_string_pretty(settings).context("failed to serialize settings")?;
        fs::write(&self.path, data)
            .with_context(|| format!("failed to write settings to {}", self.path.display()))?;
        Ok(())
    }

    /// Load settings for start-up, writing the defaults on first run.
    ///
    /// Never fails: problems are logged and the defaults are used.
    pub fn load_or_initialize(&self) -> Settings {
        if !self.path.exists() {
            let defaults = Settings::default();
            match self.update(&defaults) {
                Ok(()) => log::info!("Wrote default settings to {}", self.path.display()),
                Err(e) => log::warn!("Failed to write default settings: {:#}", e),
            }
            return defaults;
        }

        match self.get() {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Failed to load settings: {:#}, using defaults", e);
                Settings::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::settings::DisplayLocale;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn service_in(dir: &TempDir) -> SettingsService {
        SettingsService::new(dir.path().join("nested").join(SETTINGS_FILE_NAME))
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let service = service_in(&dir);

        assert_eq!(service.get().unwrap(), Settings::default());
        assert!(!service.path().exists());
    }

    #[test]
    fn test_update_then_get() {
        let dir = TempDir::new().unwrap();
        let service = service_in(&dir);

        let mut settings = Settings::default();
        settings.default_country = "SK".to_string();
        settings.locale = DisplayLocale::English;
        service.update(&settings).unwrap();

        assert_eq!(service.get().unwrap(), settings);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let service = service_in(&dir);
        fs::create_dir_all(service.path().parent().unwrap()).unwrap();
        fs::write(service.path(), "default_country = \"de\"\nlocale = \"english\"\n").unwrap();

        let settings = service.get().unwrap();
        assert_eq!(settings.default_country, "DE");
        assert_eq!(settings.locale, DisplayLocale::English);
        assert_eq!(settings.countries, Settings::default().countries);
    }

    #[test]
    fn test_update_rejects_invalid_settings() {
        let dir = TempDir::new().unwrap();
        let service = service_in(&dir);

        let settings = Settings {
            default_country: "Czechia".to_string(),
            ..Settings::default()
        };
        assert!(service.update(&settings).is_err());
        assert!(!service.path().exists());
    }

    #[test]
    fn test_load_or_initialize_writes_defaults_once() {
        let dir = TempDir::new().unwrap();
        let service = service_in(&dir);

        assert_eq!(service.load_or_initialize(), Settings::default());
        assert!(service.path().exists());
    }

    #[test]
    fn test_load_or_initialize_falls_back_on_garbage() {
        let dir = TempDir::new().unwrap();
        let service = service_in(&dir);
        fs::create_dir_all(service.path().parent().unwrap()).unwrap();
        fs::write(service.path(), "this is = = not toml").unwrap();

        assert_eq!(service.load_or_initialize(), Settings::default());
    }
}
