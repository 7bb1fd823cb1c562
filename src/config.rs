// ============================================================================
// Configuration
// ============================================================================
// Fichier JSON optionnel : <config_dir>/coinboard/config.json
//   - Linux : ~/.config/coinboard/config.json
//   - macOS : ~/Library/Application Support/coinboard/config.json
//
// Variables d'environnement (prioritaires sur le fichier) :
//   COINBOARD_CONFIG   : chemin du fichier de config
//   COINBOARD_CATALOG  : chemin d'un catalogue JSON
//   COINBOARD_LOG_DIR  : répertoire des logs
//
// Fichier absent = valeurs par défaut
// ============================================================================

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::models::{Category, Fiat};

/// Nom du répertoire de l'application
const APP_DIR: &str = "coinboard";

pub const ENV_CONFIG: &str = "COINBOARD_CONFIG";
pub const ENV_CATALOG: &str = "COINBOARD_CATALOG";
pub const ENV_LOG_DIR: &str = "COINBOARD_LOG_DIR";

/// Nombre minimum de points pour tracer une courbe
const MIN_CHART_POINTS: usize = 2;

/// Configuration de l'application
///
/// CONCEPT RUST : #[serde(default)] au niveau de la struct
/// - Chaque champ absent du JSON prend la valeur de Config::default()
/// - Un fichier "{}" est donc valide
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Catalogue externe (None = catalogue embarqué)
    pub catalog_path: Option<PathBuf>,

    /// Répertoire des fichiers de log
    pub log_dir: PathBuf,

    /// Devise des montants affichés dans les calculateurs
    pub display_currency: Fiat,

    /// Catégorie affichée au démarrage
    pub default_category: Category,

    /// Nombre de points de la courbe de staking
    pub chart_points: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: None,
            log_dir: default_log_dir(),
            display_currency: Fiat::Usd,
            default_category: Category::All,
            chart_points: 20,
        }
    }
}

impl Config {
    /// Charge la configuration (fichier + variables d'environnement)
    pub fn load() -> Result<Self> {
        let path = std::env::var_os(ENV_CONFIG)
            .map(PathBuf::from)
            .or_else(default_config_path);

        let mut config = match path {
            Some(path) if path.exists() => Self::from_path(&path)?,
            Some(path) => {
                debug!(path = %path.display(), "No config file, using defaults");
                Self::default()
            }
            None => Self::default(),
        };

        config.apply_env(|key| std::env::var_os(key).map(PathBuf::from));
        Ok(config.normalized())
    }

    /// Lit un fichier de configuration JSON
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Impossible de lire la configuration {}", path.display()))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Configuration invalide : {}", path.display()))?;

        info!(path = %path.display(), "Configuration loaded");
        Ok(config.normalized())
    }

    /// Applique les surcharges d'environnement
    ///
    /// CONCEPT : Injection de la source
    /// - `lookup` remplace std::env::var_os dans les tests
    fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<PathBuf>,
    {
        if let Some(catalog) = lookup(ENV_CATALOG) {
            self.catalog_path = Some(catalog);
        }
        if let Some(log_dir) = lookup(ENV_LOG_DIR) {
            self.log_dir = log_dir;
        }
    }

    /// Ramène les valeurs hors limites dans leur domaine
    fn normalized(mut self) -> Self {
        self.chart_points = self.chart_points.max(MIN_CHART_POINTS);
        self
    }
}

/// Chemin par défaut du fichier de configuration
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.json"))
}

/// Répertoire par défaut des logs
///
/// ~/.local/share/coinboard/logs sur Linux, ./logs si introuvable
pub fn default_log_dir() -> PathBuf {
    match dirs::data_local_dir() {
        Some(dir) => dir.join(APP_DIR).join("logs"),
        None => PathBuf::from("logs"),
    }
}

// ============================================================================
// Tests unitaires
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("coinboard-{}-{}", std::process::id(), name));
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.catalog_path, None);
        assert_eq!(config.display_currency, Fiat::Usd);
        assert_eq!(config.default_category, Category::All);
        assert_eq!(config.chart_points, 20);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let path = temp_file("partial.json", r#"{ "display_currency": "EUR", "default_category": "layer-two" }"#);
        let config = Config::from_path(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.display_currency, Fiat::Eur);
        assert_eq!(config.default_category, Category::LayerTwo);
        assert_eq!(config.chart_points, 20);
    }

    #[test]
    fn test_chart_points_clamped() {
        let path = temp_file("clamp.json", r#"{ "chart_points": 0 }"#);
        let config = Config::from_path(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.chart_points, 2);
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let path = temp_file("invalid.json", "{ not json");
        let result = Config::from_path(&path);
        std::fs::remove_file(&path).ok();

        assert!(result.is_err());
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::default();
        config.apply_env(|key| match key {
            ENV_CATALOG => Some(PathBuf::from("/tmp/coins.json")),
            ENV_LOG_DIR => Some(PathBuf::from("/tmp/logs")),
            _ => None,
        });

        assert_eq!(config.catalog_path, Some(PathBuf::from("/tmp/coins.json")));
        assert_eq!(config.log_dir, PathBuf::from("/tmp/logs"));
    }

    #[test]
    fn test_env_without_overrides_keeps_values() {
        let mut config = Config::default();
        let before = config.clone();
        config.apply_env(|_| None);
        assert_eq!(config, before);
    }
}
