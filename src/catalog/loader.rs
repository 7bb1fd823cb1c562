// ============================================================================
// Chargement du catalogue
// ============================================================================
// Lit le catalogue depuis un fichier JSON (ou la copie embarquée) et vérifie
// ses invariants avant de le donner aux moteurs
//
// CONCEPTS RUST :
// 1. include_str! : embarque un fichier dans le binaire à la compilation
// 2. Result<T, E> avec anyhow : erreurs avec contexte
// 3. HashSet : détection des identifiants dupliqués
// ============================================================================

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info, instrument, warn};

use crate::catalog::Catalog;

/// Catalogue par défaut, compilé dans le binaire
pub const EMBEDDED_CATALOG: &str = include_str!("../../data/coins.json");

impl Catalog {
    /// Parse et valide un catalogue JSON
    ///
    /// # Erreurs
    /// * JSON invalide
    /// * invariant violé (id dupliqué, valeur négative, pas de catégorie)
    pub fn from_json(json: &str) -> Result<Self> {
        let catalog: Catalog =
            serde_json::from_str(json).context("Échec du parsing JSON du catalogue")?;
        validate(&catalog)?;
        Ok(catalog)
    }

    /// Lit un catalogue depuis un fichier
    #[instrument]
    pub fn from_path(path: &Path) -> Result<Self> {
        debug!("Reading catalog file");
        let json = fs::read_to_string(path)
            .with_context(|| format!("Impossible de lire le catalogue {}", path.display()))?;

        Self::from_json(&json)
            .with_context(|| format!("Catalogue invalide : {}", path.display()))
    }

    /// Catalogue embarqué dans le binaire
    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED_CATALOG).context("Catalogue embarqué invalide")
    }
}

/// Charge le catalogue : fichier si un chemin est fourni, sinon la copie embarquée
///
/// CONCEPT RUST : Option<&Path>
/// - Some(path) : l'utilisateur a configuré un catalogue
/// - None : on utilise les données compilées dans le binaire
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    let catalog = match path {
        Some(path) => {
            info!(path = %path.display(), "Loading catalog from file");
            Catalog::from_path(path)?
        }
        None => {
            info!("Loading embedded catalog");
            Catalog::embedded()?
        }
    };

    if catalog.is_empty() {
        warn!("Catalog contains no coins");
    }

    info!(coins = catalog.len(), updated_at = ?catalog.updated_at, "Catalog loaded");
    Ok(catalog)
}

/// Vérifie les invariants du catalogue
///
/// - `id` unique
/// - `price`, `volume`, `market_cap` finis et >= 0
/// - au moins une catégorie par coin
fn validate(catalog: &Catalog) -> Result<()> {
    let mut seen = HashSet::new();

    for coin in catalog.coins() {
        // CONCEPT RUST : HashSet::insert retourne false si déjà présent
        if !seen.insert(coin.id.as_str()) {
            anyhow::bail!("Identifiant dupliqué dans le catalogue : {}", coin.id);
        }

        let amounts = [
            ("price", coin.price),
            ("volume", coin.volume),
            ("market_cap", coin.market_cap),
        ];
        for (field, value) in amounts {
            if !value.is_finite() || value < 0.0 {
                anyhow::bail!("{} : {} invalide ({})", coin.id, field, value);
            }
        }

        if coin.categories.is_empty() {
            anyhow::bail!("{} : aucune catégorie", coin.id);
        }
    }

    Ok(())
}

// ============================================================================
// Tests unitaires
// ============================================================================
