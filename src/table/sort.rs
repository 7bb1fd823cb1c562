// ============================================================================
// Tri par colonne
// ============================================================================
// SortSpec = Option<ColumnSort>
// - None : pas de tri explicite, l'ordre de l'onglet s'applique
// - Some(ColumnSort) : l'utilisateur a cliqué sur un en-tête, prioritaire
//
// CONCEPTS RUST :
// 1. Enum sans données pour les clés de tri (exhaustivité vérifiée)
// 2. std::cmp::Ordering : résultat d'une comparaison (Less, Equal, Greater)
// 3. Closures passées à sort_by()
// ============================================================================

use std::cmp::Ordering;

use crate::models::CoinRecord;
use crate::table::RankMap;

/// Colonne du tableau utilisable comme clé de tri
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Colonne "#" : rang par capitalisation
    Rank,
    /// Colonne "Coin" : nom en minuscules
    Coin,
    Price,
    Change1h,
    Change24h,
    Change7d,
    Volume,
    MarketCap,
}

impl SortKey {
    /// Toutes les colonnes, dans l'ordre d'affichage
    pub const ALL: [SortKey; 8] = [
        SortKey::Rank,
        SortKey::Coin,
        SortKey::Price,
        SortKey::Change1h,
        SortKey::Change24h,
        SortKey::Change7d,
        SortKey::Volume,
        SortKey::MarketCap,
    ];

    /// Parse un nom de colonne ("#", "coin", "price", "change24h", "marketCap", ...)
    ///
    /// Retourne None pour une colonne inconnue : le tri est alors ignoré.
    pub fn from_name(name: &str) -> Option<SortKey> {
        match name {
            "#" => Some(SortKey::Rank),
            "coin" => Some(SortKey::Coin),
            "price" => Some(SortKey::Price),
            "change1h" => Some(SortKey::Change1h),
            "change24h" => Some(SortKey::Change24h),
            "change7d" => Some(SortKey::Change7d),
            "volume" => Some(SortKey::Volume),
            "marketCap" => Some(SortKey::MarketCap),
            _ => None,
        }
    }

    /// Nom de la colonne (inverse de from_name)
    pub fn name(&self) -> &'static str {
        match self {
            SortKey::Rank => "#",
            SortKey::Coin => "coin",
            SortKey::Price => "price",
            SortKey::Change1h => "change1h",
            SortKey::Change24h => "change24h",
            SortKey::Change7d => "change7d",
            SortKey::Volume => "volume",
            SortKey::MarketCap => "marketCap",
        }
    }

    /// Titre affiché dans l'en-tête
    pub fn header(&self) -> &'static str {
        match self {
            SortKey::Rank => "#",
            SortKey::Coin => "Coin",
            SortKey::Price => "Price",
            SortKey::Change1h => "1h %",
            SortKey::Change24h => "24h %",
            SortKey::Change7d => "7d %",
            SortKey::Volume => "24h Volume",
            SortKey::MarketCap => "Market Cap",
        }
    }

    /// Valeur numérique de la colonne (None pour Rank et Coin)
    fn numeric_value(&self, coin: &CoinRecord) -> Option<f64> {
        match self {
            SortKey::Price => Some(coin.price),
            SortKey::Change1h => Some(coin.change_1h),
            SortKey::Change24h => Some(coin.change_24h),
            SortKey::Change7d => Some(coin.change_7d),
            SortKey::Volume => Some(coin.volume),
            SortKey::MarketCap => Some(coin.market_cap),
            SortKey::Rank | SortKey::Coin => None,
        }
    }
}

/// Sens du tri
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    /// Parse "asc" / "desc" (tout le reste donne Desc, la valeur par défaut)
    pub fn from_name(name: &str) -> SortDirection {
        if name.eq_ignore_ascii_case("asc") {
            SortDirection::Asc
        } else {
            SortDirection::Desc
        }
    }

    /// Inverse le sens
    pub fn flip(&self) -> SortDirection {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    /// Flèche affichée à côté de l'en-tête trié
    pub fn arrow(&self) -> &'static str {
        match self {
            SortDirection::Asc => "↑",
            SortDirection::Desc => "↓",
        }
    }
}

/// Tri explicite choisi par l'utilisateur
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSort {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl ColumnSort {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Construit un tri depuis des noms ("marketCap", "asc")
    ///
    /// Une colonne inconnue donne None : l'ordre reste inchangé.
    pub fn from_names(key: &str, direction: &str) -> SortSpec {
        SortKey::from_name(key).map(|key| Self::new(key, SortDirection::from_name(direction)))
    }
}

/// Tri courant du tableau (None = ordre de l'onglet)
pub type SortSpec = Option<ColumnSort>;

/// Calcule le nouveau tri après un clic sur un en-tête
///
/// - Même colonne : le sens s'inverse (desc -> asc -> desc)
/// - Nouvelle colonne : desc sur cette colonne
pub fn toggle_sort(current: SortSpec, key: SortKey) -> SortSpec {
    let direction = match current {
        Some(sort) if sort.key == key => sort.direction.flip(),
        _ => SortDirection::Desc,
    };
    Some(ColumnSort::new(key, direction))
}

/// Compare deux coins selon une colonne, en ordre croissant
///
/// Pour Rank, l'ordre "croissant" est celui des capitalisations : le rang
/// le plus élevé (plus petite capitalisation) vient en premier. En Desc,
/// le rang 1 est donc en tête, comme pour MarketCap.
fn compare_ascending(key: SortKey, a: &CoinRecord, b: &CoinRecord, ranks: &RankMap) -> Ordering {
    match key {
        SortKey::Rank => match (ranks.get(&a.id), ranks.get(&b.id)) {
            (Some(rank_a), Some(rank_b)) => rank_b.cmp(rank_a),
            _ => Ordering::Equal,
        },
        SortKey::Coin => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        _ => match (key.numeric_value(a), key.numeric_value(b)) {
            (Some(x), Some(y)) => x.total_cmp(&y),
            _ => Ordering::Equal,
        },
    }
}

/// Applique le tri explicite (stable)
///
/// - None : liste inchangée
/// - Les égalités gardent l'ordre d'entrée (donc l'ordre de l'onglet)
pub fn apply_sort(mut coins: Vec<CoinRecord>, spec: SortSpec, ranks: &RankMap) -> Vec<CoinRecord> {
    let Some(sort) = spec else {
        return coins;
    };

    coins.sort_by(|a, b| {
        let ordering = compare_ascending(sort.key, a, b, ranks);
        match sort.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
    coins
}

// ============================================================================
// Tests unitaires
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::rank_by_market_cap;

    fn coins() -> Vec<CoinRecord> {
        vec![
            CoinRecord::new("solana", "Solana", "SOL", 120.0, 5.4e10).with_volume(2.1e9),
            CoinRecord::new("bitcoin", "Bitcoin", "BTC", 67000.0, 1.3e12).with_volume(3.8e10),
            CoinRecord::new("cardano", "cardano", "ADA", 0.45, 2.3e10).with_volume(4.0e8),
        ]
    }

    fn ids(coins: &[CoinRecord]) -> Vec<&str> {
        coins.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn test_default_direction_is_desc() {
        assert_eq!(SortDirection::default(), SortDirection::Desc);
    }

    #[test]
    fn test_toggle_sort() {
        let initial = Some(ColumnSort::new(SortKey::MarketCap, SortDirection::Desc));

        let same = toggle_sort(initial, SortKey::MarketCap);
        assert_eq!(same, Some(ColumnSort::new(SortKey::MarketCap, SortDirection::Asc)));

        let back = toggle_sort(same, SortKey::MarketCap);
        assert_eq!(back, Some(ColumnSort::new(SortKey::MarketCap, SortDirection::Desc)));

        let other = toggle_sort(same, SortKey::Price);
        assert_eq!(other, Some(ColumnSort::new(SortKey::Price, SortDirection::Desc)));

        let from_none = toggle_sort(None, SortKey::Volume);
        assert_eq!(from_none, Some(ColumnSort::new(SortKey::Volume, SortDirection::Desc)));
    }

    #[test]
    fn test_numeric_sort_reverses() {
        let ranks = rank_by_market_cap(&coins());
        let desc = apply_sort(coins(), ColumnSort::from_names("marketCap", "desc"), &ranks);
        let asc = apply_sort(coins(), ColumnSort::from_names("marketCap", "asc"), &ranks);

        assert_eq!(ids(&desc), vec!["bitcoin", "solana", "cardano"]);
        let mut reversed = ids(&desc);
        reversed.reverse();
        assert_eq!(ids(&asc), reversed);
    }

    #[test]
    fn test_coin_sort_is_case_insensitive() {
        let ranks = RankMap::new();
        let asc = apply_sort(coins(), Some(ColumnSort::new(SortKey::Coin, SortDirection::Asc)), &ranks);
        assert_eq!(ids(&asc), vec!["bitcoin", "cardano", "solana"]);
    }

    #[test]
    fn test_rank_sort_desc_puts_rank_one_first() {
        let ranks = rank_by_market_cap(&coins());
        let desc = apply_sort(coins(), Some(ColumnSort::new(SortKey::Rank, SortDirection::Desc)), &ranks);
        assert_eq!(ids(&desc), vec!["bitcoin", "solana", "cardano"]);

        let asc = apply_sort(coins(), Some(ColumnSort::new(SortKey::Rank, SortDirection::Asc)), &ranks);
        assert_eq!(ids(&asc), vec!["cardano", "solana", "bitcoin"]);
    }

    #[test]
    fn test_unknown_key_leaves_order_unchanged() {
        let ranks = rank_by_market_cap(&coins());
        let spec = ColumnSort::from_names("circulatingSupply", "asc");
        assert_eq!(spec, None);
        assert_eq!(apply_sort(coins(), spec, &ranks), coins());
    }

    #[test]
    fn test_missing_rank_treated_as_equal() {
        let ranks = RankMap::new();
        let sorted = apply_sort(coins(), Some(ColumnSort::new(SortKey::Rank, SortDirection::Desc)), &ranks);
        assert_eq!(sorted, coins());
    }

    #[test]
    fn test_sort_key_names_round_trip() {
        for key in SortKey::ALL {
            assert_eq!(SortKey::from_name(key.name()), Some(key));
        }
    }
}
