// ============================================================================
// Classement par capitalisation
// ============================================================================
// rank = position (base 1) d'un coin quand la liste complète de la catégorie
// est triée par market cap décroissante
//
// Le classement est toujours calculé sur la liste non filtrée : le numéro
// d'un coin ne change pas quand la recherche réduit les résultats.
// ============================================================================

use std::collections::HashMap;

use crate::models::CoinRecord;

/// Map id -> rang (1 = plus grosse capitalisation)
pub type RankMap = HashMap<String, usize>;

/// Calcule le rang de chaque coin par capitalisation décroissante
///
/// CONCEPT RUST : Tri stable
/// - sort_by() est stable : deux coins de même capitalisation gardent
///   leur ordre d'insertion
/// - On trie une liste de références (copie défensive, l'entrée n'est pas modifiée)
///
/// CONCEPT RUST : f64::total_cmp
/// - f64 n'implémente pas Ord (à cause de NaN)
/// - total_cmp() donne un ordre total, utilisable dans sort_by()
pub fn rank_by_market_cap(coins: &[CoinRecord]) -> RankMap {
    let mut by_cap: Vec<&CoinRecord> = coins.iter().collect();
    by_cap.sort_by(|a, b| b.market_cap.total_cmp(&a.market_cap));

    by_cap
        .into_iter()
        .enumerate()
        .map(|(index, coin)| (coin.id.clone(), index + 1))
        .collect()
}

// ============================================================================
// Tests unitaires
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_is_bijection() {
        let coins = vec![
            CoinRecord::new("b", "B", "B", 1.0, 50.0),
            CoinRecord::new("a", "A", "A", 1.0, 900.0),
            CoinRecord::new("c", "C", "C", 1.0, 10.0),
            CoinRecord::new("d", "D", "D", 1.0, 400.0),
        ];

        let ranks = rank_by_market_cap(&coins);
        assert_eq!(ranks.len(), 4);
        assert_eq!(ranks["a"], 1);
        assert_eq!(ranks["d"], 2);
        assert_eq!(ranks["b"], 3);
        assert_eq!(ranks["c"], 4);

        let mut values: Vec<usize> = ranks.values().copied().collect();
        values.sort_unstable();
        assert_eq!(values, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_rank_ties_keep_insertion_order() {
        let coins = vec![
            CoinRecord::new("first", "First", "F", 1.0, 100.0),
            CoinRecord::new("big", "Big", "B", 1.0, 500.0),
            CoinRecord::new("second", "Second", "S", 1.0, 100.0),
        ];

        let ranks = rank_by_market_cap(&coins);
        assert_eq!(ranks["big"], 1);
        assert_eq!(ranks["first"], 2);
        assert_eq!(ranks["second"], 3);
    }

    #[test]
    fn test_rank_empty() {
        assert!(rank_by_market_cap(&[]).is_empty());
    }
}
