// ============================================================================
// Parsing tolérant des saisies
// ============================================================================
// Les champs des formulaires sont du texte libre. Une saisie vide ou
// invalide ne doit jamais faire échouer un calcul.
// ============================================================================

/// Parse un champ numérique
///
/// - Espaces ignorés autour de la valeur
/// - Séparateurs de milliers ',' et '_' ignorés ("1,000.50" -> 1000.5)
/// - Vide, non numérique, NaN ou infini -> None
///
/// CONCEPT RUST : Option chaining
/// - .parse().ok() : Result -> Option
/// - .filter() : garde la valeur seulement si la condition est vraie
pub fn parse_input(text: &str) -> Option<f64> {
    let cleaned: String = text
        .trim()
        .chars()
        .filter(|c| *c != ',' && *c != '_')
        .collect();

    if cleaned.is_empty() {
        return None;
    }

    cleaned.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Parse un champ numérique, 0 si vide ou invalide
pub fn parse_or_zero(text: &str) -> f64 {
    parse_input(text).unwrap_or(0.0)
}

// ============================================================================
// Tests unitaires
// ============================================================================
