// ============================================================================
// Formatage des nombres
// ============================================================================
// Helpers d'affichage partagés par le tableau et les calculateurs
//
// CONCEPT RUST : format! avec précision dynamique
// - {:.2}  : 2 décimales
// - {:.*}  : précision passée en argument
// - {:+.2} : signe toujours affiché
// ============================================================================

use crate::models::Fiat;

/// Seuil sous lequel un prix est affiché avec 8 décimales
const SMALL_VALUE: f64 = 0.01;

/// Formate un prix ou un montant
///
/// - |x| < 0.01 : 8 décimales (ex: "0.00001234")
/// - sinon : séparateurs de milliers et 2 décimales (ex: "43,250.50")
pub fn format_number(value: f64) -> String {
    if value.abs() < SMALL_VALUE {
        return format!("{:.8}", value);
    }
    group_thousands(&format!("{:.2}", value))
}

/// Formate un grand montant USD de façon compacte ($1.23T, $4.50B, ...)
pub fn format_compact(value: f64) -> String {
    const UNITS: [(f64, &str); 4] = [(1e12, "T"), (1e9, "B"), (1e6, "M"), (1e3, "K")];

    for (threshold, suffix) in UNITS {
        if value.abs() >= threshold {
            return format!("${:.2}{}", value / threshold, suffix);
        }
    }
    format!("${:.2}", value)
}

/// Formate une variation en pourcentage avec flèche (▲ +2.50% / ▼ -1.20%)
pub fn format_percent(value: f64) -> String {
    let arrow = if value >= 0.0 { "▲" } else { "▼" };
    format!("{} {:+.2}%", arrow, value)
}

/// Formate un montant dans une devise (ex: "€1,234.50")
///
/// Le montant doit déjà être exprimé dans `fiat`.
pub fn format_money(fiat: Fiat, value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}{}{}", sign, fiat.symbol(), group_thousands(&format!("{:.2}", value.abs())))
}

/// Convertit un montant USD dans la devise d'affichage
pub fn usd_to(fiat: Fiat, usd: f64) -> f64 {
    usd / fiat.usd_rate()
}

/// Insère des virgules entre les milliers de la partie entière
///
/// "1234567.89" -> "1,234,567.89"
fn group_thousands(formatted: &str) -> String {
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted),
    };
    let (integer, decimals) = match unsigned.split_once('.') {
        Some((integer, decimals)) => (integer, Some(decimals)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    match decimals {
        Some(decimals) => format!("{}{}.{}", sign, grouped, decimals),
        None => format!("{}{}", sign, grouped),
    }
}

// ============================================================================
// Tests unitaires
// ============================================================================
