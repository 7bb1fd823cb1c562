// ============================================================================
// Module : calculator
// ============================================================================
// Moteurs de calcul financiers : ROI, staking (intérêts composés) et
// convertisseur de devises
//
// Toutes les fonctions sont pures et ne paniquent jamais :
// - une saisie vide ou non numérique devient None (puis 0 ou Pending)
// - une division par zéro donne un résultat défini, jamais NaN/Infinity
// ============================================================================

pub mod converter; // Conversion fiat <-> crypto
pub mod estimate;  // Estimate<T> : Pending ou Ready(valeur)
pub mod input;     // Parsing tolérant des champs texte
pub mod roi;       // Calculateur de retour sur investissement
pub mod staking;   // Projection de staking

// Re-exports pour simplifier les imports
pub use converter::{convert, usd_price, Asset, Converter};
pub use estimate::Estimate;
pub use input::{parse_input, parse_or_zero};
pub use roi::{calculate_roi, Profit, RoiForm, RoiInput, RoiResult};
pub use staking::{
    chart_series, project, AmountUnit, ChartPoint, Compounding, DurationUnit, RateBasis,
    ReturnBucket, StakingForm, StakingParams, StakingProjection,
};
