// ============================================================================
// Calculateur de staking
// ============================================================================
// Projette la valeur d'un stake avec intérêts composés
//
// FORMULES :
//   principal        = montant en tokens (ou montant fiat / prix du marché)
//   rate             = taux nominal / 100
//   duration_days    = jours | mois * 365/12 | années * 365
//   periods_per_year = daily 365.25, weekly 52, monthly 12, quarterly 4, yearly 1
//   effective_rate   = APR : (1 + rate/n)^n - 1    APY : rate
//   periods_elapsed  = duration_days / (365.25 / n)
//   total_tokens     = principal * (1 + effective_rate/n)^periods_elapsed
//
// Les retours journalier/mensuel/annuel sont des MOYENNES sur toute la durée
// (retour total réparti linéairement), pas des instantanés de la courbe.
// ============================================================================

use crate::calculator::{parse_input, Estimate};

/// Jours par an utilisés pour les périodes de composition
const DAYS_PER_YEAR: f64 = 365.25;

/// Jours moyens par mois pour la moyenne mensuelle
const DAYS_PER_MONTH: f64 = 30.44;

/// Fréquence de composition des intérêts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compounding {
    Daily,
    Weekly,
    Monthly,
    Quarterly,
    Yearly,
}

impl Compounding {
    pub const ALL: [Compounding; 5] = [
        Compounding::Daily,
        Compounding::Weekly,
        Compounding::Monthly,
        Compounding::Quarterly,
        Compounding::Yearly,
    ];

    /// Nombre de périodes de composition par an
    pub fn periods_per_year(&self) -> f64 {
        match self {
            Compounding::Daily => 365.25,
            Compounding::Weekly => 52.0,
            Compounding::Monthly => 12.0,
            Compounding::Quarterly => 4.0,
            Compounding::Yearly => 1.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Compounding::Daily => "Daily",
            Compounding::Weekly => "Weekly",
            Compounding::Monthly => "Monthly",
            Compounding::Quarterly => "Quarterly",
            Compounding::Yearly => "Yearly",
        }
    }

    /// Fréquence suivante (cycle)
    pub fn next(&self) -> Compounding {
        let index = Self::ALL.iter().position(|c| c == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }
}

/// Nature du taux saisi
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateBasis {
    /// Taux nominal, sans composition dans l'année
    Apr,
    /// Taux effectif, composition déjà incluse
    Apy,
}

impl RateBasis {
    pub fn label(&self) -> &'static str {
        match self {
            RateBasis::Apr => "APR",
            RateBasis::Apy => "APY",
        }
    }

    pub fn toggle(&self) -> RateBasis {
        match self {
            RateBasis::Apr => RateBasis::Apy,
            RateBasis::Apy => RateBasis::Apr,
        }
    }
}

/// Unité de la durée saisie
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationUnit {
    Days,
    Months,
    Years,
}

impl DurationUnit {
    /// Convertit une durée en jours
    pub fn to_days(&self, value: f64) -> f64 {
        match self {
            DurationUnit::Days => value,
            DurationUnit::Months => value * 365.0 / 12.0,
            DurationUnit::Years => value * 365.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DurationUnit::Days => "days",
            DurationUnit::Months => "months",
            DurationUnit::Years => "years",
        }
    }

    /// Unité suivante (cycle)
    pub fn next(&self) -> DurationUnit {
        match self {
            DurationUnit::Days => DurationUnit::Months,
            DurationUnit::Months => DurationUnit::Years,
            DurationUnit::Years => DurationUnit::Days,
        }
    }
}

/// Unité du montant saisi
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountUnit {
    /// Montant en tokens
    Token,
    /// Montant en devise d'affichage, converti au prix du marché
    Fiat,
}

impl AmountUnit {
    pub fn toggle(&self) -> AmountUnit {
        match self {
            AmountUnit::Token => AmountUnit::Fiat,
            AmountUnit::Fiat => AmountUnit::Token,
        }
    }
}

/// Paramètres numériques d'une projection
///
/// Les champs optionnels sont les saisies obligatoires : s'il en manque une,
/// la projection est Pending.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StakingParams {
    pub amount: Option<f64>,
    pub amount_unit: AmountUnit,
    /// Taux en pourcentage (ex: 12.0 pour 12 %)
    pub rate_percent: Option<f64>,
    pub basis: RateBasis,
    pub compounding: Compounding,
    pub duration: Option<f64>,
    pub duration_unit: DurationUnit,
    /// Prix du marché du token (USD ou devise d'affichage)
    pub market_price: f64,
    /// Prix personnalisé pour la valorisation (remplace market_price si > 0)
    pub custom_price: Option<f64>,
}

impl StakingParams {
    /// Prix utilisé pour convertir les tokens en fiat
    pub fn display_price(&self) -> f64 {
        self.custom_price
            .filter(|price| *price > 0.0)
            .unwrap_or(self.market_price)
    }

    /// Principal en tokens
    ///
    /// Un montant fiat avec un prix de marché nul donne 0 (pas d'Infinity).
    pub fn principal(&self, amount: f64) -> f64 {
        match self.amount_unit {
            AmountUnit::Token => amount,
            AmountUnit::Fiat if self.market_price > 0.0 => amount / self.market_price,
            AmountUnit::Fiat => 0.0,
        }
    }

    /// Taux annuel effectif (fraction, 0.1268 pour 12.68 %)
    pub fn effective_rate(&self, rate: f64) -> f64 {
        let n = self.compounding.periods_per_year();
        match self.basis {
            RateBasis::Apr => (1.0 + rate / n).powf(n) - 1.0,
            RateBasis::Apy => rate,
        }
    }
}

/// Un retour exprimé en tokens et en fiat
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ReturnBucket {
    pub tokens: f64,
    pub fiat: f64,
}

impl ReturnBucket {
    fn new(tokens: f64, price: f64) -> Self {
        Self {
            tokens,
            fiat: tokens * price,
        }
    }

    fn is_finite(&self) -> bool {
        self.tokens.is_finite() && self.fiat.is_finite()
    }
}

/// Résultat d'une projection
///
/// Default = l'objet "zéro" affiché tant que la saisie est incomplète.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StakingProjection {
    pub principal: f64,
    pub effective_rate: f64,
    pub duration_days: f64,
    pub periods_elapsed: f64,
    pub final_tokens: f64,
    pub display_price: f64,
    pub daily: ReturnBucket,
    pub monthly: ReturnBucket,
    pub yearly: ReturnBucket,
    pub total: ReturnBucket,
}

impl StakingProjection {
    /// Aucun NaN ni Infinity dans les valeurs affichées
    fn is_finite(&self) -> bool {
        self.final_tokens.is_finite()
            && self.effective_rate.is_finite()
            && [self.daily, self.monthly, self.yearly, self.total]
                .iter()
                .all(ReturnBucket::is_finite)
    }
}

/// Calcule la projection
///
/// Pending si le montant, le taux ou la durée manque, si la durée <= 0,
/// ou si le taux rend la base de composition négative (powf donnerait NaN).
/// Un résultat non fini (durée démesurée) est aussi Pending.
pub fn project(params: &StakingParams) -> Estimate<StakingProjection> {
    let (Some(amount), Some(rate_percent), Some(duration)) =
        (params.amount, params.rate_percent, params.duration)
    else {
        return Estimate::Pending;
    };

    let duration_days = params.duration_unit.to_days(duration);
    if duration_days <= 0.0 {
        return Estimate::Pending;
    }

    let principal = params.principal(amount);
    let n = params.compounding.periods_per_year();
    let rate = rate_percent / 100.0;
    if params.basis == RateBasis::Apr && 1.0 + rate / n <= 0.0 {
        return Estimate::Pending;
    }

    let effective_rate = params.effective_rate(rate);
    let growth = 1.0 + effective_rate / n;
    if !growth.is_finite() || growth <= 0.0 {
        return Estimate::Pending;
    }

    let periods_elapsed = duration_days / (DAYS_PER_YEAR / n);
    let final_tokens = principal * growth.powf(periods_elapsed);
    let total_return = final_tokens - principal;
    let price = params.display_price();

    let projection = StakingProjection {
        principal,
        effective_rate,
        duration_days,
        periods_elapsed,
        final_tokens,
        display_price: price,
        daily: ReturnBucket::new(total_return / duration_days, price),
        monthly: ReturnBucket::new(total_return / (duration_days / DAYS_PER_MONTH), price),
        yearly: ReturnBucket::new(total_return / (duration_days / DAYS_PER_YEAR), price),
        total: ReturnBucket::new(total_return, price),
    };

    if projection.is_finite() {
        Estimate::Ready(projection)
    } else {
        Estimate::Pending
    }
}

// ============================================================================
// Série pour le graphique
// ============================================================================

/// Un point de la courbe de croissance
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    /// Jours écoulés depuis le début
    pub day: f64,
    /// Label de l'axe X (ex: "3 days", "6 months")
    pub label: String,
    /// Solde en tokens
    pub tokens: f64,
    /// Solde en fiat
    pub fiat: f64,
}

/// Échantillonne la courbe de composition en `points` points réguliers
///
/// - Points sur [0, duration_days], bornes incluses (minimum 2 points)
/// - Deux points consécutifs avec le même label : seul le dernier est gardé,
///   pour que le solde final figure toujours sur le graphique
/// - Projection Pending : série vide
pub fn chart_series(params: &StakingParams, points: usize) -> Vec<ChartPoint> {
    let Estimate::Ready(projection) = project(params) else {
        return Vec::new();
    };

    let n = params.compounding.periods_per_year();
    let growth = 1.0 + projection.effective_rate / n;
    let samples = points.max(2);

    let mut series: Vec<ChartPoint> = Vec::with_capacity(samples);
    for i in 0..samples {
        let day = projection.duration_days * i as f64 / (samples - 1) as f64;
        let tokens = projection.principal * growth.powf(day / (DAYS_PER_YEAR / n));
        let point = ChartPoint {
            day,
            label: time_label(day),
            tokens,
            fiat: tokens * projection.display_price,
        };

        // CONCEPT RUST : last_mut() pour remplacer le point précédent en place
        match series.last_mut() {
            Some(last) if last.label == point.label => *last = point,
            _ => series.push(point),
        }
    }

    series
}

/// Label lisible pour une durée en jours
fn time_label(day: f64) -> String {
    fn plural(value: f64, unit: &str) -> String {
        let rounded = value.round() as i64;
        if rounded == 1 {
            format!("1 {}", unit)
        } else {
            format!("{} {}s", rounded, unit)
        }
    }

    if day <= 0.0 {
        "Start".to_string()
    } else if day < 1.0 {
        plural(day * 24.0, "hour")
    } else if day < 60.0 {
        plural(day, "day")
    } else if day < 730.0 {
        plural(day / DAYS_PER_MONTH, "month")
    } else {
        plural(day / DAYS_PER_YEAR, "year")
    }
}

// ============================================================================
// Formulaire de saisie
// ============================================================================

/// Formulaire du calculateur de staking
#[derive(Debug, Clone, PartialEq)]
pub struct StakingForm {
    pub amount: String,
    pub rate: String,
    pub duration: String,
    pub custom_price: String,
    pub amount_unit: AmountUnit,
    pub basis: RateBasis,
    pub compounding: Compounding,
    pub duration_unit: DurationUnit,
}

impl StakingForm {
    /// Labels des champs texte, dans l'ordre de navigation
    pub const FIELD_LABELS: [&'static str; 4] = ["Amount", "Rate (%)", "Duration", "Custom price"];

    /// Accès mutable au champ n° `index`
    pub fn field_mut(&mut self, index: usize) -> Option<&mut String> {
        match index {
            0 => Some(&mut self.amount),
            1 => Some(&mut self.rate),
            2 => Some(&mut self.duration),
            3 => Some(&mut self.custom_price),
            _ => None,
        }
    }

    /// Valeur texte du champ n° `index`
    pub fn field(&self, index: usize) -> &str {
        match index {
            0 => &self.amount,
            1 => &self.rate,
            2 => &self.duration,
            3 => &self.custom_price,
            _ => "",
        }
    }

    /// Paramètres numériques pour un prix de marché donné
    pub fn params(&self, market_price: f64) -> StakingParams {
        StakingParams {
            amount: parse_input(&self.amount),
            amount_unit: self.amount_unit,
            rate_percent: parse_input(&self.rate),
            basis: self.basis,
            compounding: self.compounding,
            duration: parse_input(&self.duration),
            duration_unit: self.duration_unit,
            market_price,
            custom_price: parse_input(&self.custom_price),
        }
    }
}

impl Default for StakingForm {
    fn default() -> Self {
        Self {
            amount: String::new(),
            rate: String::new(),
            duration: String::new(),
            custom_price: String::new(),
            amount_unit: AmountUnit::Token,
            basis: RateBasis::Apr,
            compounding: Compounding::Daily,
            duration_unit: DurationUnit::Days,
        }
    }
}

// ============================================================================
// Tests unitaires
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn params(rate: f64, compounding: Compounding, days: f64) -> StakingParams {
        StakingParams {
            amount: Some(1000.0),
            amount_unit: AmountUnit::Token,
            rate_percent: Some(rate),
            basis: RateBasis::Apr,
            compounding,
            duration: Some(days),
            duration_unit: DurationUnit::Days,
            market_price: 2.0,
            custom_price: None,
        }
    }

    #[test]
    fn test_apr_yearly_equals_nominal() {
        let projection = project(&params(10.0, Compounding::Yearly, 365.0)).unwrap_or_default();
        assert!((projection.effective_rate - 0.10).abs() < 1e-12);
        assert!((projection.total.tokens - 100.0).abs() < 0.5);
        assert!((projection.total.fiat - projection.total.tokens * 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_apr_monthly_effective_rate() {
        let projection = project(&params(12.0, Compounding::Monthly, 365.0)).unwrap_or_default();
        let expected = 1.01_f64.powi(12) - 1.0;
        assert!((projection.effective_rate - expected).abs() < 1e-12);
        assert!((projection.effective_rate - 0.1268).abs() < 1e-4);
    }

    #[test]
    fn test_apy_is_used_as_is() {
        let mut p = params(8.0, Compounding::Weekly, 30.0);
        p.basis = RateBasis::Apy;
        let projection = project(&p).unwrap_or_default();
        assert!((projection.effective_rate - 0.08).abs() < 1e-12);
    }

    #[test]
    fn test_averages_are_linear() {
        let projection = project(&params(20.0, Compounding::Daily, 100.0)).unwrap_or_default();
        let total = projection.total.tokens;
        assert!((projection.daily.tokens - total / 100.0).abs() < 1e-9);
        assert!((projection.monthly.tokens - total / (100.0 / 30.44)).abs() < 1e-9);
        assert!((projection.yearly.tokens - total / (100.0 / 365.25)).abs() < 1e-9);
    }

    #[test]
    fn test_duration_units() {
        assert_eq!(DurationUnit::Days.to_days(10.0), 10.0);
        assert!((DurationUnit::Months.to_days(12.0) - 365.0).abs() < 1e-9);
        assert_eq!(DurationUnit::Years.to_days(2.0), 730.0);
    }

    #[test]
    fn test_missing_inputs_are_pending() {
        let mut p = params(10.0, Compounding::Daily, 30.0);
        p.amount = None;
        assert_eq!(project(&p), Estimate::Pending);

        let mut p = params(10.0, Compounding::Daily, 30.0);
        p.rate_percent = None;
        assert_eq!(project(&p), Estimate::Pending);

        let p = params(10.0, Compounding::Daily, 0.0);
        assert_eq!(project(&p), Estimate::Pending);
        assert_eq!(project(&p).unwrap_or_default(), StakingProjection::default());
    }

    #[test]
    fn test_negative_compounding_base_is_pending() {
        // -200 % APY : base 1 - 2 < 0
        let mut p = params(-200.0, Compounding::Yearly, 365.0);
        p.basis = RateBasis::Apy;
        assert_eq!(project(&p), Estimate::Pending);
        assert!(chart_series(&p, 20).is_empty());

        // -800 % APR composé annuellement
        let p = params(-800.0, Compounding::Yearly, 365.0);
        assert_eq!(project(&p), Estimate::Pending);

        // Un taux négatif modéré reste calculable
        let projection = project(&params(-5.0, Compounding::Monthly, 365.0)).unwrap_or_default();
        assert!(projection.total.tokens < 0.0);
        assert!(projection.total.tokens.is_finite());
    }

    #[test]
    fn test_overflowing_duration_is_pending() {
        let mut p = params(10.0, Compounding::Daily, 1e306);
        p.duration_unit = DurationUnit::Years;
        assert_eq!(project(&p), Estimate::Pending);
    }

    #[test]
    fn test_fiat_amount_with_zero_price() {
        let mut p = params(10.0, Compounding::Daily, 30.0);
        p.amount_unit = AmountUnit::Fiat;
        p.market_price = 0.0;

        let projection = project(&p).unwrap_or_default();
        assert_eq!(projection.principal, 0.0);
        assert!(projection.total.tokens.is_finite());
        assert_eq!(projection.total.tokens, 0.0);
    }

    #[test]
    fn test_fiat_amount_converted_at_market_price() {
        let mut p = params(10.0, Compounding::Daily, 30.0);
        p.amount_unit = AmountUnit::Fiat;
        p.market_price = 4.0;
        assert_eq!(project(&p).unwrap_or_default().principal, 250.0);
    }

    #[test]
    fn test_custom_price_overrides_display() {
        let mut p = params(10.0, Compounding::Daily, 365.0);
        p.custom_price = Some(5.0);
        let projection = project(&p).unwrap_or_default();
        assert_eq!(projection.display_price, 5.0);
        assert!((projection.total.fiat - projection.total.tokens * 5.0).abs() < 1e-9);

        p.custom_price = Some(0.0);
        assert_eq!(project(&p).unwrap_or_default().display_price, 2.0);
    }

    #[test]
    fn test_chart_series_bounds() {
        let p = params(10.0, Compounding::Monthly, 365.0);
        let series = chart_series(&p, 20);
        let projection = project(&p).unwrap_or_default();

        assert!(!series.is_empty());
        assert!(series.len() <= 20);
        assert_eq!(series[0].label, "Start");
        assert_eq!(series[0].tokens, 1000.0);

        let last = series.last().unwrap();
        assert_eq!(last.day, 365.0);
        assert!((last.tokens - projection.final_tokens).abs() < 1e-6);
    }

    #[test]
    fn test_chart_series_deduplicates_labels() {
        let series = chart_series(&params(10.0, Compounding::Daily, 3.0), 20);
        for pair in series.windows(2) {
            assert_ne!(pair[0].label, pair[1].label);
        }
        assert_eq!(series.last().map(|p| p.label.as_str()), Some("3 days"));
    }

    #[test]
    fn test_chart_series_pending_is_empty() {
        let mut p = params(10.0, Compounding::Daily, 3.0);
        p.duration = None;
        assert!(chart_series(&p, 20).is_empty());
    }

    #[test]
    fn test_time_labels() {
        assert_eq!(time_label(0.0), "Start");
        assert_eq!(time_label(0.5), "12 hours");
        assert_eq!(time_label(1.0), "1 day");
        assert_eq!(time_label(45.0), "45 days");
        assert_eq!(time_label(182.0), "6 months");
        assert_eq!(time_label(1095.0), "3 years");
    }

    #[test]
    fn test_staking_form_params() {
        let form = StakingForm {
            amount: "100".to_string(),
            rate: "5".to_string(),
            duration: "".to_string(),
            ..StakingForm::default()
        };
        let p = form.params(3.0);
        assert_eq!(p.amount, Some(100.0));
        assert_eq!(p.duration, None);
        assert_eq!(project(&p), Estimate::Pending);
    }
}
