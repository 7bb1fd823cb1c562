// ============================================================================
// Tests d'intégration : calculateurs et convertisseur
// ============================================================================

use coinboard::calculator::{
    calculate_roi, chart_series, convert, project, AmountUnit, Asset, Compounding, Converter,
    DurationUnit, Estimate, RateBasis, RoiForm, RoiInput, StakingForm, StakingParams,
};
use coinboard::catalog::Catalog;
use coinboard::models::Fiat;

fn staking(rate: f64, compounding: Compounding, duration: f64, unit: DurationUnit) -> StakingParams {
    StakingParams {
        amount: Some(100.0),
        amount_unit: AmountUnit::Token,
        rate_percent: Some(rate),
        basis: RateBasis::Apr,
        compounding,
        duration: Some(duration),
        duration_unit: unit,
        market_price: 10.0,
        custom_price: None,
    }
}

#[test]
fn roi_profit_and_loss_are_symmetric() {
    let gain = calculate_roi(&RoiInput {
        amount: 500.0,
        buy_price: Some(10.0),
        sell_price: Some(12.0),
        ..RoiInput::default()
    });
    let loss = calculate_roi(&RoiInput {
        amount: 500.0,
        buy_price: Some(10.0),
        sell_price: Some(8.0),
        ..RoiInput::default()
    });

    assert!((gain.absolute_profit() - 100.0).abs() < 1e-9);
    assert!((loss.absolute_profit() + 100.0).abs() < 1e-9);
    assert!((gain.percentage_return() - 20.0).abs() < 1e-9);
    assert!(gain.is_profit());
    assert!(!loss.is_profit());
}

#[test]
fn roi_never_produces_nan() {
    let inputs = [
        RoiInput::default(),
        RoiInput {
            buy_price: Some(0.0),
            sell_price: Some(0.0),
            ..RoiInput::default()
        },
        RoiInput {
            amount: 0.0,
            buy_price: Some(1.0),
            sell_price: Some(2.0),
            buy_fee: 0.0,
            sell_fee: 5.0,
        },
    ];

    for input in inputs {
        let result = calculate_roi(&input);
        assert!(result.tokens_purchased.is_finite());
        assert!(result.net_return.is_finite());
        assert!(result.absolute_profit().is_finite());
        assert!(result.percentage_return().is_finite());
    }
}

#[test]
fn roi_form_with_thousands_separator() {
    let form = RoiForm {
        amount: "1,000".to_string(),
        buy_price: "100".to_string(),
        buy_fee: "10".to_string(),
        sell_price: "150".to_string(),
        sell_fee: "15".to_string(),
        ..RoiForm::new("ETH", Fiat::Usd)
    };

    let result = form.result();
    assert!((result.absolute_profit() - 475.0).abs() < 1e-9);
    assert!((result.percentage_return() - 47.0297).abs() < 1e-3);
}

#[test]
fn longer_stake_earns_more() {
    let short = project(&staking(8.0, Compounding::Daily, 6.0, DurationUnit::Months));
    let long = project(&staking(8.0, Compounding::Daily, 1.0, DurationUnit::Years));

    let short = short.unwrap_or_default();
    let long = long.unwrap_or_default();
    assert!(long.total.tokens > short.total.tokens);
    assert!(short.total.tokens > 0.0);
}

#[test]
fn more_frequent_compounding_raises_apr_yield() {
    let yearly = project(&staking(12.0, Compounding::Yearly, 365.0, DurationUnit::Days));
    let daily = project(&staking(12.0, Compounding::Daily, 365.0, DurationUnit::Days));

    assert!(
        daily.unwrap_or_default().effective_rate > yearly.unwrap_or_default().effective_rate
    );
}

#[test]
fn apy_ignores_compounding_frequency() {
    let mut weekly = staking(12.0, Compounding::Weekly, 365.0, DurationUnit::Days);
    weekly.basis = RateBasis::Apy;
    let mut monthly = staking(12.0, Compounding::Monthly, 365.0, DurationUnit::Days);
    monthly.basis = RateBasis::Apy;

    assert_eq!(
        project(&weekly).unwrap_or_default().effective_rate,
        project(&monthly).unwrap_or_default().effective_rate
    );
}

#[test]
fn staking_form_pending_until_complete() {
    let mut form = StakingForm::default();
    assert_eq!(project(&form.params(10.0)), Estimate::Pending);
    assert!(chart_series(&form.params(10.0), 20).is_empty());

    form.amount = "100".to_string();
    form.rate = "5".to_string();
    form.duration = "90".to_string();
    assert!(project(&form.params(10.0)).is_ready());

    let series = chart_series(&form.params(10.0), 20);
    assert_eq!(series.first().map(|p| p.label.as_str()), Some("Start"));
    assert!(series.windows(2).all(|w| w[1].tokens >= w[0].tokens));
}

#[test]
fn staking_form_with_negative_base_stays_pending() {
    let form = StakingForm {
        amount: "100".to_string(),
        rate: "-200".to_string(),
        duration: "365".to_string(),
        basis: RateBasis::Apy,
        compounding: Compounding::Yearly,
        ..StakingForm::default()
    };

    let projection = project(&form.params(10.0));
    assert_eq!(projection, Estimate::Pending);
    assert!(projection.unwrap_or_default().total.tokens.is_finite());
    assert!(chart_series(&form.params(10.0), 20).is_empty());
}

#[test]
fn chart_series_ends_on_final_balance() {
    let params = staking(15.0, Compounding::Monthly, 2.0, DurationUnit::Years);
    let projection = project(&params).unwrap_or_default();
    let series = chart_series(&params, 2);

    assert_eq!(series.len(), 2);
    assert_eq!(series[1].label, "2 years");
    assert!((series[1].tokens - projection.final_tokens).abs() < 1e-6);
    assert!((series[1].fiat - projection.final_tokens * 10.0).abs() < 1e-6);
}

#[test]
fn converter_on_embedded_catalog() {
    let catalog = Catalog::embedded().expect("embedded catalog must parse");
    let btc = Asset::Coin("BTC".to_string());
    let eth = Asset::Coin("ETH".to_string());

    let btc_in_eth = convert(1.0, &btc, &eth, &catalog).unwrap_or_default();
    assert!((btc_in_eth - 67245.32 / 3245.67).abs() < 1e-9);

    // Aller-retour
    let back = convert(btc_in_eth, &eth, &btc, &catalog).unwrap_or_default();
    assert!((back - 1.0).abs() < 1e-12);

    let mut converter = Converter::new(Asset::Fiat(Fiat::Eur), Asset::Fiat(Fiat::Usd));
    converter.set_from_text("100", &catalog);
    assert_eq!(converter.to_text, "108.00000000");
}

#[test]
fn converter_unknown_coin_is_pending() {
    let catalog = Catalog::embedded().expect("embedded catalog must parse");
    let result = convert(
        1.0,
        &Asset::Fiat(Fiat::Usd),
        &Asset::Coin("DOGE".to_string()),
        &catalog,
    );
    assert_eq!(result, Estimate::Pending);
}
