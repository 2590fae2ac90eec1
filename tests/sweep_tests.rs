
use bs_heatmap::{
    default_configs, linspace, price_options, sweep, FixedParameters, GridSpec, HeatmapConfig,
    MarketParameters, OptionType, PricingError, PurchasePrices, ValueMode,
};
use test_utils::textbook_params;

fn textbook_fixed() -> FixedParameters {
    FixedParameters::from(&textbook_params())
}

/// Matrices are |vols| × |spots| and every cell equals a direct pricing call.
#[test]
fn test_sweep_shape_and_cells() {
    let spots = linspace(80.0, 120.0, 7).unwrap();
    let vols = linspace(0.1, 0.4, 4).unwrap();
    let fixed = textbook_fixed();

    let out = sweep(&spots, &vols, &fixed, &PurchasePrices::none()).expect("sweep failed");

    assert_eq!(out.call.shape(), (4, 7));
    assert_eq!(out.put.shape(), (4, 7));
    assert_eq!(out.call.values.len(), vols.len());
    assert!(out.call.values.iter().all(|row| row.len() == spots.len()));
    assert_eq!(out.call.mode, ValueMode::Price);

    for (j, &vol) in vols.iter().enumerate() {
        for (i, &spot) in spots.iter().enumerate() {
            let direct = price_options(&fixed.at(spot, vol)).unwrap();
            assert_eq!(out.call.get(j, i), Some(direct.call_price));
            assert_eq!(out.put.get(j, i), Some(direct.put_price));
        }
    }
}

/// Non-square grids keep the row = volatility convention.
#[test]
fn test_sweep_non_square_orientation() {
    let spots = [95.0, 100.0];
    let vols = [0.15, 0.2, 0.25, 0.3, 0.35];
    let out = sweep(&spots, &vols, &textbook_fixed(), &PurchasePrices::none()).unwrap();

    assert_eq!(out.call.shape(), (5, 2));
    assert_eq!(out.call.spots, spots.to_vec());
    assert_eq!(out.call.vols, vols.to_vec());

    // Call value rises along a row (spot) and down a column (vol)
    let row = out.call.row(2).unwrap();
    assert!(row[1] > row[0]);
    assert!(out.call.get(4, 0).unwrap() > out.call.get(0, 0).unwrap());
}

#[test]
fn test_sweep_single_cell() {
    let out = sweep(&[100.0], &[0.2], &textbook_fixed(), &PurchasePrices::none()).unwrap();
    assert_eq!(out.call.shape(), (1, 1));
    assert!((out.call.get(0, 0).unwrap() - 10.4506).abs() < 1e-3);
    assert!((out.put.get(0, 0).unwrap() - 5.5735).abs() < 1e-3);
}

/// A purchase price turns that leg into P&L and leaves the other leg alone.
#[test]
fn test_sweep_profit_and_loss() {
    let spots = linspace(80.0, 120.0, 5).unwrap();
    let vols = linspace(0.1, 0.3, 3).unwrap();
    let fixed = textbook_fixed();

    let raw = sweep(&spots, &vols, &fixed, &PurchasePrices::none()).unwrap();
    let pnl = sweep(&spots, &vols, &fixed, &PurchasePrices::new(Some(10.0), None)).unwrap();

    assert_eq!(pnl.call.mode, ValueMode::ProfitLoss { purchase_price: 10.0 });
    assert_eq!(pnl.put.mode, ValueMode::Price);
    for ((_, _, price), (_, _, profit)) in raw.call.iter().zip(pnl.call.iter()) {
        assert!((price - 10.0 - profit).abs() < 1e-12);
    }
    assert_eq!(raw.put, pnl.put);

    // Deep out of the money at low vol the call buyer has lost almost the whole premium
    assert!(pnl.call.min() < -9.0);
    assert!(pnl.call.max() > 0.0);
}

#[test]
fn test_sweep_both_legs_pnl() {
    let purchase = PurchasePrices::new(Some(10.45), Some(5.57));
    let out = sweep(&[100.0], &[0.2], &textbook_fixed(), &purchase).unwrap();
    assert!(out.call.get(0, 0).unwrap().abs() < 1e-2);
    assert!(out.put.get(0, 0).unwrap().abs() < 1e-2);
    assert_eq!(out.matrix(OptionType::Put).option_type, OptionType::Put);
}

/// Form inputs of 0 mean "no purchase price": raw values are shown.
#[test]
fn test_zero_purchase_inputs_show_raw_prices() {
    let purchase = PurchasePrices::from_inputs(0.0, 0.0);
    let out = sweep(&[100.0], &[0.2], &textbook_fixed(), &purchase).unwrap();
    assert_eq!(out.call.mode, ValueMode::Price);
    assert!(out.call.get(0, 0).unwrap() > 10.0);
}

#[test]
fn test_sweep_rejects_non_positive_axis_values() {
    let fixed = textbook_fixed();
    let none = PurchasePrices::none();

    let err = sweep(&[90.0, 0.0, 110.0], &[0.2], &fixed, &none).unwrap_err();
    assert_eq!(err, PricingError::InvalidParameter { name: "spot", value: 0.0 });

    let err = sweep(&[100.0], &[-0.1, 0.2], &fixed, &none).unwrap_err();
    assert!(err.is_invalid_parameter());

    let err = sweep(&[100.0, f64::NAN], &[0.2], &fixed, &none).unwrap_err();
    assert!(err.is_invalid_parameter());
}

#[test]
fn test_sweep_rejects_bad_axes() {
    let fixed = textbook_fixed();
    let none = PurchasePrices::none();

    assert!(matches!(
        sweep(&[], &[0.2], &fixed, &none),
        Err(PricingError::InvalidGrid(_))
    ));
    assert!(matches!(
        sweep(&[100.0], &[], &fixed, &none),
        Err(PricingError::InvalidGrid(_))
    ));
    assert!(matches!(
        sweep(&[110.0, 100.0], &[0.2], &fixed, &none),
        Err(PricingError::InvalidGrid(_))
    ));
    assert!(matches!(
        sweep(&[100.0], &[0.2, 0.2], &fixed, &none),
        Err(PricingError::InvalidGrid(_))
    ));
}

#[test]
fn test_sweep_rejects_bad_fixed_and_purchase() {
    let mut fixed = textbook_fixed();
    fixed.years_to_exp = 0.0;
    let err = sweep(&[100.0], &[0.2], &fixed, &PurchasePrices::none()).unwrap_err();
    assert_eq!(
        err,
        PricingError::InvalidParameter { name: "years_to_exp", value: 0.0 }
    );

    let err = sweep(
        &[100.0],
        &[0.2],
        &textbook_fixed(),
        &PurchasePrices::new(None, Some(-2.0)),
    )
    .unwrap_err();
    assert_eq!(
        err,
        PricingError::InvalidParameter { name: "put_purchase_price", value: -2.0 }
    );
}

#[test]
fn test_grid_spec_drives_sweep() {
    let params = MarketParameters::new(250.0, 240.0, 0.35, 0.5, 0.02).unwrap();
    let grid = GridSpec::around(&params);
    let spots = grid.spots().unwrap();
    let vols = grid.vols().unwrap();

    let out = sweep(&spots, &vols, &FixedParameters::from(&params), &PurchasePrices::none()).unwrap();
    assert_eq!(out.call.shape(), (10, 10));
    assert!((out.call.spots[0] - 200.0).abs() < 1e-9);
    assert!((out.call.spots[9] - 300.0).abs() < 1e-9);
    assert!((out.call.vols[0] - 0.175).abs() < 1e-12);
}

#[test]
fn test_default_configs() {
    for (config, steps) in [
        (default_configs::coarse(), 5),
        (default_configs::dashboard(), 10),
        (default_configs::fine(), 20),
    ] {
        config.validate().unwrap();
        let out = config.run().unwrap();
        assert_eq!(out.call.shape(), (steps, steps));
        assert_eq!(out.put.shape(), (steps, steps));

        let result = config.pricing().unwrap();
        assert!((result.call_price - 10.4506).abs() < 1e-3);
    }
}

#[test]
fn test_heatmap_config_from_toml() {
    let config = HeatmapConfig::from_toml_str(
        r#"
        [market]
        spot = 100.0
        strike = 100.0
        volatility = 0.2
        years_to_exp = 1.0
        risk_free_rate = 0.05

        [purchase]
        put = 5.0
        "#,
    )
    .expect("config should parse");

    assert_eq!(config.grid, None);
    let out = config.run().unwrap();
    assert_eq!(out.put.shape(), (10, 10));
    assert_eq!(out.put.mode, ValueMode::ProfitLoss { purchase_price: 5.0 });
    assert_eq!(out.call.mode, ValueMode::Price);
}

#[test]
fn test_heatmap_config_rejects_bad_grid() {
    let err = HeatmapConfig::from_toml_str(
        r#"
        [market]
        spot = 100.0
        strike = 100.0
        volatility = 0.2
        years_to_exp = 1.0
        risk_free_rate = 0.05

        [grid]
        spot_min = 120.0
        spot_max = 80.0
        vol_min = 0.1
        vol_max = 0.3
        steps = 4
        "#,
    )
    .unwrap_err();
    assert!(format!("{err:#}").contains("[grid]"));
}

#[test]
fn test_heatmap_config_builder() {
    let market = textbook_params();
    let config = HeatmapConfig::new(market)
        .with_grid(GridSpec::around(&market).with_steps(3))
        .with_purchase(PurchasePrices::from_inputs(12.0, 0.0));

    let out = config.run().unwrap();
    assert_eq!(out.call.shape(), (3, 3));
    assert!(out.call.mode.is_pnl());
    assert!(!out.put.mode.is_pnl());
}
