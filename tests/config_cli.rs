use clap::Parser;
use heating_cost_table::app::{self, Args};
use heating_cost_table::config::{self, Config, Range};
use heating_cost_table::heating::compute_cost_table;
use heating_cost_table::ui_cli;

fn args(extra: &[&str]) -> Args {
    let mut argv = vec!["heating_cost_table"];
    argv.extend_from_slice(extra);
    Args::try_parse_from(argv).expect("valid args")
}

#[test]
fn missing_config_is_created_with_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    let cfg = config::load_or_default(&path).expect("load");
    assert!(path.exists());
    assert_eq!(cfg.currency_symbol, "£");
    assert_eq!(cfg.dpi, 200);
    assert_eq!(cfg.defaults.electricity_price, 22.36);
    assert_eq!(cfg.bounds.yearly_usage.max, 50_000.0);

    let reloaded = config::load_or_default(&path).expect("reload");
    assert_eq!(reloaded.defaults.yearly_usage, 20_000.0);
}

#[test]
fn partial_config_falls_back_to_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "currency_symbol = \"€\"\n[defaults]\ngas_price = 7.5\n").expect("write");
    let cfg = config::load_or_default(&path).expect("load");
    assert_eq!(cfg.currency_symbol, "€");
    assert_eq!(cfg.defaults.gas_price, 7.5);
    assert_eq!(cfg.defaults.oil_price, 8.70);
    assert_eq!(cfg.dpi, 200);
}

#[test]
fn broken_config_is_reported() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "dpi = \"lots\"").expect("write");
    assert!(matches!(
        config::load_or_default(&path),
        Err(config::ConfigError::Serde(_))
    ));
}

#[test]
fn cli_values_override_defaults_and_are_range_limited() {
    let cfg = Config::default();
    let inputs = app::resolve_inputs(&args(&["--gas", "6.1", "--usage", "90000"]), &cfg);
    assert_eq!(inputs.electricity_price, 22.36);
    assert_eq!(inputs.gas_price, 6.1);
    assert_eq!(inputs.oil_price, 8.70);
    assert_eq!(inputs.yearly_usage, 50_000.0);

    let low = app::resolve_inputs(&args(&["--electricity", "1"]), &cfg);
    assert_eq!(low.electricity_price, 10.0);
}

#[test]
fn negative_cli_values_reach_validation() {
    let cfg = Config::default();
    let a = args(&["--oil", "-3"]);
    let inputs = app::resolve_inputs(&a, &cfg);
    assert_eq!(inputs.oil_price, -3.0);

    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("table.png");
    let a = args(&["--oil", "-3", "--output", out.to_str().expect("utf-8 path")]);
    let err = app::run(&a, &cfg).expect_err("negative oil price");
    assert!(err.to_string().contains("oil price"), "{err}");
    assert!(!out.exists());
}

#[test]
fn run_writes_png_to_output() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("table.png");
    let a = args(&["--output", out.to_str().expect("utf-8 path")]);
    let written = app::run(&a, &Config::default()).expect("run");
    assert_eq!(written, out);
    let bytes = std::fs::read(&out).expect("read");
    assert!(image::load_from_memory(&bytes).is_ok());
}

#[test]
fn text_table_lists_every_row() {
    let cfg = Config::default();
    let inputs = app::resolve_inputs(&args(&[]), &cfg);
    let table = compute_cost_table(inputs).expect("table");
    let mut out = Vec::new();
    ui_cli::write_table(&mut out, &table, "£").expect("write");
    let text = String::from_utf8(out).expect("utf-8");

    assert!(text.contains("Yearly cost (20,000 kWh)"));
    assert!(text.contains("Top-of-the-COPs-heat pump"));
    assert!(text.contains("£4,472"));
    assert_eq!(text.lines().filter(|l| l.starts_with("| ")).count(), 11);
}

#[test]
fn inverted_bounds_are_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[bounds.gas_price]\nmin = 20.0\nmax = 2.0\n").expect("write");
    match config::load_or_default(&path) {
        Err(config::ConfigError::InvalidBounds { field, min, max }) => {
            assert_eq!(field, "gas_price");
            assert_eq!((min, max), (20.0, 2.0));
        }
        other => panic!("expected InvalidBounds, got {other:?}"),
    }
}

#[test]
fn nan_bounds_are_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[bounds.oil_price]\nmin = nan\nmax = 20.0\n").expect("write");
    let err = config::load_or_default(&path).expect_err("nan bound");
    assert!(matches!(
        err,
        config::ConfigError::InvalidBounds { field: "oil_price", .. }
    ));
    assert!(err.to_string().contains("bounds.oil_price"), "{err}");
}

#[test]
fn invalid_bounds_built_in_code_leave_values_unlimited() {
    let mut cfg = Config::default();
    cfg.bounds.gas_price = Range::new(20.0, 2.0);
    cfg.bounds.oil_price = Range::new(f64::NAN, 20.0);
    assert!(!cfg.bounds.gas_price.is_valid());

    let inputs = app::resolve_inputs(&args(&["--gas", "6.1", "--oil", "50"]), &cfg);
    assert_eq!(inputs.gas_price, 6.1);
    assert_eq!(inputs.oil_price, 50.0);
    // 올바른 범위는 계속 적용된다.
    let inputs = app::resolve_inputs(&args(&["--usage", "90000"]), &cfg);
    assert_eq!(inputs.yearly_usage, 50_000.0);
}
