use heating_cost_table::gradient::{
    cost_color, normalize, perceptual, row_colors, Gradient, Rgba, DEGENERATE_POSITION, ROW_ALPHA,
};
use heating_cost_table::heating::{compute_cost_table, CostInputs};

fn rgba8(hex: u32, alpha: f64) -> [u8; 4] {
    Rgba::opaque((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
        .with_alpha(alpha)
        .to_rgba8()
}

#[test]
fn gradient_endpoints_and_stops() {
    let g = Gradient::cost();
    assert_eq!(g.stops().len(), 7);
    assert_eq!(g.sample(0.0).to_rgba8(), rgba8(0x00A000, 1.0));
    assert_eq!(g.sample(0.5).to_rgba8(), rgba8(0xFFFF80, 1.0));
    assert_eq!(g.sample(1.0).to_rgba8(), rgba8(0xFF2000, 1.0));
    // 범위 밖은 양 끝 색
    assert_eq!(g.sample(-3.0), g.sample(0.0));
    assert_eq!(g.sample(7.0).to_rgba8(), g.sample(1.0).to_rgba8());
}

#[test]
fn gradient_interpolates_between_neighbouring_stops() {
    let g = Gradient::cost();
    // 첫 구간(#00A000 → #40C040)의 중앙
    let mid = g.sample(1.0 / 12.0).to_rgba8();
    assert_eq!(mid, [0x20, 0xB0, 0x20, 0xFF]);
}

#[test]
fn normalize_handles_degenerate_ranges() {
    assert_eq!(normalize(5.0, 5.0, 5.0), DEGENERATE_POSITION);
    assert_eq!(normalize(0.0, 0.0, 0.0), DEGENERATE_POSITION);
    assert_eq!(normalize(1.0, 0.0, f64::INFINITY), DEGENERATE_POSITION);
    assert_eq!(normalize(2.0, 1.0, 3.0), 0.5);
    assert_eq!(normalize(1.0, 1.0, 3.0), 0.0);
    assert_eq!(normalize(3.0, 1.0, 3.0), 1.0);
}

#[test]
fn perceptual_curve_lifts_mid_range() {
    assert_eq!(perceptual(0.0), 0.0);
    assert_eq!(perceptual(1.0), 1.0);
    assert!(perceptual(0.5) > 0.5);
    assert!((perceptual(0.5) - 0.5f64.powf(0.6)).abs() < 1e-15);
}

#[test]
fn cheapest_row_is_greenest_and_dearest_is_reddest() {
    let table = compute_cost_table(CostInputs::new(22.36, 5.48, 8.70, 20_000.0).expect("valid"))
        .expect("table");
    let colors = row_colors(&table);
    assert_eq!(colors.len(), table.rows.len());
    assert!(colors.iter().all(|c| c.a == ROW_ALPHA));

    // SCOP 5 히트펌프가 최저, 전기 저항 난방이 최고
    assert_eq!(colors[9].to_rgba8(), rgba8(0x00A000, ROW_ALPHA));
    assert_eq!(colors[5].to_rgba8(), rgba8(0xFF2000, ROW_ALPHA));
}

#[test]
fn equal_costs_share_a_color() {
    // 등유 SCOP 0.5 행(5/0.5)과 전기 SCOP 2 행(20/2)이 같은 10p가 된다.
    let table = compute_cost_table(CostInputs::new(20.0, 5.0, 5.0, 10_000.0).expect("valid"))
        .expect("table");
    let colors = row_colors(&table);
    assert_eq!(table.rows[0].yearly_cost, table.rows[6].yearly_cost);
    assert_eq!(colors[0], colors[6]);
}

#[test]
fn zero_prices_produce_uniform_color() {
    let table = compute_cost_table(CostInputs::new(0.0, 0.0, 0.0, 20_000.0).expect("valid"))
        .expect("table");
    let colors = row_colors(&table);
    let first = colors[0];
    assert!(colors.iter().all(|c| *c == first));
    assert!(!first.r.is_nan() && !first.g.is_nan() && !first.b.is_nan());
    let expected = cost_color(&Gradient::cost(), 0.0, 0.0, 0.0);
    assert_eq!(first, expected);
}
