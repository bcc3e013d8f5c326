use heating_cost_table::format::{
    format_currency, format_inverse_scop, format_pence, format_scop, yearly_cost_header,
};

#[test]
fn pence_has_one_decimal_and_suffix() {
    assert_eq!(format_pence(22.36), "22.4p");
    assert_eq!(format_pence(4.472), "4.5p");
    assert_eq!(format_pence(0.0), "0.0p");
    assert_eq!(format_pence(17.4), "17.4p");
}

#[test]
fn currency_is_grouped_integer() {
    assert_eq!(format_currency(4472.0, "£"), "£4,472");
    assert_eq!(format_currency(894.4, "£"), "£894");
    assert_eq!(format_currency(0.0, "£"), "£0");
    assert_eq!(format_currency(1_234_567.8, "€"), "€1,234,568");
    assert_eq!(format_currency(999.6, "$"), "$1,000");
}

#[test]
fn scop_columns() {
    assert_eq!(format_scop(0.75), "0.75");
    assert_eq!(format_scop(1.0), "1");
    assert_eq!(format_inverse_scop(2.0), "2.00");
    assert_eq!(format_inverse_scop(0.33), "0.33");
}

#[test]
fn header_carries_usage_value() {
    assert_eq!(yearly_cost_header(20_000.0), "Yearly cost (20,000 kWh)");
    assert_eq!(yearly_cost_header(5_000.0), "Yearly cost (5,000 kWh)");
    assert_eq!(yearly_cost_header(750.0), "Yearly cost (750 kWh)");
}
