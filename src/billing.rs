// src/billing.rs
//
// Receipt arithmetic: splitting a tax-inclusive sale total into
// subtotal + IGV (18%) and synthesizing receipt numbers.

use chrono::NaiveDate;
use rust_decimal::prelude::*;

/// Divisor for extracting the pre-tax subtotal from a tax-inclusive total.
const TAX_DIVISOR: Decimal = Decimal::from_parts(118, 0, 0, false, 2); // 1.18

pub const TYPE_RECEIPT: &str = "RECEIPT";
pub const TYPE_INVOICE: &str = "INVOICE";

/// subtotal = total / 1.18 rounded half-up to cents; tax is the remainder
/// so the two always sum back to the stored total.
pub fn split_total(total: Decimal) -> (Decimal, Decimal) {
    let subtotal = (total / TAX_DIVISOR)
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let tax = total - subtotal;
    (subtotal, tax)
}

/// "R" + YYYYMMDD + sale id zero-padded to 6 digits.
pub fn receipt_number(date: NaiveDate, sale_id: i64) -> String {
    format!("R{}{:06}", date.format("%Y%m%d"), sale_id)
}

/// Unknown types silently coerce to RECEIPT.
pub fn normalize_receipt_type(requested: &str) -> &'static str {
    if requested == TYPE_INVOICE {
        TYPE_INVOICE
    } else {
        TYPE_RECEIPT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_118_into_100_plus_18() {
        let (subtotal, tax) = split_total(Decimal::new(11800, 2));
        assert_eq!(subtotal, Decimal::new(10000, 2));
        assert_eq!(tax, Decimal::new(1800, 2));
    }

    #[test]
    fn subtotal_rounds_half_up() {
        // 50 / 1.18 = 42.372881... -> 42.37, tax picks up the rest
        let (subtotal, tax) = split_total(Decimal::new(5000, 2));
        assert_eq!(subtotal, Decimal::new(4237, 2));
        assert_eq!(tax, Decimal::new(763, 2));
        assert_eq!(subtotal + tax, Decimal::new(5000, 2));
    }

    #[test]
    fn number_is_deterministic() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(receipt_number(date, 7), "R20240305000007");
    }

    #[test]
    fn number_pads_to_six_digits_without_truncating() {
        let date = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        assert_eq!(receipt_number(date, 123456), "R20241231123456");
        assert_eq!(receipt_number(date, 1234567), "R202412311234567");
    }

    #[test]
    fn unknown_types_coerce_to_receipt() {
        assert_eq!(normalize_receipt_type("INVOICE"), "INVOICE");
        assert_eq!(normalize_receipt_type("RECEIPT"), "RECEIPT");
        assert_eq!(normalize_receipt_type("invoice"), "RECEIPT");
        assert_eq!(normalize_receipt_type("TICKET"), "RECEIPT");
        assert_eq!(normalize_receipt_type(""), "RECEIPT");
    }
}
