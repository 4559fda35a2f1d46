//! Checkout pricing. Pure arithmetic over whole rupees; calling `quote` twice
//! with the same inputs yields the same breakdown.

use serde::Serialize;

use super::order::ShippingMethod;

/// Flat surcharge for express delivery, in rupees.
pub const EXPRESS_SHIPPING_FEE: i64 = 49;
/// Flat gift-wrap fee, in rupees.
pub const GIFT_WRAP_FEE: i64 = 50;
/// The single recognized discount code. Matched case-insensitively.
pub const DISCOUNT_CODE: &str = "FIRSTCUP10";

/// Derived on every checkout render, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PricingBreakdown {
    pub subtotal: i64,
    pub shipping_cost: i64,
    pub gift_wrap_fee: i64,
    pub discount_amount: i64,
    pub total: i64,
}

/// True when `code` is the recognized discount code, ignoring case.
pub fn code_is_valid(code: &str) -> bool {
    code.trim().eq_ignore_ascii_case(DISCOUNT_CODE)
}

pub fn shipping_cost(method: ShippingMethod) -> i64 {
    match method {
        ShippingMethod::Standard => 0,
        ShippingMethod::Express => EXPRESS_SHIPPING_FEE,
    }
}

/// 10% of the subtotal, rounded half-up to the nearest rupee.
fn discount(subtotal: i64) -> i64 {
    (subtotal + 5) / 10
}

pub fn quote(
    subtotal: i64,
    shipping_method: ShippingMethod,
    gift_wrap: bool,
    discount_applied: bool,
) -> PricingBreakdown {
    let shipping_cost = shipping_cost(shipping_method);
    let gift_wrap_fee = if gift_wrap { GIFT_WRAP_FEE } else { 0 };
    let discount_amount = if discount_applied { discount(subtotal) } else { 0 };
    PricingBreakdown {
        subtotal,
        shipping_cost,
        gift_wrap_fee,
        discount_amount,
        total: subtotal + shipping_cost + gift_wrap_fee - discount_amount,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_identity_holds_across_modifier_combinations() {
        for subtotal in [0, 1, 5, 205, 410, 999, 100_000] {
            for method in [ShippingMethod::Standard, ShippingMethod::Express] {
                for gift_wrap in [false, true] {
                    for applied in [false, true] {
                        let q = quote(subtotal, method, gift_wrap, applied);
                        assert_eq!(
                            q.total,
                            q.subtotal + q.shipping_cost + q.gift_wrap_fee - q.discount_amount
                        );
                        assert!(q.total >= 0, "total went negative for subtotal {subtotal}");
                    }
                }
            }
        }
    }

    #[test]
    fn quote_is_deterministic() {
        let a = quote(410, ShippingMethod::Express, true, true);
        let b = quote(410, ShippingMethod::Express, true, true);
        assert_eq!(a, b);
    }

    #[test]
    fn two_velar_express_gift_wrap_discount_totals_468() {
        // 205 × 2 with express (49), gift wrap (50) and FIRSTCUP10 applied.
        let q = quote(410, ShippingMethod::Express, true, true);
        assert_eq!(q.subtotal, 410);
        assert_eq!(q.shipping_cost, 49);
        assert_eq!(q.gift_wrap_fee, 50);
        assert_eq!(q.discount_amount, 41);
        assert_eq!(q.total, 468);
    }

    #[test]
    fn discount_never_touches_shipping_or_gift_wrap() {
        let q = quote(100, ShippingMethod::Express, true, true);
        assert_eq!(q.discount_amount, 10);
        assert_eq!(q.shipping_cost, EXPRESS_SHIPPING_FEE);
        assert_eq!(q.gift_wrap_fee, GIFT_WRAP_FEE);
    }

    #[test]
    fn discount_rounds_half_up() {
        assert_eq!(quote(205, ShippingMethod::Standard, false, true).discount_amount, 21);
        assert_eq!(quote(204, ShippingMethod::Standard, false, true).discount_amount, 20);
    }

    #[test]
    fn code_matches_case_insensitively() {
        assert!(code_is_valid("FIRSTCUP10"));
        assert!(code_is_valid("firstcup10"));
        assert!(code_is_valid("  FirstCup10 "));
        assert!(!code_is_valid("FIRSTCUP20"));
        assert!(!code_is_valid(""));
    }

    #[test]
    fn empty_cart_total_is_fees_only() {
        let q = quote(0, ShippingMethod::Express, true, false);
        assert_eq!(q.subtotal, 0);
        assert_eq!(q.total, EXPRESS_SHIPPING_FEE + GIFT_WRAP_FEE);
    }
}
