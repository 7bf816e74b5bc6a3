//! Booking price computation.

use serde::{Deserialize, Serialize};

/// The money breakdown of a booking.
///
/// `final_amount == total_amount + platform_fee` by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Price per hour times the number of slots.
    pub total_amount: i64,
    /// Platform surcharge, rounded half up to the nearest currency unit.
    pub platform_fee: i64,
    /// The amount charged to the payer.
    pub final_amount: i64,
}

/// Compute the quote for a slot selection.
///
/// All amounts are integer currency units; the fee is
/// `total * fee_percent / 100` rounded half up.
pub fn quote(price_per_hour: i64, slot_count: usize, fee_percent: u32) -> Quote {
    let total_amount = price_per_hour * slot_count as i64;
    let platform_fee = (total_amount * i64::from(fee_percent) + 50) / 100;
    Quote {
        total_amount,
        platform_fee,
        final_amount: total_amount + platform_fee,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_slot_quote() {
        // price 200, two slots, 5% fee.
        let quote = quote(200, 2, 5);
        assert_eq!(quote.total_amount, 400);
        assert_eq!(quote.platform_fee, 20);
        assert_eq!(quote.final_amount, 420);
    }

    #[test]
    fn test_fee_rounds_half_up() {
        // 130 * 5% = 6.5 -> 7
        assert_eq!(quote(130, 1, 5).platform_fee, 7);
        // 90 * 5% = 4.5 -> 5
        assert_eq!(quote(90, 1, 5).platform_fee, 5);
        // 110 * 5% = 5.5 -> 6
        assert_eq!(quote(110, 1, 5).platform_fee, 6);
        // 120 * 5% = 6.0 exactly
        assert_eq!(quote(120, 1, 5).platform_fee, 6);
    }

    #[test]
    fn test_invariants_hold() {
        for slots in 1..=17 {
            let q = quote(350, slots, 5);
            assert_eq!(q.total_amount, 350 * slots as i64);
            assert_eq!(q.final_amount, q.total_amount + q.platform_fee);
        }
    }

    #[test]
    fn test_zero_fee_percent() {
        let q = quote(500, 3, 0);
        assert_eq!(q.platform_fee, 0);
        assert_eq!(q.final_amount, q.total_amount);
    }
}
