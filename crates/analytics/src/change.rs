use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

const ONE_HUNDRED: Decimal = dec!(100);

/// Percentage change from `previous` to `current`, rounded to two places.
///
/// A zero baseline is reported as a flat `100` when anything was sold in the
/// current period and `0` otherwise. It is never infinite or undefined.
pub fn percent_change(current: Decimal, previous: Decimal) -> Decimal {
    if previous.is_zero() {
        return if current > Decimal::ZERO {
            ONE_HUNDRED
        } else {
            Decimal::ZERO
        };
    }

    ((current - previous) / previous * ONE_HUNDRED)
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// `percent_change` for counts such as quantities and order numbers.
pub fn percent_change_count(current: i64, previous: i64) -> Decimal {
    percent_change(Decimal::from(current), Decimal::from(previous))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn doubling_is_one_hundred_percent() {
        assert_eq!(percent_change(dec!(100), dec!(50)), dec!(100.00));
    }

    #[test]
    fn halving_is_minus_fifty_percent() {
        assert_eq!(percent_change(dec!(50), dec!(100)), dec!(-50.00));
    }

    #[test]
    fn zero_to_zero_is_no_change() {
        assert_eq!(percent_change(Decimal::ZERO, Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn dropping_to_zero_is_minus_one_hundred() {
        assert_eq!(percent_change(Decimal::ZERO, dec!(12.34)), dec!(-100));
    }

    #[test]
    fn rounds_half_away_from_zero() {
        // 1/8 = 12.5%, 1/16 = 6.25%, 1/32 = 3.125% -> 3.13
        assert_eq!(percent_change(dec!(33), dec!(32)), dec!(3.13));
        assert_eq!(percent_change(dec!(31), dec!(32)), dec!(-3.13));
    }

    #[test]
    fn thirds_are_cut_to_two_places() {
        assert_eq!(percent_change(dec!(4), dec!(3)), dec!(33.33));
        assert_eq!(percent_change(dec!(5), dec!(3)), dec!(66.67));
    }

    #[test]
    fn counts_use_the_same_policy() {
        assert_eq!(percent_change_count(7, 0), dec!(100));
        assert_eq!(percent_change_count(0, 0), dec!(0));
        assert_eq!(percent_change_count(15, 10), dec!(50));
    }

    fn cents() -> impl Strategy<Value = Decimal> {
        (1i64..10_000_000_000).prop_map(|c| Decimal::new(c, 2))
    }

    proptest! {
        #[test]
        fn any_growth_from_zero_is_exactly_one_hundred(current in cents()) {
            prop_assert_eq!(percent_change(current, Decimal::ZERO), ONE_HUNDRED);
        }

        #[test]
        fn results_never_carry_more_than_two_places(current in cents(), previous in cents()) {
            prop_assert!(percent_change(current, previous).scale() <= 2);
        }

        #[test]
        fn losing_everything_is_minus_one_hundred(previous in cents()) {
            prop_assert_eq!(percent_change(Decimal::ZERO, previous), -ONE_HUNDRED);
        }
    }
}
