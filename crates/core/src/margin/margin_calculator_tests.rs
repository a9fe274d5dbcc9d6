#[cfg(test)]
mod tests {
    use crate::margin::{compute_margin, round_money};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[test]
    fn rounds_half_up_away_from_zero_at_three_places() {
        assert_eq!(round_money(dec!(2.0005)), dec!(2.001));
        assert_eq!(round_money(dec!(-2.0005)), dec!(-2.001));
        assert_eq!(round_money(dec!(2.0004)), dec!(2.000));
        assert_eq!(round_money(dec!(53500)), dec!(53500));
    }

    #[test]
    fn sufficient_equity_triggers_no_call() {
        // 100 x 160.00 + 50 x 750.00 against a 10k loan at 25% maintenance
        let outcome = compute_margin(dec!(53500.00), dec!(10000.00), dec!(0.25));
        assert_eq!(outcome.required, dec!(13375.000));
        assert_eq!(outcome.net_equity, dec!(43500.00));
        assert_eq!(outcome.shortfall, Decimal::ZERO);
        assert!(!outcome.call_triggered);
    }

    #[test]
    fn insufficient_equity_triggers_call() {
        let outcome = compute_margin(dec!(53500.00), dec!(50000.00), dec!(0.25));
        assert_eq!(outcome.required, dec!(13375.000));
        assert_eq!(outcome.net_equity, dec!(3500.00));
        assert_eq!(outcome.shortfall, dec!(9875.000));
        assert!(outcome.call_triggered);
    }

    #[test]
    fn negative_equity_is_a_valid_signal() {
        let outcome = compute_margin(dec!(1000), dec!(2000), dec!(0.25));
        assert_eq!(outcome.net_equity, dec!(-1000));
        assert_eq!(outcome.required, dec!(250.000));
        assert_eq!(outcome.shortfall, dec!(1250.000));
        assert!(outcome.call_triggered);
    }

    #[test]
    fn shortfall_is_never_negative() {
        let loans = [dec!(0), dec!(100), dec!(10000), dec!(100000)];
        let values = [dec!(0), dec!(53500), dec!(0.001), dec!(999999.999)];
        for loan in loans {
            for value in values {
                let outcome = compute_margin(value, loan, dec!(0.3));
                assert!(
                    outcome.shortfall >= Decimal::ZERO,
                    "shortfall went negative for value={value} loan={loan}"
                );
                assert_eq!(outcome.call_triggered, outcome.shortfall > Decimal::ZERO);
            }
        }
    }

    #[test]
    fn requirement_is_quantized() {
        // 100.0005 * 0.25 = 25.000125 -> 25.000 at the money scale
        let outcome = compute_margin(dec!(100.0005), dec!(0), dec!(0.25));
        assert_eq!(outcome.required, dec!(25.000));
    }

    #[test]
    fn zero_ratio_requires_nothing() {
        let outcome = compute_margin(dec!(53500), dec!(10000), Decimal::ZERO);
        assert_eq!(outcome.required, Decimal::ZERO);
        assert!(!outcome.call_triggered);
    }
}
