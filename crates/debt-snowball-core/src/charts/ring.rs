use crate::types::{Length, Rate};

/// Stroke-dash offset that leaves `percent` of a closed ring visible.
///
/// `percent` is expected in 0..=1 and is not clamped.
pub fn compute_ring_offset(percent: Rate, circumference: Length) -> Length {
    circumference - percent * circumference
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[test]
    fn test_empty_ring_offset_is_full_circumference() {
        assert_eq!(compute_ring_offset(Decimal::ZERO, dec!(578.05)), dec!(578.05));
    }

    #[test]
    fn test_full_ring_offset_is_zero() {
        assert!(compute_ring_offset(Decimal::ONE, dec!(578.05)).is_zero());
    }

    #[test]
    fn test_quarter_ring() {
        assert_eq!(compute_ring_offset(dec!(0.25), dec!(400)), dec!(300));
    }

    #[test]
    fn test_out_of_range_not_clamped() {
        assert_eq!(compute_ring_offset(dec!(1.5), dec!(100)), dec!(-50));
    }
}
