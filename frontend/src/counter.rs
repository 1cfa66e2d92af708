// Counter target from a headline like "50%": every digit kept, in order.
pub fn parse_target(title: &str) -> u32 {
    title
        .chars()
        .filter(char::is_ascii_digit)
        .fold(0u32, |acc, c| {
            acc.saturating_mul(10)
                .saturating_add(c.to_digit(10).unwrap_or(0))
        })
}

// Linear ramp from 0 to `target` over `duration_ms`, floored, ending exactly
// on `target`.
pub fn count_at(elapsed_ms: f64, duration_ms: f64, target: u32) -> u32 {
    if duration_ms <= 0.0 {
        return target;
    }
    let progress = (elapsed_ms / duration_ms).clamp(0.0, 1.0);
    if progress >= 1.0 {
        target
    } else {
        (progress * f64::from(target)).floor() as u32
    }
}

pub fn is_finished(elapsed_ms: f64, duration_ms: f64) -> bool {
    elapsed_ms >= duration_ms
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_strips_non_digits() {
        assert_eq!(parse_target("50%"), 50);
        assert_eq!(parse_target("90%"), 90);
        assert_eq!(parse_target("1,000+"), 1000);
        assert_eq!(parse_target("none"), 0);
    }

    #[test]
    fn ramp_starts_at_zero_and_ends_on_target() {
        assert_eq!(count_at(0.0, 2000.0, 50), 0);
        assert_eq!(count_at(2000.0, 2000.0, 50), 50);
        assert_eq!(count_at(5000.0, 2000.0, 50), 50);
        assert_eq!(count_at(-10.0, 2000.0, 50), 0);
    }

    #[test]
    fn ramp_floors_intermediate_values() {
        assert_eq!(count_at(1000.0, 2000.0, 25), 12);
        assert_eq!(count_at(1999.0, 2000.0, 90), 89);
    }

    #[test]
    fn ramp_is_monotonic() {
        let mut last = 0;
        for step in 0..=125 {
            let value = count_at(f64::from(step) * 16.0, 2000.0, 90);
            assert!(value >= last);
            assert!(value <= 90);
            last = value;
        }
        assert_eq!(last, 90);
    }

    #[test]
    fn zero_duration_jumps_to_target() {
        assert_eq!(count_at(0.0, 0.0, 25), 25);
        assert!(is_finished(0.0, 0.0));
        assert!(!is_finished(10.0, 2000.0));
    }
}
