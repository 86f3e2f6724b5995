use std::ops::Mul;

pub const PI: f64 = std::f64::consts::PI;

/// Multiply a value by itself.
///
/// Generic so the same helper squares the integer literal in the banner and
/// the floating-point operands. Never counted as a calculation.
#[inline]
pub fn squared<T>(x: T) -> T
where
    T: Mul<Output = T> + Copy,
{
    x * x
}

/// Write `[DEBUG] <message>` to `out` when the settings enable debug output.
///
/// Evaluates to `std::io::Result<()>`.
#[macro_export]
macro_rules! debug_print {
    ($settings:expr, $out:expr, $message:expr) => {{
        if $settings.debug {
            writeln!($out, "[DEBUG] {}", $message)
        } else {
            ::std::io::Result::Ok(())
        }
    }};
}

#[cfg(test)]
mod tests {
    use super::{squared, PI};
    use crate::config::Settings;
    use std::io::Write;

    #[test]
    fn squared_works_for_integers_and_floats() {
        assert_eq!(squared(5), 25);
        assert_eq!(squared(-3), 9);
        assert_eq!(squared(10.0_f64), 100.0);
        assert_eq!(squared(-1.5_f64), 2.25);
    }

    #[test]
    fn pi_prints_with_five_places() {
        assert_eq!(format!("{PI:.5}"), "3.14159");
    }

    #[test]
    fn debug_print_respects_settings() {
        let mut out = Vec::new();
        let quiet = Settings::default();
        debug_print!(quiet, &mut out, "hidden").expect("write");
        assert!(out.is_empty());

        let loud = Settings {
            debug: true,
            ..Settings::default()
        };
        debug_print!(loud, &mut out, "shown").expect("write");
        assert_eq!(String::from_utf8(out).expect("utf8"), "[DEBUG] shown\n");
    }
}
