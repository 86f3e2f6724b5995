use std::io::{self, Write};

use crate::arithmetic::Calculator;
use crate::config::Settings;
use crate::constants::{squared, PI};
use crate::debug_print;
use crate::geometry::{Circle, Point};
use crate::time_block;
use crate::timing::TimingGuard;

const OPERAND_A: f64 = 10.0;
const OPERAND_B: f64 = 5.0;

/// Write the whole demonstration to `out`.
///
/// Returns the calculator so callers can inspect how many calculations ran.
pub fn run<W: Write>(out: &mut W, settings: &Settings) -> io::Result<Calculator> {
    let _total = TimingGuard::new("total");
    let mut calc = Calculator::new();

    write_constants(out)?;
    time_block!("arithmetic", write_arithmetic(out, &mut calc))?;
    time_block!("geometry", write_geometry(out))?;

    debug_print!(settings, out, "This is a debug message")?;
    Ok(calc)
}

fn write_constants<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "C++ Compilation Demo")?;
    writeln!(out, "====================\n")?;
    writeln!(out, "Value of PI: {PI:.5}")?;
    writeln!(out, "SQUARE(5) = {}\n", squared(5))
}

fn write_arithmetic<W: Write>(out: &mut W, calc: &mut Calculator) -> io::Result<()> {
    let (a, b) = (OPERAND_A, OPERAND_B);
    writeln!(out, "Math Operations:")?;
    writeln!(out, "a = {a:.1}, b = {b:.1}")?;
    writeln!(out, "a + b = {:.1}", calc.add(a, b))?;
    writeln!(out, "a - b = {:.1}", calc.subtract(a, b))?;
    writeln!(out, "a * b = {:.1}", calc.multiply(a, b))?;
    // The diagnostic, if any, must land before the result line.
    let quotient = calc.divide(a, b, out)?;
    writeln!(out, "a / b = {quotient:.1}")?;
    writeln!(out, "a² = {:.1}", squared(a))?;
    writeln!(out, "Total calculations: {}\n", calc.calculation_count())
}

fn write_geometry<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Geometry - Point:")?;
    let point = Point::new(3.0, 4.0);
    point.print(out)?;
    writeln!(out, "Distance to origin: {:.2}\n", point.distance_to_origin())?;

    writeln!(out, "Geometry - Circle:")?;
    let circle = Circle::with_center(5.0, 1.0, 2.0);
    circle.print(out)?;
    writeln!(out, "Area: {:.2}", circle.area())?;
    writeln!(out, "Circumference: {:.2}\n", circle.circumference())
}

#[cfg(test)]
mod tests {
    use super::run;
    use crate::config::Settings;

    #[test]
    fn run_counts_four_calculations() {
        let mut out = Vec::new();
        let calc = run(&mut out, &Settings::default()).expect("write");
        assert_eq!(calc.calculation_count(), 4);
    }

    #[test]
    fn debug_line_is_last() {
        let mut out = Vec::new();
        let settings = Settings {
            debug: true,
            ..Settings::default()
        };
        run(&mut out, &settings).expect("write");
        let output = String::from_utf8(out).expect("utf8");
        assert!(output.ends_with("Circumference: 31.42\n\n[DEBUG] This is a debug message\n"));
    }
}
