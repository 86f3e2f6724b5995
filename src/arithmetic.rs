use std::fmt;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticError {
    DivisionByZero,
}

impl fmt::Display for ArithmeticError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArithmeticError::DivisionByZero => write!(f, "Division by zero"),
        }
    }
}

impl std::error::Error for ArithmeticError {}

/// Binary arithmetic that keeps track of how many operations it performed.
///
/// Only add, subtract, multiply and divide count as calculations.
#[derive(Debug, Default)]
pub struct Calculator {
    calculations: usize,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, a: f64, b: f64) -> f64 {
        self.calculations += 1;
        a + b
    }

    pub fn subtract(&mut self, a: f64, b: f64) -> f64 {
        self.calculations += 1;
        a - b
    }

    pub fn multiply(&mut self, a: f64, b: f64) -> f64 {
        self.calculations += 1;
        a * b
    }

    /// Divide `a` by `b`, failing on an exact-zero divisor.
    ///
    /// The attempt is counted either way.
    pub fn checked_divide(&mut self, a: f64, b: f64) -> Result<f64, ArithmeticError> {
        self.calculations += 1;
        if b == 0.0 {
            return Err(ArithmeticError::DivisionByZero);
        }
        Ok(a / b)
    }

    /// Divide `a` by `b`, writing a diagnostic to `out` and yielding `0.0`
    /// when the divisor is zero.
    pub fn divide<W: Write>(&mut self, a: f64, b: f64, out: &mut W) -> io::Result<f64> {
        match self.checked_divide(a, b) {
            Ok(quotient) => Ok(quotient),
            Err(err) => {
                writeln!(out, "Error: {err}")?;
                Ok(0.0)
            }
        }
    }

    pub fn calculation_count(&self) -> usize {
        self.calculations
    }

    pub fn reset(&mut self) {
        self.calculations = 0;
    }
}
