use std::fmt;
use std::io::{self, Write};

use crate::constants::{squared, PI};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn origin() -> Self {
        Self::new(0.0, 0.0)
    }

    pub fn distance_to_origin(&self) -> f64 {
        (squared(self.x) + squared(self.y)).sqrt()
    }

    /// Write `Point(x, y)` and a newline.
    pub fn print<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{self}")
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::origin()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point({:.2}, {:.2})", self.x, self.y)
    }
}

/// A circle owning its center point.
///
/// The radius is stored as given; a negative radius is not rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    radius: f64,
    center: Point,
}

impl Circle {
    /// A circle centered at the origin.
    pub fn new(radius: f64) -> Self {
        Self::with_center(radius, 0.0, 0.0)
    }

    pub fn with_center(radius: f64, x: f64, y: f64) -> Self {
        Self {
            radius,
            center: Point::new(x, y),
        }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn area(&self) -> f64 {
        PI * squared(self.radius)
    }

    pub fn circumference(&self) -> f64 {
        2.0 * PI * self.radius
    }

    pub fn print<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "Circle with radius {:.2} at ", self.radius)?;
        self.center.print(out)
    }
}
