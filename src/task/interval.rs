//! Half-open time interval occupied by a task.

use std::fmt::Display;

use qtty::{Quantity, Unit};

/// Half-open range `[start, end)` on the time axis.
///
/// Two intervals that only touch (`a.end == b.start`) share no point, so a task
/// ending exactly when another begins never conflicts with it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval<U: Unit> {
    start: Quantity<U>,
    end: Quantity<U>,
}

impl<U: Unit> Interval<U> {
    /// Creates interval `[start, end)`.
    ///
    /// # Panics
    ///
    /// Panics if `start > end`.
    pub const fn new(start: Quantity<U>, end: Quantity<U>) -> Self {
        assert!(
            start.value() <= end.value(),
            "Interval start must be <= end"
        );
        Self { start, end }
    }

    pub const fn from_f64(start: f64, end: f64) -> Self {
        Self::new(Quantity::<U>::new(start), Quantity::<U>::new(end))
    }

    pub const fn start(&self) -> Quantity<U> {
        self.start
    }

    pub const fn end(&self) -> Quantity<U> {
        self.end
    }

    pub fn duration(&self) -> Quantity<U> {
        self.end - self.start
    }

    /// Checks if this interval shares any point with another interval.
    pub const fn overlaps(&self, other: &Interval<U>) -> bool {
        self.start.value() < other.end.value() && other.start.value() < self.end.value()
    }

    /// Returns true if `other` starts no earlier than this interval ends.
    pub const fn precedes(&self, other: &Interval<U>) -> bool {
        self.end.value() <= other.start.value()
    }
}

impl<U: Unit> Display for Interval<U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:.3}, {:.3})", self.start.value(), self.end.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qtty::Second;

    fn iv(start: f64, end: f64) -> Interval<Second> {
        Interval::from_f64(start, end)
    }

    #[test]
    fn test_interval_creation() {
        let interval = Interval::new(Quantity::<Second>::new(0.0), Quantity::<Second>::new(100.0));
        assert_eq!(interval.duration().value(), 100.0);
        assert_eq!(interval.start().value(), 0.0);
        assert_eq!(interval.end().value(), 100.0);
    }

    #[test]
    #[should_panic(expected = "Interval start must be <= end")]
    fn test_reversed_interval_panics() {
        let _ = iv(10.0, 5.0);
    }

    #[test]
    fn test_interval_overlaps() {
        let a = iv(0.0, 100.0);
        let b = iv(50.0, 150.0);
        let c = iv(200.0, 300.0);

        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
        assert!(!c.overlaps(&a));
    }

    #[test]
    fn test_touching_intervals_do_not_overlap() {
        let a = iv(0.0, 5.0);
        let b = iv(5.0, 9.0);
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
        assert!(a.precedes(&b));
        assert!(!b.precedes(&a));
    }

    #[test]
    fn test_contained_interval_overlaps() {
        assert!(iv(0.0, 100.0).overlaps(&iv(10.0, 20.0)));
        assert!(iv(10.0, 20.0).overlaps(&iv(0.0, 100.0)));
    }

    #[test]
    fn test_display() {
        assert_eq!(iv(1.0, 2.5).to_string(), "[1.000, 2.500)");
    }
}
