use std::fmt::Display;

/// A monetary amount in minor units (cents).
///
/// Kept as an integer so records can derive `Eq`, `Hash` and `Ord`; it only
/// becomes a decimal when rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price(i64);

impl Price {
    #[cfg(test)]
    pub const ZERO: Self = Self(0);

    pub const fn from_minor(amount: i64) -> Self {
        Self(amount)
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl Display for Price {
    /// Renders the shortest decimal form with at least one fractional digit,
    /// ex. `599` -> `5.99`, `1250` -> `12.5`, `0` -> `0.0`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let (whole, cents) = (abs / 100, abs % 100);
        if cents % 10 == 0 {
            write!(f, "{sign}{whole}.{}", cents / 10)
        } else {
            write!(f, "{sign}{whole}.{cents:02}")
        }
    }
}
