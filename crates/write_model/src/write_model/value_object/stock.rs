use super::Quantity;

#[derive(Debug, thiserror::Error)]
#[error("must not be negative")]
pub struct Error;

/// Number of available units
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Stock(u64);

impl Stock {
    pub fn checked_add(&self, quantity: Quantity) -> Option<Self> {
        self.0.checked_add(u64::from(quantity)).map(Self)
    }

    /// Returns `None` if fewer than `quantity` units are available.
    pub fn checked_sub(&self, quantity: Quantity) -> Option<Self> {
        self.0.checked_sub(u64::from(quantity)).map(Self)
    }
}

impl From<u64> for Stock {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<Stock> for u64 {
    fn from(value: Stock) -> Self {
        value.0
    }
}

impl TryFrom<i64> for Stock {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u64::try_from(value).map(Self).map_err(|_| Error)
    }
}

impl std::fmt::Display for Stock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
