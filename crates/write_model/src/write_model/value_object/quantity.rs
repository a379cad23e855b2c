#[derive(Debug, thiserror::Error)]
#[error("must be greater than 0")]
pub struct Error;

/// Number of units requested by an order or a restock (strictly positive)
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Quantity(u64);

impl TryFrom<i64> for Quantity {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::try_from(u64::try_from(value).map_err(|_| Error)?)
    }
}

impl TryFrom<u64> for Quantity {
    type Error = Error;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        if value == 0 {
            return Err(Error);
        }
        Ok(Self(value))
    }
}

impl From<Quantity> for u64 {
    fn from(value: Quantity) -> Self {
        value.0
    }
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
