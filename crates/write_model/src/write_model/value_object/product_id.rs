#[derive(Debug, thiserror::Error)]
#[error("must be greater than 0")]
pub struct Error;

/// Externally assigned product identifier (strictly positive)
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ProductId(i64);

impl TryFrom<i64> for ProductId {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value <= 0 {
            return Err(Error);
        }
        Ok(Self(value))
    }
}

impl From<ProductId> for i64 {
    fn from(value: ProductId) -> Self {
        value.0
    }
}

impl std::str::FromStr for ProductId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s.parse::<i64>().map_err(|_| Error)?)
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
