use crate::value_object::{ProductId, ProductName, Quantity, Stock, Version};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("insufficient stock (stock = {stock}, quantity = {quantity})")]
    InsufficientStock { stock: Stock, quantity: Quantity },
    #[error("stock overflow")]
    StockOverflow,
    #[error("version overflow")]
    VersionOverflow,
}

/// A product and its stock.
///
/// Mutations never modify `self`. They return a whole replacement record with the same id and
/// name, a new stock and the next version, so that a store can swap it in atomically.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Product {
    id: ProductId,
    name: ProductName,
    stock: Stock,
    version: Version,
}

impl Product {
    pub fn create(id: ProductId, name: ProductName, stock: Stock) -> Self {
        Self {
            id,
            name,
            stock,
            version: Version::new(),
        }
    }

    pub fn reconstruct(id: ProductId, name: ProductName, stock: Stock, version: Version) -> Self {
        Self {
            id,
            name,
            stock,
            version,
        }
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &ProductName {
        &self.name
    }

    pub fn order(&self, quantity: Quantity) -> Result<Self, Error> {
        let stock = self
            .stock
            .checked_sub(quantity)
            .ok_or(Error::InsufficientStock {
                stock: self.stock,
                quantity,
            })?;
        self.replace_stock(stock)
    }

    pub fn restock(&self, quantity: Quantity) -> Result<Self, Error> {
        let stock = self
            .stock
            .checked_add(quantity)
            .ok_or(Error::StockOverflow)?;
        self.replace_stock(stock)
    }

    pub fn stock(&self) -> Stock {
        self.stock
    }

    pub fn version(&self) -> Version {
        self.version
    }

    fn replace_stock(&self, stock: Stock) -> Result<Self, Error> {
        Ok(Self {
            id: self.id,
            name: self.name.clone(),
            stock,
            version: self.version.next().map_err(|_| Error::VersionOverflow)?,
        })
    }
}
