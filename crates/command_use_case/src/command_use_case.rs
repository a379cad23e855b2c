pub mod constraint_violation;
pub mod order_product;
pub mod port;
pub mod restock_product;
