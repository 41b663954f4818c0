pub mod aggregate;

pub use aggregate::{SaleId, SaleRecord};
