mod warehouse;

pub use warehouse::{ApiErrorBody, ApiErrorObject, WarehouseError};
