pub mod warehouse;

pub use warehouse::WarehouseService;
