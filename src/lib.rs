pub mod bootstrap;
pub mod config;
pub mod db;
pub mod error;
pub mod server;
pub mod service;
pub(crate) mod utils;

pub use db::{Gadget, Widget};
pub use error::WarehouseError;
pub use server::respond::RowCount;
