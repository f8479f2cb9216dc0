pub mod respond;
pub mod router;
pub mod routes;
