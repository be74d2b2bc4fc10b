pub mod constants;
pub mod data_backend;
pub mod data_types;
pub mod errors;
pub mod routes;
pub mod selection_store;
pub mod shared_main;
