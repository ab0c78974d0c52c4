pub mod endpoints;
pub mod logic;
pub mod models;
pub mod utils;
