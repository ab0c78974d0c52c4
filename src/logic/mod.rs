pub mod counter;
pub mod loader;
