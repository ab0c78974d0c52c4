pub mod counter;
pub mod errors;
pub mod load_result;
pub mod response;
