pub mod errors;
pub mod scheduler;
