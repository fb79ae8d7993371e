pub mod errors;
pub mod harness;
pub mod ports;
pub mod report;
pub mod scaling_config;
pub mod scheduler_workload;
pub mod speedup_model;
pub mod statistics;
