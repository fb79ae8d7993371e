pub mod data;
pub mod ports;
pub mod render;
pub mod scaling;
