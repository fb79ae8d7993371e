pub mod colour;
pub mod complex;
pub mod execution_mode;
pub mod image_matrix;
pub mod iteration_cap;
pub mod pixel_buffer;
pub mod viewport;
