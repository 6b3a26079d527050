pub mod colored;
pub mod term_size;
