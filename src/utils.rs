pub mod image;
pub mod iterator;
pub mod viewer;
