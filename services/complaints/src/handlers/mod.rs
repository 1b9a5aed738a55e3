pub mod complaint;
pub mod image;
