pub mod container;
pub mod image;
pub mod scaffold;
pub mod validate;
pub mod vm;
