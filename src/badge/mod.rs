pub mod geometry;
pub mod spring;
pub mod value;
