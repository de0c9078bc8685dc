pub mod resolve;
pub mod source;
