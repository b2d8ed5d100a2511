pub mod document;
pub mod environment;
pub mod value;
