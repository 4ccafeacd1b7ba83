pub mod compose;
pub mod document;
pub mod error;
pub mod origin;
pub mod viewport;
