pub mod decoder;
pub mod formatter;
