pub mod language;
pub mod speech;
