pub mod chat;
pub mod health_checks;
pub mod todo;

pub use health_checks::*;
