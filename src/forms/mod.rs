pub mod chat;
pub mod todo;

pub use chat::*;
pub use todo::*;
