pub mod assistant;

pub use assistant::Assistant;
