pub mod checker;
pub mod rule;

pub use checker::*;
pub use rule::*;
