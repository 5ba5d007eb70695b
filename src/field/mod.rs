pub mod editables;
pub mod id;
pub mod kind;
pub mod variant;

pub use editables::*;
pub use id::*;
pub use kind::*;
pub use variant::*;
