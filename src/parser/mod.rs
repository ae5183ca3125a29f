pub mod loader;
pub mod record;
pub mod text;

pub use loader::*;
pub use record::{DraftRecord, PlayerDimension, PlayerStatRecord, Value};
