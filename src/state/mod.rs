//! Application state module

mod app_state;
mod collection;
pub mod env;
pub mod forms;

pub use app_state::*;
pub use collection::*;
pub use forms::*;
