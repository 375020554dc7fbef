//! Application state module

mod app_state;
mod forms;
mod notice;

pub use app_state::*;
pub use forms::*;
pub use notice::*;
