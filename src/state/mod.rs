//! Application state module

mod app_state;
pub mod forms;
mod navigation;
mod result_view;

pub use app_state::*;
pub use forms::*;
pub use navigation::*;
pub use result_view::*;
