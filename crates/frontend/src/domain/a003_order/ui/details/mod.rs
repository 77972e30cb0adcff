//! Order Details UI Module
//!
//! MVVM split:
//! - view_model.rs: draft signals, defaults, save/cancel commands
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::OrderDetails;
pub use view_model::OrderDetailsVm;
