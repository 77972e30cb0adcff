pub mod details;
pub mod list;

pub use details::OrderDetails;
pub use list::OrderList;
