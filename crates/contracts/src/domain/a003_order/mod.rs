pub mod aggregate;

pub use aggregate::{OrderDraft, OrderDraftError, OrderField, OrderRecord};
