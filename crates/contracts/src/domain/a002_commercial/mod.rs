pub mod aggregate;

pub use aggregate::{compare_names, sort_by_name, Commercial, CommercialId};
