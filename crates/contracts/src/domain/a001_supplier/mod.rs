pub mod aggregate;

pub use aggregate::{supplier_names, Supplier, SupplierId};
