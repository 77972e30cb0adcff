use crate::domain::common::AggregateId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор поставщика
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SupplierId(pub Uuid);

impl SupplierId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl AggregateId for SupplierId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(SupplierId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Поставщик. Справочник ведётся вне формы заказа, здесь только чтение.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: SupplierId,
    pub name: String,
}

impl Supplier {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: SupplierId::new_v4(),
            name: name.into(),
        }
    }
}

/// Имена поставщиков в исходном порядке (порядок задаёт вызывающая сторона)
pub fn supplier_names(suppliers: &[Supplier]) -> Vec<String> {
    suppliers.iter().map(|s| s.name.clone()).collect()
}
