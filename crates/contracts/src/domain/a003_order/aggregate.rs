use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Fields
// ============================================================================

/// Обязательные поля заказа, в порядке отображения на форме
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderField {
    Date,
    Customer,
    Supplier,
    Material,
    Commercial,
}

impl OrderField {
    pub const REQUIRED: [OrderField; 5] = [
        OrderField::Date,
        OrderField::Customer,
        OrderField::Supplier,
        OrderField::Material,
        OrderField::Commercial,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            OrderField::Date => "Дата",
            OrderField::Customer => "Клиент",
            OrderField::Supplier => "Поставщик",
            OrderField::Material => "Материал",
            OrderField::Commercial => "Коммерческий агент",
        }
    }
}

impl std::fmt::Display for OrderField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Почему черновик нельзя превратить в заказ
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderDraftError {
    #[error("Не заполнено поле «{0}»")]
    MissingField(OrderField),

    #[error("Не настроен ни один коммерческий агент")]
    NoCommercials,
}

// ============================================================================
// Draft
// ============================================================================

/// Черновик заказа: живёт только пока открыта форма
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    /// yyyy-mm-dd
    pub date: String,
    pub supplier: String,
    pub material: String,
    pub service_description: String,
    pub customer: String,
    pub commercial: String,
}

impl OrderDraft {
    pub fn value(&self, field: OrderField) -> &str {
        match field {
            OrderField::Date => &self.date,
            OrderField::Customer => &self.customer,
            OrderField::Supplier => &self.supplier,
            OrderField::Material => &self.material,
            OrderField::Commercial => &self.commercial,
        }
    }

    /// Незаполненные обязательные поля
    pub fn missing_fields(&self) -> Vec<OrderField> {
        OrderField::REQUIRED
            .into_iter()
            .filter(|field| self.value(*field).is_empty())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Состояние кнопки сохранения. Дата и агент здесь не проверяются:
    /// дата всегда проставлена по умолчанию, а агент выбирается из закрытого списка.
    pub fn can_submit(&self, has_commercials: bool) -> bool {
        has_commercials
            && !self.supplier.is_empty()
            && !self.customer.is_empty()
            && !self.material.is_empty()
    }

    /// Собрать заказ. Значения полей переносятся как есть: строка из пробелов
    /// считается заполненной и не обрезается.
    pub fn to_record(
        &self,
        order_number: i64,
        has_commercials: bool,
    ) -> Result<OrderRecord, OrderDraftError> {
        if !has_commercials {
            return Err(OrderDraftError::NoCommercials);
        }
        if let Some(field) = self.missing_fields().into_iter().next() {
            return Err(OrderDraftError::MissingField(field));
        }

        Ok(OrderRecord {
            date: self.date.clone(),
            order_number,
            supplier: self.supplier.clone(),
            customer: self.customer.clone(),
            material: self.material.clone(),
            service_description: self.service_description.clone(),
            commercial: self.commercial.clone(),
        })
    }
}

// ============================================================================
// Record
// ============================================================================

/// Готовый заказ, который форма передаёт в on_save
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    pub date: String,
    pub order_number: i64,
    pub supplier: String,
    pub customer: String,
    pub material: String,
    pub service_description: String,
    pub commercial: String,
}
