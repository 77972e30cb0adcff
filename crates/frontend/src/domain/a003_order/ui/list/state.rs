use contracts::domain::a001_supplier::Supplier;
use contracts::domain::a002_commercial::Commercial;
use contracts::domain::a003_order::OrderRecord;
use leptos::prelude::*;

/// In-memory register that feeds the order form and receives its records.
/// Nothing here survives a page reload.
#[derive(Clone, Debug)]
pub struct OrderRegisterState {
    pub orders: Vec<OrderRecord>,
    /// Most recently used supplier first
    pub suppliers: Vec<Supplier>,
    pub commercials: Vec<Commercial>,
    pub customers: Vec<String>,
    pub is_form_open: bool,
}

impl Default for OrderRegisterState {
    fn default() -> Self {
        Self {
            orders: Vec::new(),
            suppliers: ["Acciaierie Nord", "Metalli Sud", "Ferro & Co"]
                .into_iter()
                .map(Supplier::new)
                .collect(),
            commercials: ["Marco", "Anna", "Luca"]
                .into_iter()
                .map(Commercial::new)
                .collect(),
            customers: vec!["Rossi S.r.l.".to_string(), "Bianchi S.p.A.".to_string()],
            is_form_open: false,
        }
    }
}

impl OrderRegisterState {
    pub fn next_order_number(&self) -> i64 {
        self.orders
            .iter()
            .map(|o| o.order_number)
            .max()
            .map_or(1, |n| n + 1)
    }

    /// Store a record coming from the form and refresh the lookup lists:
    /// the record's supplier moves to the front, a new customer name becomes a suggestion.
    pub fn record_saved(&mut self, record: OrderRecord) {
        let supplier = match self
            .suppliers
            .iter()
            .position(|s| s.name == record.supplier)
        {
            Some(index) => self.suppliers.remove(index),
            None => Supplier::new(record.supplier.clone()),
        };
        self.suppliers.insert(0, supplier);

        if !self.customers.iter().any(|c| c == &record.customer) {
            self.customers.push(record.customer.clone());
        }

        self.orders.push(record);
    }
}

pub fn create_state() -> RwSignal<OrderRegisterState> {
    RwSignal::new(OrderRegisterState::default())
}
