//! Order Details - ViewModel
//!
//! Holds the draft as one signal per field. Reference lists come from the caller
//! and are never modified here.

use crate::shared::date_utils::today_iso;
use contracts::domain::a001_supplier::{supplier_names, Supplier};
use contracts::domain::a002_commercial::{sort_by_name, Commercial};
use contracts::domain::a003_order::{OrderDraft, OrderRecord};
use leptos::prelude::*;

/// Shown in place of the commercial select when the list is empty
pub const NO_COMMERCIALS_MESSAGE: &str =
    "Нет ни одного коммерческого агента. Добавьте агентов в справочнике «Коммерческие агенты».";

/// What the commercial field renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommercialField {
    /// Sorted by name
    Select(Vec<Commercial>),
    NotConfigured,
}

/// ViewModel for Order Details form
#[derive(Clone, Copy)]
pub struct OrderDetailsVm {
    // Draft fields
    pub date: RwSignal<String>,
    pub supplier: RwSignal<String>,
    pub material: RwSignal<String>,
    pub service_description: RwSignal<String>,
    pub customer: RwSignal<String>,
    pub commercial: RwSignal<String>,

    // Derived from caller-supplied lists
    pub supplier_names: Memo<Vec<String>>,
    pub sorted_commercials: Memo<Vec<Commercial>>,
    suppliers: Signal<Vec<Supplier>>,
}

impl OrderDetailsVm {
    pub fn new(suppliers: Signal<Vec<Supplier>>, commercials: Signal<Vec<Commercial>>) -> Self {
        Self {
            date: RwSignal::new(String::new()),
            supplier: RwSignal::new(String::new()),
            material: RwSignal::new(String::new()),
            service_description: RwSignal::new(String::new()),
            customer: RwSignal::new(String::new()),
            commercial: RwSignal::new(String::new()),
            supplier_names: Memo::new(move |_| suppliers.with(|list| supplier_names(list))),
            sorted_commercials: Memo::new(move |_| commercials.with(|list| sort_by_name(list))),
            suppliers,
        }
    }

    /// Seed date, supplier and commercial. Tracks both lists, so running it
    /// inside an effect re-applies the defaults whenever a list changes.
    pub fn apply_defaults(&self) {
        self.date.set(today_iso());

        if let Some(first) = self.suppliers.with(|list| list.first().map(|s| s.name.clone())) {
            self.supplier.set(first);
        }

        match self
            .sorted_commercials
            .with(|list| list.first().map(|c| c.name.clone()))
        {
            Some(first) => self.commercial.set(first),
            None => log::warn!("Order form opened without commercials"),
        }

        log::debug!(
            "Order defaults applied: supplier='{}', commercial='{}'",
            self.supplier.get_untracked(),
            self.commercial.get_untracked()
        );
    }

    /// Re-apply defaults on open and whenever the supplier or commercial list changes
    pub fn track_defaults(&self) {
        let vm = *self;
        Effect::new(move |_| {
            vm.apply_defaults();
        });
    }

    pub fn commercial_field(&self) -> CommercialField {
        let sorted = self.sorted_commercials.get();
        if sorted.is_empty() {
            CommercialField::NotConfigured
        } else {
            CommercialField::Select(sorted)
        }
    }

    pub fn has_commercials(&self) -> bool {
        self.sorted_commercials.with(|list| !list.is_empty())
    }

    pub fn draft(&self) -> OrderDraft {
        OrderDraft {
            date: self.date.get(),
            supplier: self.supplier.get(),
            material: self.material.get(),
            service_description: self.service_description.get(),
            customer: self.customer.get(),
            commercial: self.commercial.get(),
        }
    }

    /// Drives the disabled state of the save button
    pub fn is_submit_enabled(&self) -> bool {
        self.draft().can_submit(self.has_commercials())
    }

    /// Hand the record over to `on_saved`. An incomplete draft is ignored and the
    /// form stays open.
    pub fn save_command(&self, order_number: i64, on_saved: impl FnOnce(OrderRecord)) {
        let draft = self.draft();
        match draft.to_record(order_number, self.has_commercials()) {
            Ok(record) => {
                log::info!(
                    "Order #{} saved: supplier='{}', customer='{}'",
                    record.order_number,
                    record.supplier,
                    record.customer
                );
                on_saved(record);
            }
            Err(e) => log::debug!(
                "Order submit ignored: {} (missing: {:?})",
                e,
                draft.missing_fields()
            ),
        }
    }

    pub fn cancel_command(&self, on_cancel: impl FnOnce()) {
        log::debug!("Order form cancelled");
        on_cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;
    use std::cell::{Cell, RefCell};

    struct Fixture {
        _owner: Owner,
        suppliers: RwSignal<Vec<Supplier>>,
        commercials: RwSignal<Vec<Commercial>>,
        vm: OrderDetailsVm,
    }

    fn fixture(suppliers: &[&str], commercials: &[&str]) -> Fixture {
        let owner = Owner::new();
        owner.set();

        let suppliers: RwSignal<Vec<Supplier>> =
            RwSignal::new(suppliers.iter().map(|n| Supplier::new(*n)).collect());
        let commercials: RwSignal<Vec<Commercial>> =
            RwSignal::new(commercials.iter().map(|n| Commercial::new(*n)).collect());
        let vm = OrderDetailsVm::new(suppliers.into(), commercials.into());
        vm.apply_defaults();

        Fixture {
            _owner: owner,
            suppliers,
            commercials,
            vm,
        }
    }

    fn fill(vm: &OrderDetailsVm) {
        vm.customer.set("Rossi".to_string());
        vm.material.set("Steel sheet".to_string());
    }

    fn commercial_names(vm: &OrderDetailsVm) -> Vec<String> {
        vm.sorted_commercials
            .get()
            .into_iter()
            .map(|c| c.name)
            .collect()
    }

    #[test]
    fn test_defaults_on_open() {
        let f = fixture(&["Recent Ltd", "Older Ltd"], &["Bob", "Ana"]);
        assert_eq!(f.vm.supplier.get(), "Recent Ltd");
        assert_eq!(f.vm.commercial.get(), "Ana");
        assert_eq!(f.vm.date.get(), today_iso());
        assert!(f.vm.customer.get().is_empty());
        assert!(f.vm.material.get().is_empty());
    }

    #[test]
    fn test_defaults_with_empty_lists() {
        let f = fixture(&[], &[]);
        assert!(f.vm.supplier.get().is_empty());
        assert!(f.vm.commercial.get().is_empty());
        assert_eq!(f.vm.date.get(), today_iso());
    }

    #[test]
    fn test_commercials_resorted_on_change() {
        let f = fixture(&["Acme"], &["Zoe"]);
        f.commercials
            .set(vec![Commercial::new("Bob"), Commercial::new("Ana")]);
        assert_eq!(commercial_names(&f.vm), vec!["Ana", "Bob"]);

        f.vm.apply_defaults();
        assert_eq!(f.vm.commercial.get(), "Ana");
    }

    #[test]
    fn test_supplier_default_follows_list() {
        let f = fixture(&["Acme"], &["Ana"]);
        f.suppliers
            .set(vec![Supplier::new("Beta"), Supplier::new("Acme")]);
        f.vm.apply_defaults();
        assert_eq!(f.vm.supplier.get(), "Beta");
        assert_eq!(f.vm.supplier_names.get(), vec!["Beta", "Acme"]);
    }

    #[test]
    fn test_save_once_with_verbatim_fields() {
        let f = fixture(&["Acme"], &["Ana"]);
        fill(&f.vm);
        f.vm.service_description.set("Cut to size".to_string());

        let calls = Cell::new(0);
        let saved = RefCell::new(None);
        f.vm.save_command(17, |record| {
            calls.set(calls.get() + 1);
            *saved.borrow_mut() = Some(record);
        });

        assert_eq!(calls.get(), 1);
        let record = saved.into_inner().unwrap();
        assert_eq!(record.order_number, 17);
        assert_eq!(record.date, today_iso());
        assert_eq!(record.supplier, "Acme");
        assert_eq!(record.customer, "Rossi");
        assert_eq!(record.material, "Steel sheet");
        assert_eq!(record.service_description, "Cut to size");
        assert_eq!(record.commercial, "Ana");
    }

    #[test]
    fn test_save_ignored_when_required_field_empty() {
        let clears: [fn(&OrderDetailsVm); 5] = [
            |vm| vm.date.set(String::new()),
            |vm| vm.customer.set(String::new()),
            |vm| vm.supplier.set(String::new()),
            |vm| vm.material.set(String::new()),
            |vm| vm.commercial.set(String::new()),
        ];

        for clear in clears {
            let f = fixture(&["Acme"], &["Ana"]);
            fill(&f.vm);
            clear(&f.vm);

            let calls = Cell::new(0);
            f.vm.save_command(1, |_| calls.set(calls.get() + 1));
            assert_eq!(calls.get(), 0);
        }
    }

    #[test]
    fn test_no_commercials_disables_submit() {
        let f = fixture(&["Acme"], &[]);
        fill(&f.vm);
        assert!(!f.vm.has_commercials());
        assert!(!f.vm.is_submit_enabled());

        // a stale value must not get through either
        f.vm.commercial.set("Ana".to_string());
        let calls = Cell::new(0);
        f.vm.save_command(1, |_| calls.set(calls.get() + 1));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_submit_enabled_state() {
        let f = fixture(&["Acme"], &["Ana"]);
        assert!(!f.vm.is_submit_enabled());

        fill(&f.vm);
        assert!(f.vm.is_submit_enabled());

        f.vm.customer.set(String::new());
        assert!(!f.vm.is_submit_enabled());
    }

    #[test]
    fn test_commercial_field_without_commercials() {
        let f = fixture(&["Acme"], &[]);
        fill(&f.vm);
        assert_eq!(f.vm.commercial_field(), CommercialField::NotConfigured);
        assert!(!f.vm.is_submit_enabled());
        assert!(NO_COMMERCIALS_MESSAGE.contains("Коммерческие агенты"));
    }

    #[test]
    fn test_commercial_field_follows_list() {
        let f = fixture(&["Acme"], &["Bob", "Ana"]);
        match f.vm.commercial_field() {
            CommercialField::Select(list) => {
                let names: Vec<_> = list.into_iter().map(|c| c.name).collect();
                assert_eq!(names, vec!["Ana", "Bob"]);
            }
            CommercialField::NotConfigured => panic!("commercials are configured"),
        }

        f.commercials.set(Vec::new());
        assert_eq!(f.vm.commercial_field(), CommercialField::NotConfigured);
    }

    #[tokio::test]
    async fn test_defaults_reapplied_when_lists_change() {
        _ = any_spawner::Executor::init_tokio();
        let owner = Owner::new();
        owner.set();

        tokio::task::LocalSet::new()
            .run_until(async {
                let suppliers: RwSignal<Vec<Supplier>> =
                    RwSignal::new(vec![Supplier::new("Acme")]);
                let commercials: RwSignal<Vec<Commercial>> =
                    RwSignal::new(vec![Commercial::new("Zoe")]);
                let vm = OrderDetailsVm::new(suppliers.into(), commercials.into());
                vm.track_defaults();

                any_spawner::Executor::tick().await;
                assert_eq!(vm.commercial.get_untracked(), "Zoe");
                assert_eq!(vm.supplier.get_untracked(), "Acme");
                assert_eq!(vm.date.get_untracked(), today_iso());

                commercials.set(vec![Commercial::new("Bob"), Commercial::new("Ana")]);
                any_spawner::Executor::tick().await;
                assert_eq!(vm.commercial.get_untracked(), "Ana");

                suppliers.set(vec![Supplier::new("Beta"), Supplier::new("Acme")]);
                any_spawner::Executor::tick().await;
                assert_eq!(vm.supplier.get_untracked(), "Beta");
            })
            .await;
    }

    #[test]
    fn test_cancel_always_calls_back_once() {
        let f = fixture(&["Acme"], &["Ana"]);
        let calls = Cell::new(0);
        f.vm.cancel_command(|| calls.set(calls.get() + 1));
        assert_eq!(calls.get(), 1);

        fill(&f.vm);
        let calls = Cell::new(0);
        f.vm.cancel_command(|| calls.set(calls.get() + 1));
        assert_eq!(calls.get(), 1);
    }
}
