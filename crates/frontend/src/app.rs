use crate::domain::a003_order::ui::OrderList;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <OrderList />
    }
}
