pub mod state;

use self::state::create_state;
use super::details::OrderDetails;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use contracts::domain::a003_order::OrderRecord;
use leptos::prelude::*;
use thaw::*;

/// Register of orders entered in this session. Owns the lookup lists and
/// order numbering; the form itself only edits one draft.
#[component]
pub fn OrderList() -> impl IntoView {
    let state = create_state();

    let next_order_number = Memo::new(move |_| state.with(|s| s.next_order_number()));
    let suppliers = Memo::new(move |_| state.with(|s| s.suppliers.clone()));
    let commercials = Memo::new(move |_| state.with(|s| s.commercials.clone()));
    let customers = Memo::new(move |_| state.with(|s| s.customers.clone()));
    let orders = Memo::new(move |_| state.with(|s| s.orders.clone()));

    let open_form = move |_| state.update(|s| s.is_form_open = true);
    let close_form = Callback::new(move |_| state.update(|s| s.is_form_open = false));

    let on_saved = Callback::new(move |record: OrderRecord| {
        state.update(|s| {
            s.record_saved(record);
            s.is_form_open = false;
        });
    });

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    {icon("orders")}
                    <h1 class="page__title">"Заказы"</h1>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Primary on_click=open_form>
                        {icon("plus")}
                        " Новый заказ"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <Show
                    when=move || !orders.get().is_empty()
                    fallback=|| view! { <p style="color: var(--color-text-tertiary);">"Заказов пока нет"</p> }
                >
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"№"</TableHeaderCell>
                                <TableHeaderCell>"Дата"</TableHeaderCell>
                                <TableHeaderCell>"Поставщик"</TableHeaderCell>
                                <TableHeaderCell>"Клиент"</TableHeaderCell>
                                <TableHeaderCell>"Материал"</TableHeaderCell>
                                <TableHeaderCell>"Услуга"</TableHeaderCell>
                                <TableHeaderCell>"Агент"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || orders.get()
                                key=|o| o.order_number
                                children=move |o| {
                                    view! {
                                        <TableRow>
                                            <TableCell>{o.order_number}</TableCell>
                                            <TableCell>{format_date(&o.date)}</TableCell>
                                            <TableCell>{o.supplier}</TableCell>
                                            <TableCell>{o.customer}</TableCell>
                                            <TableCell>{o.material}</TableCell>
                                            <TableCell>{o.service_description}</TableCell>
                                            <TableCell>{o.commercial}</TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </Show>
            </div>

            <Show when=move || state.with(|s| s.is_form_open)>
                <ModalFrame on_close=close_form modal_style="max-width: min(960px, 95vw);">
                    <OrderDetails
                        next_order_number=next_order_number
                        suppliers=suppliers
                        commercials=commercials
                        available_customers=customers
                        on_saved=on_saved
                        on_cancel=close_form
                    />
                </ModalFrame>
            </Show>
        </div>
    }
}
