//! Order Details - View Component
//!
//! Entry form for a new order. Lists and the order number come from the caller;
//! the finished record goes back through `on_saved`.

use super::view_model::{CommercialField, OrderDetailsVm, NO_COMMERCIALS_MESSAGE};
use crate::shared::components::{DateInput, SuggestInput};
use crate::shared::icons::icon;
use contracts::domain::a001_supplier::Supplier;
use contracts::domain::a002_commercial::Commercial;
use contracts::domain::a003_order::OrderRecord;
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn OrderDetails(
    #[prop(into)] next_order_number: Signal<i64>,
    /// Most recently used first
    #[prop(into)]
    suppliers: Signal<Vec<Supplier>>,
    #[prop(into)] commercials: Signal<Vec<Commercial>>,
    #[prop(into)] available_customers: Signal<Vec<String>>,
    on_saved: Callback<OrderRecord>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = OrderDetailsVm::new(suppliers, commercials);

    vm.track_defaults();

    let handle_save = move |_| {
        vm.save_command(next_order_number.get_untracked(), |record| {
            on_saved.run(record)
        });
    };

    let handle_cancel = move |_| {
        vm.cancel_command(|| on_cancel.run(()));
    };

    let save_disabled = Signal::derive(move || !vm.is_submit_enabled());

    view! {
        <div class="details-form" style="padding: 20px;">
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center style="margin-bottom: 20px;">
                <h2 style="font-size: 20px; font-weight: bold;">"Новый заказ"</h2>
                <Space>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=handle_save
                        disabled=save_disabled
                    >
                        {icon("save")}
                        " Сохранить"
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=handle_cancel>
                        {icon("close")}
                        " Отмена"
                    </Button>
                </Space>
            </Flex>

            <div style="display: grid; grid-template-columns: 420px 420px; gap: var(--spacing-md); align-items: start;">
                <Card>
                    <div class="form__group">
                        <label class="form__label" for="order_number">"Номер заказа"</label>
                        <input
                            class="form__input"
                            type="text"
                            id="order_number"
                            readonly=true
                            prop:value=move || next_order_number.get().to_string()
                        />
                    </div>

                    <div class="form__group">
                        <label class="form__label" for="order_date">
                            "Дата"
                            <span style="color: red;">"*"</span>
                        </label>
                        <DateInput
                            id="order_date"
                            value=vm.date
                            on_change=move |value| vm.date.set(value)
                        />
                    </div>

                    <div class="form__group">
                        <label class="form__label" for="order_customer">
                            "Клиент"
                            <span style="color: red;">"*"</span>
                        </label>
                        <SuggestInput
                            id="order_customer"
                            value=vm.customer
                            suggestions=available_customers
                            placeholder="Начните вводить имя клиента"
                        />
                    </div>

                    <div class="form__group">
                        <label class="form__label" for="order_commercial">
                            "Коммерческий агент"
                            <span style="color: red;">"*"</span>
                        </label>
                        {move || match vm.commercial_field() {
                            CommercialField::Select(list) => {
                                view! {
                                    <select
                                        id="order_commercial"
                                        class="form__select"
                                        on:change=move |ev| vm.commercial.set(event_target_value(&ev))
                                    >
                                        <For
                                            each=move || list.clone()
                                            key=|c| c.id
                                            children=move |c| {
                                                let value = c.name.clone();
                                                let name = c.name.clone();
                                                let is_selected = move || vm.commercial.get() == name;
                                                view! {
                                                    <option value=value selected=is_selected>
                                                        {c.name}
                                                    </option>
                                                }
                                            }
                                        />
                                    </select>
                                }
                                    .into_any()
                            }
                            CommercialField::NotConfigured => {
                                view! {
                                    <div style="padding: 12px; background: var(--color-error-50); border: 1px solid var(--color-error-100); border-radius: 8px; color: var(--color-error); display: flex; gap: 8px; align-items: center;">
                                        {icon("alert")}
                                        <span>{NO_COMMERCIALS_MESSAGE}</span>
                                    </div>
                                }
                                    .into_any()
                            }
                        }}
                    </div>
                </Card>

                <Card>
                    <div class="form__group">
                        <label class="form__label" for="order_supplier">
                            "Поставщик"
                            <span style="color: red;">"*"</span>
                        </label>
                        <SuggestInput
                            id="order_supplier"
                            value=vm.supplier
                            suggestions=vm.supplier_names
                            placeholder="Начните вводить поставщика"
                        />
                    </div>

                    <div class="form__group">
                        <label class="form__label">
                            "Материал"
                            <span style="color: red;">"*"</span>
                        </label>
                        <Input value=vm.material placeholder="Например: лист стальной 2 мм" />
                    </div>

                    <div class="form__group">
                        <label class="form__label">"Описание услуги"</label>
                        <Textarea
                            attr:style="min-height: 80px"
                            value=vm.service_description
                            placeholder="Необязательно"
                        />
                    </div>
                </Card>
            </div>
        </div>
    }
}
