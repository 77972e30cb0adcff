use contracts::shared::suggestions::{filter_suggestions, SUGGESTION_LIMIT};
use leptos::ev;
use leptos::prelude::*;

/// Free-text input with a dropdown of suggestions.
///
/// Suggestions only speed up typing: any value can be entered.
#[component]
pub fn SuggestInput(
    #[prop(into)] id: String,
    value: RwSignal<String>,
    #[prop(into)] suggestions: Signal<Vec<String>>,
    #[prop(optional, into)] placeholder: MaybeProp<String>,
) -> impl IntoView {
    let is_open = RwSignal::new(false);

    let visible = Memo::new(move |_| {
        let items = suggestions.get();
        value.with(|current| {
            filter_suggestions(items.iter().map(String::as_str), current, SUGGESTION_LIMIT)
        })
    });

    view! {
        <div style="position: relative;">
            <input
                class="form__input"
                type="text"
                id=id
                autocomplete="off"
                prop:value=move || value.get()
                placeholder=move || placeholder.get().unwrap_or_default()
                on:input=move |ev| {
                    value.set(event_target_value(&ev));
                    is_open.set(true);
                }
                on:focus=move |_| is_open.set(true)
                on:blur=move |_| is_open.set(false)
                on:keydown=move |ev: ev::KeyboardEvent| {
                    if ev.key() == "Escape" {
                        is_open.set(false);
                    }
                }
            />

            {move || {
                let options = visible.get();
                if !is_open.get() || options.is_empty() {
                    return view! { <></> }.into_any();
                }
                view! {
                    <div style="position: absolute; top: calc(100% + 4px); left: 0; right: 0; max-height: 220px; overflow-y: auto; background: var(--color-surface); border: 1px solid var(--color-border); border-radius: var(--radius-md); box-shadow: var(--shadow-md); z-index: 1000;">
                        {options
                            .into_iter()
                            .map(|option| {
                                // mousedown fires before the input loses focus
                                let picked = option.clone();
                                view! {
                                    <div
                                        style="padding: 8px 12px; cursor: pointer; border-bottom: 1px solid var(--color-border-light);"
                                        on:mousedown=move |_| {
                                            value.set(picked.clone());
                                            is_open.set(false);
                                        }
                                    >
                                        {option}
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                }
                    .into_any()
            }}
        </div>
    }
}
