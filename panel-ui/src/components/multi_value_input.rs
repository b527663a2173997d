//! Multi-value Input Component
//!
//! Dynamic list of text inputs for list fields (emojis, race, ethnicity).

use leptos::*;

use dreamworks_panel::panel::MultiValueField;

#[component]
pub fn MultiValueInput(
    label: &'static str,
    #[prop(default = "")]
    placeholder: &'static str,
    #[prop(into)]
    field: Signal<MultiValueField>,
    #[prop(into)]
    on_change: Callback<MultiValueField>,
) -> impl IntoView {
    let edit = move |apply: Box<dyn FnOnce(&mut MultiValueField)>| {
        let mut current = field.get_untracked();
        apply(&mut current);
        on_change.call(current);
    };

    view! {
        <div class="space-y-2">
            <label class="block text-sm font-medium text-gray-700">{label}</label>
            {move || {
                field.get()
                    .values()
                    .iter()
                    .cloned()
                    .enumerate()
                    .map(|(index, value)| view! {
                        <div class="flex space-x-2">
                            <input
                                class="flex-1 px-3 py-2 border rounded-lg"
                                placeholder=placeholder
                                prop:value=value
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    edit(Box::new(move |f| f.update(index, value)));
                                }
                            />
                            <button
                                type="button"
                                class="px-3 text-red-500 hover:text-red-700"
                                on:click=move |_| edit(Box::new(move |f| f.remove(index)))
                            >
                                "−"
                            </button>
                        </div>
                    })
                    .collect_view()
            }}
            <button
                type="button"
                class="text-sm text-blue-600 hover:underline"
                on:click=move |_| edit(Box::new(|f| f.add()))
            >
                "+ Adicionar"
            </button>
        </div>
    }
}
