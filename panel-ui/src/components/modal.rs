//! Modal Component
//!
//! Overlay dialog hosting the create/edit forms.

use leptos::*;

#[component]
pub fn Modal(
    #[prop(into)]
    open: Signal<bool>,
    #[prop(into)]
    title: Signal<String>,
    #[prop(into)]
    on_close: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    let children = store_value(children);

    view! {
        <Show when=move || open.get()>
            <div class="fixed inset-0 z-40 flex items-center justify-center bg-black/50">
                <div class="bg-white rounded-xl shadow-xl w-full max-w-2xl max-h-[90vh] overflow-y-auto">
                    <div class="flex items-center justify-between px-6 py-4 border-b">
                        <h2 class="text-xl font-semibold">{move || title.get()}</h2>
                        <button
                            class="text-gray-400 hover:text-gray-600 text-2xl"
                            on:click=move |_| on_close.call(())
                        >
                            "×"
                        </button>
                    </div>
                    <div class="px-6 py-4">
                        {children.with_value(|children| children())}
                    </div>
                </div>
            </div>
        </Show>
    }
}
