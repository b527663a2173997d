//! Image Input Component
//!
//! File picker for `image/*` plus a preview. The picked file stays a
//! browser handle until submit, when the page reads its bytes.

use leptos::*;

#[component]
pub fn ImageInput(
    label: &'static str,
    /// Current image URL shown until a new file is picked
    #[prop(into)]
    preview: Signal<String>,
    file: RwSignal<Option<web_sys::File>>,
) -> impl IntoView {
    let on_change = move |ev: ev::Event| {
        let input: web_sys::HtmlInputElement = event_target(&ev);
        file.set(input.files().and_then(|files| files.get(0)));
    };

    view! {
        <div class="space-y-2">
            <label class="block text-sm font-medium text-gray-700">{label}</label>
            <div class="flex items-center space-x-4">
                <img src=move || preview.get() class="w-16 h-16 object-cover rounded" alt=label />
                <input type="file" accept="image/*" on:change=on_change />
            </div>
            {move || file.with(|f| f.as_ref().map(|f| view! {
                <span class="text-xs text-gray-500">{f.name()}</span>
            }))}
        </div>
    }
}
