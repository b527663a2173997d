//! Status toasts pinned to the top-right corner of the panel

use leptos::*;

use dreamworks_panel::panel::ToastKind;

use crate::state::use_global;

/// Heading, accent border and icon for a toast kind
pub fn toast_style(kind: ToastKind) -> (&'static str, &'static str, &'static str) {
    match kind {
        ToastKind::Success => ("Sucesso", "border-emerald-500 text-emerald-700", "✔"),
        ToastKind::Error => ("Erro", "border-rose-500 text-rose-700", "⚠"),
    }
}

/// Renders the current success and error messages from `GlobalState`
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_global();

    view! {
        <section class="fixed top-20 right-6 z-[60] flex w-80 flex-col gap-3" aria-live="polite">
            {move || state.error.get().map(|message| view! {
                <ToastCard kind=ToastKind::Error message=message slot=state.error />
            })}
            {move || state.success.get().map(|message| view! {
                <ToastCard kind=ToastKind::Success message=message slot=state.success />
            })}
        </section>
    }
}

#[component]
fn ToastCard(
    kind: ToastKind,
    #[prop(into)] message: String,
    slot: RwSignal<Option<String>>,
) -> impl IntoView {
    let (heading, accent, icon) = toast_style(kind);

    view! {
        <div
            role="status"
            class=format!("flex items-start gap-3 rounded-md border-l-4 bg-white px-4 py-3 shadow-md {accent}")
        >
            <span class="mt-0.5 text-base">{icon}</span>
            <div class="flex-1">
                <p class="text-xs font-semibold uppercase tracking-wide">{heading}</p>
                <p class="text-sm text-gray-700">{message}</p>
            </div>
            <button
                class="text-gray-400 hover:text-gray-600"
                title="Fechar"
                on:click=move |_| slot.set(None)
            >
                "×"
            </button>
        </div>
    }
}
