//! Login Page

use leptos::*;
use leptos_router::*;

use dreamworks_panel::panel::failure_message;

use crate::state::{use_auth, use_global};

const LOGIN_FAILED: &str = "Credenciais inválidas";

#[component]
pub fn Login() -> impl IntoView {
    let auth = use_auth();
    let state = use_global();
    let navigate = use_navigate();

    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let submitting = create_rw_signal(false);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let navigate = navigate.clone();
        submitting.set(true);
        spawn_local(async move {
            let result = auth
                .login(&email.get_untracked(), &password.get_untracked())
                .await;
            submitting.set(false);
            match result {
                Ok(()) => navigate("/dashboard", Default::default()),
                Err(e) => state.show_error(&failure_message(&e, LOGIN_FAILED)),
            }
        });
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-100">
            <form class="bg-white rounded-xl shadow p-8 w-full max-w-sm space-y-4" on:submit=on_submit>
                <h1 class="text-2xl font-bold text-center">"DreamWorks Painel"</h1>
                <input
                    type="email"
                    required
                    class="w-full px-3 py-2 border rounded-lg"
                    placeholder="E-mail"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    required
                    class="w-full px-3 py-2 border rounded-lg"
                    placeholder="Senha"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button
                    type="submit"
                    class="w-full py-2 bg-blue-600 hover:bg-blue-700 text-white rounded-lg disabled:opacity-50"
                    disabled=move || submitting.get()
                >
                    {move || if submitting.get() { "Entrando..." } else { "Entrar" }}
                </button>
            </form>
        </div>
    }
}
