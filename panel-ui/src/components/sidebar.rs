//! Sidebar navigation component
//!
//! Collapsible left navigation with the signed-in user and logout.

use leptos::*;
use leptos_router::*;

use crate::state::{use_auth, use_global};

#[component]
pub fn Sidebar() -> impl IntoView {
    let state = use_global();
    let auth = use_auth();
    let navigate = use_navigate();

    let on_logout = move |_| {
        let navigate = navigate.clone();
        spawn_local(async move {
            let target = auth.logout().await;
            navigate(target.0, Default::default());
        });
    };

    view! {
        <aside class=move || {
            if state.sidebar_open.get() {
                "w-64 bg-gray-900 text-gray-100 flex flex-col transition-all"
            } else {
                "w-16 bg-gray-900 text-gray-100 flex flex-col transition-all"
            }
        }>
            <div class="flex items-center justify-between h-16 px-4 border-b border-gray-800">
                <Show when=move || state.sidebar_open.get()>
                    <span class="text-lg font-bold">"DreamWorks Painel"</span>
                </Show>
                <button class="text-gray-400 hover:text-white" on:click=move |_| state.toggle_sidebar()>
                    "☰"
                </button>
            </div>

            <nav class="flex-1 py-4 space-y-1">
                <SidebarLink href="/dashboard" icon="📊" label="Dashboard" />
                <SidebarLink href="/characters" icon="🧌" label="Personagens" />
                <SidebarLink href="/franchises" icon="🎬" label="Franquias" />
                <SidebarLink href="/game-modes" icon="🎮" label="Modos de Jogo" />
            </nav>

            <div class="p-4 border-t border-gray-800 space-y-2">
                <Show when=move || state.sidebar_open.get()>
                    <div class="text-xs text-gray-400 truncate">
                        {move || auth.user().map(|u| u.email).unwrap_or_default()}
                    </div>
                </Show>
                <button class="text-sm text-red-400 hover:text-red-300" on:click=on_logout>
                    "Sair"
                </button>
            </div>
        </aside>
    }
}

#[component]
fn SidebarLink(
    href: &'static str,
    icon: &'static str,
    label: &'static str,
) -> impl IntoView {
    let state = use_global();

    view! {
        <A
            href=href
            class="flex items-center space-x-3 px-4 py-2 text-gray-300 hover:bg-gray-800 hover:text-white"
            active_class="bg-gray-800 text-white"
        >
            <span>{icon}</span>
            <Show when=move || state.sidebar_open.get()>
                <span>{label}</span>
            </Show>
        </A>
    }
}
