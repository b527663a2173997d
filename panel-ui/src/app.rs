//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::components::{Loading, Sidebar, Toast};
use crate::pages::{Characters, Dashboard, Franchises, GameModes, Login};
use crate::state::{provide_auth, provide_global_state, use_auth};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_global_state();
    provide_auth();

    view! {
        <Router>
            <div class="min-h-screen bg-gray-100 text-gray-900">
                <Routes>
                    <Route path="/login" view=Login />
                    <Route path="/" view=AdminLayout>
                        <Route path="" view=|| view! { <Redirect path="/dashboard" /> } />
                        <Route path="dashboard" view=Dashboard />
                        <Route path="characters" view=Characters />
                        <Route path="franchises" view=Franchises />
                        <Route path="game-modes" view=GameModes />
                        <Route path="*any" view=NotFound />
                    </Route>
                </Routes>

                <Toast />
            </div>
        </Router>
    }
}

/// Authenticated shell: sidebar plus the routed page
#[component]
fn AdminLayout() -> impl IntoView {
    let auth = use_auth();

    view! {
        {move || {
            if !auth.is_initialized() {
                view! { <Loading /> }.into_view()
            } else if !auth.is_authenticated() {
                view! { <Redirect path="/login" /> }.into_view()
            } else {
                view! {
                    <div class="flex min-h-screen">
                        <Sidebar />
                        <main class="flex-1 px-8 py-8">
                            <Outlet />
                        </main>
                    </div>
                }.into_view()
            }
        }}
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Página não encontrada"</h1>
            <A
                href="/dashboard"
                class="px-6 py-3 bg-blue-600 hover:bg-blue-700 text-white rounded-lg font-medium"
            >
                "Voltar ao Dashboard"
            </A>
        </div>
    }
}
