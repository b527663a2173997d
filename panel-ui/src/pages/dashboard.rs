//! Dashboard Page
//!
//! KPI cards, charts and the most guessed characters per mode.

use leptos::*;

use dreamworks_panel::panel::DashboardView;
use dreamworks_panel::{DashboardApi, Kpi};

use crate::api::HttpBackend;
use crate::components::{CardSkeleton, Chart, KpiCard};

#[component]
pub fn Dashboard() -> impl IntoView {
    let kpi = create_rw_signal(None::<Kpi>);
    let loading = create_rw_signal(true);

    let refresh = move || {
        spawn_local(async move {
            loading.set(true);
            match HttpBackend::default().kpis().await {
                Ok(data) => kpi.set(Some(data)),
                Err(e) => {
                    web_sys::console::error_1(&format!("Erro ao carregar KPIs: {}", e).into());
                }
            }
            loading.set(false);
        });
    };

    create_effect(move |_| refresh());

    let dashboard = create_memo(move |_| kpi.with(|k| DashboardView::build(k.as_ref())));

    view! {
        <div class="space-y-8">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Dashboard"</h1>
                    <p class="text-gray-500 mt-1">"Visão geral do jogo"</p>
                </div>
                <button
                    class="px-4 py-2 border rounded-lg hover:bg-gray-50 disabled:opacity-50"
                    disabled=move || loading.get()
                    on:click=move |_| refresh()
                >
                    "Atualizar"
                </button>
            </div>

            <section class="grid grid-cols-2 md:grid-cols-4 gap-4">
                {move || {
                    if loading.get() {
                        (0..4).map(|_| view! { <CardSkeleton /> }).collect_view()
                    } else {
                        dashboard.get().cards.into_iter().map(|card| view! {
                            <KpiCard title=card.title value=card.value />
                        }).collect_view()
                    }
                }}
            </section>

            <section class="grid md:grid-cols-2 gap-6">
                {move || dashboard.get().charts.into_iter().map(|spec| view! {
                    <Chart spec=spec />
                }).collect_view()}
            </section>

            <section class="bg-white rounded-lg shadow p-6">
                <h2 class="text-xl font-semibold mb-4">"Top 5 Personagens por Modo"</h2>
                {move || {
                    let top = dashboard.get().top_characters;
                    if top.is_empty() {
                        return view! { <p class="text-gray-500">"Sem dados"</p> }.into_view();
                    }
                    view! {
                        <div class="grid md:grid-cols-2 gap-6">
                            {top.into_iter().map(|(mode, entries)| view! {
                                <div>
                                    <h3 class="font-medium mb-2">{mode}</h3>
                                    <ol class="list-decimal list-inside text-sm space-y-1">
                                        {entries.into_iter().map(|entry| view! {
                                            <li>{entry.character}" "<span class="text-gray-500">{format!("({})", entry.count)}</span></li>
                                        }).collect_view()}
                                    </ol>
                                </div>
                            }).collect_view()}
                        </div>
                    }.into_view()
                }}
            </section>
        </div>
    }
}
