//! Game Modes Page
//!
//! Card grid of game modes with a create/edit modal.

use leptos::*;

use dreamworks_panel::panel::forms::GameModeForm;
use dreamworks_panel::panel::{GameModesPage, ListState, ModalState};
use dreamworks_panel::GameMode;

use crate::api::HttpBackend;
use crate::components::{Loading, Modal};
use crate::state::{use_global, BrowserConfirm};

#[component]
pub fn GameModes() -> impl IntoView {
    let state = use_global();

    let list = create_rw_signal(ListState::<GameMode>::new());
    let modal = create_rw_signal(ModalState::<GameMode>::Closed);
    let form = create_rw_signal(GameModeForm::new());
    let saving = create_rw_signal(false);

    create_effect(move |_| {
        list.update(|l| l.begin());
        spawn_local(async move {
            let backend = HttpBackend::default();
            let mut page = GameModesPage::new(&backend, &state);
            page.list = list.get_untracked();
            page.mount().await;
            list.set(page.list);
        });
    });

    let open_create = move |_| {
        form.set(GameModeForm::new());
        modal.set(ModalState::Create);
    };

    let open_edit = move |mode: GameMode| {
        form.set(GameModeForm::from_game_mode(&mode));
        modal.set(ModalState::Edit(mode));
    };

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        saving.set(true);
        spawn_local(async move {
            let backend = HttpBackend::default();
            let mut page = GameModesPage::new(&backend, &state);
            page.list = list.get_untracked();
            page.modal = modal.get_untracked();
            page.form = form.get_untracked();
            page.submit().await;
            list.set(page.list);
            modal.set(page.modal);
            form.set(page.form);
            saving.set(false);
        });
    };

    let on_delete = move |mode: GameMode| {
        spawn_local(async move {
            let backend = HttpBackend::default();
            let mut page = GameModesPage::new(&backend, &state);
            page.list = list.get_untracked();
            page.delete(&mode, &BrowserConfirm).await;
            list.set(page.list);
        });
    };

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <h1 class="text-3xl font-bold">"Modos de Jogo"</h1>
                <button class="px-4 py-2 bg-blue-600 hover:bg-blue-700 text-white rounded-lg" on:click=open_create>
                    "Novo Modo"
                </button>
            </div>

            {move || {
                if list.with(|l| l.is_loading()) {
                    return view! { <Loading /> }.into_view();
                }
                view! {
                    <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-4">
                        {list.with(|l| l.items().to_vec()).into_iter().map(|mode| {
                            let for_edit = mode.clone();
                            let for_delete = mode.clone();
                            let badge = if mode.is_active {
                                "px-2 py-1 text-xs rounded-full bg-green-100 text-green-700"
                            } else {
                                "px-2 py-1 text-xs rounded-full bg-gray-100 text-gray-600"
                            };
                            view! {
                                <div class="bg-white rounded-lg shadow p-5 space-y-3">
                                    <div class="flex items-center justify-between">
                                        <h3 class="text-lg font-semibold">{mode.name.clone()}</h3>
                                        <span class=badge>{mode.status_label()}</span>
                                    </div>
                                    <p class="text-sm text-gray-600">{mode.description.clone()}</p>
                                    <div class="flex space-x-3 pt-2">
                                        <button class="text-blue-600 hover:underline" on:click=move |_| open_edit(for_edit.clone())>
                                            "Editar"
                                        </button>
                                        <button class="text-red-600 hover:underline" on:click=move |_| on_delete(for_delete.clone())>
                                            "Deletar"
                                        </button>
                                    </div>
                                </div>
                            }
                        }).collect_view()}
                    </div>
                }.into_view()
            }}

            <Modal
                open=Signal::derive(move || modal.with(|m| m.is_open()))
                title=Signal::derive(move || modal.with(|m| m.title("Novo Modo", "Editar Modo").to_string()))
                on_close=move |_| modal.update(|m| m.close())
            >
                <form class="space-y-4" on:submit=on_submit>
                    <div>
                        <label class="block text-sm font-medium text-gray-700">"Nome"</label>
                        <input
                            class="w-full px-3 py-2 border rounded-lg"
                            prop:value=move || form.with(|f| f.name.clone())
                            on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-gray-700">"Descrição"</label>
                        <textarea
                            class="w-full px-3 py-2 border rounded-lg"
                            prop:value=move || form.with(|f| f.description.clone())
                            on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                        />
                    </div>
                    <label class="flex items-center space-x-2">
                        <input
                            type="checkbox"
                            prop:checked=move || form.with(|f| f.is_active)
                            on:change=move |ev| form.update(|f| f.is_active = event_target_checked(&ev))
                        />
                        <span>"Ativo"</span>
                    </label>
                    <div class="flex justify-end space-x-2">
                        <button type="button" class="px-4 py-2 border rounded-lg" on:click=move |_| modal.update(|m| m.close())>
                            "Cancelar"
                        </button>
                        <button
                            type="submit"
                            class="px-4 py-2 bg-blue-600 text-white rounded-lg disabled:opacity-50"
                            disabled=move || saving.get()
                        >
                            "Salvar"
                        </button>
                    </div>
                </form>
            </Modal>
        </div>
    }
}
