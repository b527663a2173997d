//! Franchises Page
//!
//! Searchable table of franchises with a create/edit modal.

use leptos::*;

use dreamworks_panel::panel::forms::FranchiseForm;
use dreamworks_panel::panel::franchises::SAVE_FAILED;
use dreamworks_panel::panel::{failure_message, FranchisesPage, ListState, ModalState};
use dreamworks_panel::Franchise;

use super::read_picked;
use crate::api::HttpBackend;
use crate::components::data_table::matches_search;
use crate::components::{DataTable, ImageInput, Loading, Modal};
use crate::state::{use_global, BrowserConfirm};

const HEADERS: &[&str] = &["Imagem", "Nome", "Personagens", "Criada em", "Ações"];

#[component]
pub fn Franchises() -> impl IntoView {
    let state = use_global();

    let list = create_rw_signal(ListState::<Franchise>::new());
    let modal = create_rw_signal(ModalState::<Franchise>::Closed);
    let form = create_rw_signal(FranchiseForm::new());
    let file = create_rw_signal(None::<web_sys::File>);
    let search = create_rw_signal(String::new());
    let saving = create_rw_signal(false);

    let load = move || {
        list.update(|l| l.begin());
        spawn_local(async move {
            let backend = HttpBackend::default();
            let mut page = FranchisesPage::new(&backend, &state);
            page.list = list.get_untracked();
            page.load().await;
            list.set(page.list);
        });
    };

    create_effect(move |_| load());

    let open_create = move |_| {
        form.set(FranchiseForm::new());
        file.set(None);
        modal.set(ModalState::Create);
    };

    let open_edit = move |franchise: Franchise| {
        form.set(FranchiseForm::from_franchise(&franchise));
        file.set(None);
        modal.set(ModalState::Edit(franchise));
    };

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        saving.set(true);
        spawn_local(async move {
            let backend = HttpBackend::default();
            let mut page = FranchisesPage::new(&backend, &state);
            page.list = list.get_untracked();
            page.modal = modal.get_untracked();
            page.form = form.get_untracked();

            match read_picked(file.get_untracked()).await {
                Ok(upload) => page.form.file = upload,
                Err(e) => {
                    state.show_error(&failure_message(&e, SAVE_FAILED));
                    saving.set(false);
                    return;
                }
            }

            if page.submit().await {
                file.set(None);
            }
            list.set(page.list);
            modal.set(page.modal);
            form.set(page.form);
            saving.set(false);
        });
    };

    let on_delete = move |franchise: Franchise| {
        spawn_local(async move {
            let backend = HttpBackend::default();
            let mut page = FranchisesPage::new(&backend, &state);
            page.list = list.get_untracked();
            page.delete(&franchise, &BrowserConfirm).await;
            list.set(page.list);
        });
    };

    let preview = Signal::derive(move || {
        let typed = form.with(|f| f.image_url.trim().to_string());
        let current = modal.with(|m| m.editing().and_then(|f| f.image_url.clone()));
        let url = if typed.is_empty() { current } else { Some(typed) };
        state.image_src(url.as_deref())
    });

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <h1 class="text-3xl font-bold">"Franquias"</h1>
                <button class="px-4 py-2 bg-blue-600 hover:bg-blue-700 text-white rounded-lg" on:click=open_create>
                    "Nova Franquia"
                </button>
            </div>

            <DataTable headers=HEADERS search=search placeholder="Buscar franquia...">
                {move || {
                    if list.with(|l| l.is_loading()) {
                        return view! { <tr><td colspan="5"><Loading /></td></tr> }.into_view();
                    }
                    let query = search.get();
                    list.with(|l| {
                        l.items()
                            .iter()
                            .filter(|f| matches_search(&query, &[f.name.as_str()]))
                            .cloned()
                            .map(|franchise| {
                                let for_edit = franchise.clone();
                                let for_delete = franchise.clone();
                                view! {
                                    <tr>
                                        <td class="px-4 py-2">
                                            <img
                                                src=state.image_src(franchise.image_url.as_deref())
                                                class="w-12 h-12 object-cover rounded"
                                                alt=franchise.name.clone()
                                            />
                                        </td>
                                        <td class="px-4 py-2 font-medium">{franchise.name.clone()}</td>
                                        <td class="px-4 py-2">{franchise.character_count()}</td>
                                        <td class="px-4 py-2">{franchise.created_on()}</td>
                                        <td class="px-4 py-2 space-x-2">
                                            <button class="text-blue-600 hover:underline" on:click=move |_| open_edit(for_edit.clone())>
                                                "Editar"
                                            </button>
                                            <button class="text-red-600 hover:underline" on:click=move |_| on_delete(for_delete.clone())>
                                                "Excluir"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    })
                }}
            </DataTable>

            <Modal
                open=Signal::derive(move || modal.with(|m| m.is_open()))
                title=Signal::derive(move || modal.with(|m| m.title("Nova Franquia", "Editar Franquia").to_string()))
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
                        <label class="block text-sm font-medium text-gray-700">"URL da imagem"</label>
                        <input
                            class="w-full px-3 py-2 border rounded-lg"
                            prop:value=move || form.with(|f| f.image_url.clone())
                            on:input=move |ev| form.update(|f| f.image_url = event_target_value(&ev))
                        />
                    </div>
                    <ImageInput label="Imagem" preview=preview file=file />
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
