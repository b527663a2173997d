//! Characters Page
//!
//! Searchable table of characters with a create/edit modal. Franchises are
//! loaded alongside for the selector and the table's franchise column.

use leptos::*;

use dreamworks_panel::panel::characters::SAVE_FAILED;
use dreamworks_panel::panel::forms::CharacterForm;
use dreamworks_panel::panel::{failure_message, CharactersPage, ListState, ModalState, MultiValueField};
use dreamworks_panel::{AliveStatus, Character, Franchise, Gender};

use super::read_picked;
use crate::api::HttpBackend;
use crate::components::data_table::matches_search;
use crate::components::{DataTable, ImageInput, Loading, Modal, MultiValueInput};
use crate::state::{use_global, BrowserConfirm};

const HEADERS: &[&str] = &["Imagem", "Nome", "Franquia", "Gênero", "Papel", "Ações"];

/// Signals backing the page; a controller is rebuilt from them per action
#[derive(Clone, Copy)]
struct PageSignals {
    list: RwSignal<ListState<Character>>,
    franchises: RwSignal<Vec<Franchise>>,
    modal: RwSignal<ModalState<Character>>,
    form: RwSignal<CharacterForm>,
}

impl PageSignals {
    fn hydrate(&self, page: &mut CharactersPage<'_>) {
        page.list = self.list.get_untracked();
        page.franchise_options = self.franchises.get_untracked();
        page.modal = self.modal.get_untracked();
        page.form = self.form.get_untracked();
    }

    fn store(&self, page: CharactersPage<'_>) {
        self.list.set(page.list);
        self.franchises.set(page.franchise_options);
        self.modal.set(page.modal);
        self.form.set(page.form);
    }
}

fn franchise_label(character: &Character, franchises: &[Franchise]) -> String {
    character
        .franchise_id
        .as_ref()
        .and_then(|id| franchises.iter().find(|f| &f.id == id))
        .map(|f| f.name.clone())
        .or_else(|| character.franchise_names.first().cloned())
        .unwrap_or_else(|| "-".to_string())
}

#[component]
pub fn Characters() -> impl IntoView {
    let state = use_global();

    let signals = PageSignals {
        list: create_rw_signal(ListState::new()),
        franchises: create_rw_signal(Vec::new()),
        modal: create_rw_signal(ModalState::Closed),
        form: create_rw_signal(CharacterForm::new()),
    };
    let PageSignals { list, franchises, modal, form } = signals;

    let file1 = create_rw_signal(None::<web_sys::File>);
    let file2 = create_rw_signal(None::<web_sys::File>);
    let search = create_rw_signal(String::new());
    let saving = create_rw_signal(false);

    create_effect(move |_| {
        list.update(|l| l.begin());
        spawn_local(async move {
            let backend = HttpBackend::default();
            let mut page = CharactersPage::new(&backend, &backend, &state);
            signals.hydrate(&mut page);
            page.mount().await;
            signals.store(page);
        });
    });

    let open_create = move |_| {
        form.set(CharacterForm::new());
        file1.set(None);
        file2.set(None);
        modal.set(ModalState::Create);
    };

    let open_edit = move |character: Character| {
        form.set(CharacterForm::from_character(&character));
        file1.set(None);
        file2.set(None);
        modal.set(ModalState::Edit(character));
    };

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        saving.set(true);
        spawn_local(async move {
            let backend = HttpBackend::default();
            let mut page = CharactersPage::new(&backend, &backend, &state);
            signals.hydrate(&mut page);

            let picked = async {
                let first = read_picked(file1.get_untracked()).await?;
                let second = read_picked(file2.get_untracked()).await?;
                Ok::<_, dreamworks_panel::ApiError>((first, second))
            };
            match picked.await {
                Ok((first, second)) => {
                    page.form.file1 = first;
                    page.form.file2 = second;
                }
                Err(e) => {
                    state.show_error(&failure_message(&e, SAVE_FAILED));
                    saving.set(false);
                    return;
                }
            }

            if page.submit().await {
                file1.set(None);
                file2.set(None);
            }
            signals.store(page);
            saving.set(false);
        });
    };

    let on_delete = move |character: Character| {
        spawn_local(async move {
            let backend = HttpBackend::default();
            let mut page = CharactersPage::new(&backend, &backend, &state);
            signals.hydrate(&mut page);
            page.delete(&character, &BrowserConfirm).await;
            signals.store(page);
        });
    };

    let preview1 = Signal::derive(move || form.with(|f| state.image_src(Some(f.image_url1.as_str()))));
    let preview2 = Signal::derive(move || form.with(|f| state.image_src(Some(f.image_url2.as_str()))));

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <h1 class="text-3xl font-bold">"Personagens"</h1>
                <button class="px-4 py-2 bg-blue-600 hover:bg-blue-700 text-white rounded-lg" on:click=open_create>
                    "Novo Personagem"
                </button>
            </div>

            <DataTable headers=HEADERS search=search placeholder="Buscar personagem...">
                {move || {
                    if list.with(|l| l.is_loading()) {
                        return view! { <tr><td colspan="6"><Loading /></td></tr> }.into_view();
                    }
                    let query = search.get();
                    let options = franchises.get();
                    list.with(|l| {
                        l.items()
                            .iter()
                            .map(|c| (c.clone(), franchise_label(c, &options)))
                            .filter(|(c, franchise)| matches_search(&query, &[c.name.as_str(), franchise.as_str()]))
                            .map(|(character, franchise)| {
                                let for_edit = character.clone();
                                let for_delete = character.clone();
                                view! {
                                    <tr>
                                        <td class="px-4 py-2">
                                            <img
                                                src=state.image_src(character.image_url1.as_deref())
                                                class="w-12 h-12 object-cover rounded"
                                                alt=character.name.clone()
                                            />
                                        </td>
                                        <td class="px-4 py-2 font-medium">{character.name.clone()}</td>
                                        <td class="px-4 py-2">{franchise}</td>
                                        <td class="px-4 py-2">{character.gender.label()}</td>
                                        <td class="px-4 py-2">{character.role_label()}</td>
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
                title=Signal::derive(move || modal.with(|m| m.title("Novo Personagem", "Editar Personagem").to_string()))
                on_close=move |_| modal.update(|m| m.close())
            >
                <form class="space-y-4" on:submit=on_submit>
                    <div class="grid md:grid-cols-2 gap-4">
                        <div>
                            <label class="block text-sm font-medium text-gray-700">"Nome"</label>
                            <input
                                class="w-full px-3 py-2 border rounded-lg"
                                prop:value=move || form.with(|f| f.name.clone())
                                on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                            />
                        </div>
                        <div>
                            <label class="block text-sm font-medium text-gray-700">"Franquia"</label>
                            <select
                                class="w-full px-3 py-2 border rounded-lg"
                                on:change=move |ev| form.update(|f| f.franchise_id = event_target_value(&ev))
                            >
                                <option value="" selected=move || form.with(|f| f.franchise_id.is_empty())>
                                    "Selecione"
                                </option>
                                {move || franchises.get().into_iter().map(|franchise| {
                                    let id = franchise.id.as_str().to_string();
                                    let value = id.clone();
                                    view! {
                                        <option value=value selected=move || form.with(|f| f.franchise_id == id)>
                                            {franchise.name}
                                        </option>
                                    }
                                }).collect_view()}
                            </select>
                        </div>
                    </div>

                    <div>
                        <label class="block text-sm font-medium text-gray-700">"Descrição"</label>
                        <textarea
                            class="w-full px-3 py-2 border rounded-lg"
                            prop:value=move || form.with(|f| f.description.clone())
                            on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                        />
                    </div>

                    <div class="grid md:grid-cols-3 gap-4">
                        <MultiValueInput
                            label="Emojis"
                            placeholder="🧅"
                            field=Signal::derive(move || form.with(|f| f.emojis.clone()))
                            on_change=move |v: MultiValueField| form.update(|f| f.emojis = v)
                        />
                        <MultiValueInput
                            label="Raça"
                            field=Signal::derive(move || form.with(|f| f.race.clone()))
                            on_change=move |v: MultiValueField| form.update(|f| f.race = v)
                        />
                        <MultiValueInput
                            label="Etnia"
                            field=Signal::derive(move || form.with(|f| f.ethnicity.clone()))
                            on_change=move |v: MultiValueField| form.update(|f| f.ethnicity = v)
                        />
                    </div>

                    <div class="grid md:grid-cols-3 gap-4">
                        <div>
                            <label class="block text-sm font-medium text-gray-700">"Cabelo"</label>
                            <input
                                class="w-full px-3 py-2 border rounded-lg"
                                prop:value=move || form.with(|f| f.hair.clone())
                                on:input=move |ev| form.update(|f| f.hair = event_target_value(&ev))
                            />
                        </div>
                        <div>
                            <label class="block text-sm font-medium text-gray-700">"Gênero"</label>
                            <select
                                class="w-full px-3 py-2 border rounded-lg"
                                on:change=move |ev| {
                                    if let Ok(gender) = event_target_value(&ev).parse::<Gender>() {
                                        form.update(|f| f.gender = gender);
                                    }
                                }
                            >
                                {Gender::all().iter().map(|gender| view! {
                                    <option value=gender.as_str() selected=move || form.with(|f| f.gender == *gender)>
                                        {gender.label()}
                                    </option>
                                }).collect_view()}
                            </select>
                        </div>
                        <div>
                            <label class="block text-sm font-medium text-gray-700">"Status"</label>
                            <select
                                class="w-full px-3 py-2 border rounded-lg"
                                on:change=move |ev| {
                                    if let Ok(status) = event_target_value(&ev).parse::<AliveStatus>() {
                                        form.update(|f| f.alive_status = status);
                                    }
                                }
                            >
                                {AliveStatus::all().iter().map(|status| view! {
                                    <option value=status.as_str() selected=move || form.with(|f| f.alive_status == *status)>
                                        {status.label()}
                                    </option>
                                }).collect_view()}
                            </select>
                        </div>
                    </div>

                    <div class="flex space-x-6">
                        <label class="flex items-center space-x-2">
                            <input
                                type="checkbox"
                                prop:checked=move || form.with(|f| f.is_protagonist)
                                on:change=move |ev| form.update(|f| f.is_protagonist = event_target_checked(&ev))
                            />
                            <span>"Protagonista"</span>
                        </label>
                        <label class="flex items-center space-x-2">
                            <input
                                type="checkbox"
                                prop:checked=move || form.with(|f| f.is_antagonist)
                                on:change=move |ev| form.update(|f| f.is_antagonist = event_target_checked(&ev))
                            />
                            <span>"Antagonista"</span>
                        </label>
                    </div>

                    <div class="grid md:grid-cols-2 gap-4">
                        <ImageInput label="Imagem principal" preview=preview1 file=file1 />
                        <ImageInput label="Imagem secundária" preview=preview2 file=file2 />
                    </div>

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
