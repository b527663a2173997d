//! Franchises page

use crate::error::ApiResult;
use crate::models::{EntityId, Franchise};
use crate::services::FranchiseApi;

use super::feedback::{failure_message, Confirm, Notifier};
use super::forms::FranchiseForm;
use super::list::ListState;
use super::modal::ModalState;

pub const LOAD_FAILED: &str = "Erro ao carregar franquias";
pub const CREATED: &str = "Franquia criada com sucesso";
pub const UPDATED: &str = "Franquia atualizada com sucesso";
pub const SAVE_FAILED: &str = "Erro ao salvar franquia";
pub const DELETED: &str = "Franquia excluída com sucesso";
pub const DELETE_FAILED: &str = "Erro ao excluir franquia";

pub fn delete_prompt(name: &str) -> String {
    format!("Tem certeza que deseja excluir \"{}\"?", name)
}

/// Persist the form: JSON rename plus an optional image change when
/// editing, a single multipart create otherwise
pub async fn save_franchise(
    api: &dyn FranchiseApi,
    form: &FranchiseForm,
    editing: Option<&EntityId>,
) -> ApiResult<Franchise> {
    match editing {
        Some(id) => {
            let mut saved = api.update(id, &form.to_update()).await?;
            if let Some(image) = form.image_update() {
                saved = api.update_image(id, &image).await?;
            }
            Ok(saved)
        }
        None => api.create_with_image(&form.to_new()).await,
    }
}

/// Franchises page controller
pub struct FranchisesPage<'a> {
    franchises: &'a dyn FranchiseApi,
    notifier: &'a dyn Notifier,
    pub list: ListState<Franchise>,
    pub modal: ModalState<Franchise>,
    pub form: FranchiseForm,
}

impl<'a> FranchisesPage<'a> {
    pub fn new(franchises: &'a dyn FranchiseApi, notifier: &'a dyn Notifier) -> Self {
        Self {
            franchises,
            notifier,
            list: ListState::new(),
            modal: ModalState::Closed,
            form: FranchiseForm::new(),
        }
    }

    pub async fn mount(&mut self) {
        self.load().await;
    }

    pub async fn load(&mut self) {
        self.list.begin();
        match self.franchises.get_all().await {
            Ok(items) => self.list.loaded(items),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load franchises");
                self.list.failed();
                self.notifier.error(LOAD_FAILED);
            }
        }
    }

    pub fn open_create(&mut self) {
        self.form.reset();
        self.modal = ModalState::Create;
    }

    pub fn open_edit(&mut self, franchise: &Franchise) {
        self.form = FranchiseForm::from_franchise(franchise);
        self.modal = ModalState::Edit(franchise.clone());
    }

    pub fn close_modal(&mut self) {
        self.modal.close();
    }

    pub async fn submit(&mut self) -> bool {
        if let Err(message) = self.form.validate() {
            self.notifier.error(message);
            return false;
        }

        let editing = self.modal.editing().map(|f| f.id.clone());
        match save_franchise(self.franchises, &self.form, editing.as_ref()).await {
            Ok(_) => {
                self.notifier
                    .success(if editing.is_some() { UPDATED } else { CREATED });
                self.modal.close();
                self.form.reset();
                self.load().await;
                true
            }
            Err(e) => {
                self.notifier.error(&failure_message(&e, SAVE_FAILED));
                false
            }
        }
    }

    pub async fn delete(&mut self, franchise: &Franchise, confirm: &dyn Confirm) -> bool {
        if !confirm.confirm(&delete_prompt(&franchise.name)) {
            return false;
        }

        match self.franchises.remove(&franchise.id).await {
            Ok(()) => {
                self.notifier.success(DELETED);
                self.load().await;
                true
            }
            Err(e) => {
                self.notifier.error(&failure_message(&e, DELETE_FAILED));
                false
            }
        }
    }
}
