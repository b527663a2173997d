//! Characters page
//!
//! Table of characters with a create/edit modal. The franchise list is
//! loaded alongside for the selector.

use crate::error::ApiResult;
use crate::models::{Character, EntityId, Franchise, ImageUpdate};
use crate::services::{CharacterApi, FranchiseApi};

use super::feedback::{failure_message, Confirm, Notifier};
use super::forms::CharacterForm;
use super::list::ListState;
use super::modal::ModalState;

pub const LOAD_FAILED: &str = "Erro ao carregar personagens";
pub const FRANCHISES_LOAD_FAILED: &str = "Erro ao carregar franquias";
pub const CREATED: &str = "Criado!";
pub const UPDATED: &str = "Atualizado!";
pub const SAVE_FAILED: &str = "Erro ao salvar";
pub const DELETED: &str = "Personagem excluído com sucesso";
pub const DELETE_FAILED: &str = "Erro ao excluir personagem";

/// Confirm prompt shown before deleting
pub fn delete_prompt(name: &str) -> String {
    format!("Tem certeza que deseja excluir \"{}\"?", name)
}

/// Persist the form.
///
/// Editing sends a JSON update and then the primary image when one was
/// picked; creating sends everything in one multipart request. A secondary
/// image is uploaded last against the saved id.
pub async fn save_character(
    api: &dyn CharacterApi,
    form: &CharacterForm,
    editing: Option<&EntityId>,
) -> ApiResult<Character> {
    let mut saved = match editing {
        Some(id) => {
            let mut saved = api.update(id, &form.to_update_dto()).await?;
            if let Some(file) = &form.file1 {
                saved = api.update_image(id, &ImageUpdate::file(file.clone())).await?;
            }
            saved
        }
        None => api.create(&form.to_dto(), form.file1.as_ref()).await?,
    };

    if let Some(file) = &form.file2 {
        saved = api
            .update_image(&saved.id, &ImageUpdate::file(file.clone()))
            .await?;
    }

    Ok(saved)
}

/// Characters page controller
pub struct CharactersPage<'a> {
    characters: &'a dyn CharacterApi,
    franchises: &'a dyn FranchiseApi,
    notifier: &'a dyn Notifier,
    pub list: ListState<Character>,
    pub franchise_options: Vec<Franchise>,
    pub modal: ModalState<Character>,
    pub form: CharacterForm,
}

impl<'a> CharactersPage<'a> {
    pub fn new(
        characters: &'a dyn CharacterApi,
        franchises: &'a dyn FranchiseApi,
        notifier: &'a dyn Notifier,
    ) -> Self {
        Self {
            characters,
            franchises,
            notifier,
            list: ListState::new(),
            franchise_options: Vec::new(),
            modal: ModalState::Closed,
            form: CharacterForm::new(),
        }
    }

    /// Initial load of both lists
    pub async fn mount(&mut self) {
        self.load().await;
        self.load_franchises().await;
    }

    pub async fn load(&mut self) {
        self.list.begin();
        match self.characters.get_all().await {
            Ok(items) => self.list.loaded(items),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load characters");
                self.list.failed();
                self.notifier.error(LOAD_FAILED);
            }
        }
    }

    pub async fn load_franchises(&mut self) {
        match self.franchises.get_all().await {
            Ok(items) => self.franchise_options = items,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load franchises");
                self.notifier.error(FRANCHISES_LOAD_FAILED);
            }
        }
    }

    pub fn open_create(&mut self) {
        self.form = CharacterForm::new();
        self.modal = ModalState::Create;
    }

    pub fn open_edit(&mut self, character: &Character) {
        self.form = CharacterForm::from_character(character);
        self.modal = ModalState::Edit(character.clone());
    }

    pub fn close_modal(&mut self) {
        self.modal.close();
    }

    /// Validate and save the form. Returns whether the save went through.
    pub async fn submit(&mut self) -> bool {
        if let Err(message) = self.form.validate() {
            self.notifier.error(message);
            return false;
        }

        let editing = self.modal.editing().map(|c| c.id.clone());
        match save_character(self.characters, &self.form, editing.as_ref()).await {
            Ok(_) => {
                self.notifier
                    .success(if editing.is_some() { UPDATED } else { CREATED });
                self.modal.close();
                self.load().await;
                true
            }
            Err(e) => {
                self.notifier.error(&failure_message(&e, SAVE_FAILED));
                false
            }
        }
    }

    /// Delete after confirmation. Returns whether the character was removed.
    pub async fn delete(&mut self, character: &Character, confirm: &dyn Confirm) -> bool {
        if !confirm.confirm(&delete_prompt(&character.name)) {
            return false;
        }

        match self.characters.remove(&character.id).await {
            Ok(_) => {
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

    /// Name of the franchise with this id, for table display
    pub fn franchise_name(&self, id: Option<&EntityId>) -> Option<&str> {
        let id = id?;
        self.franchise_options
            .iter()
            .find(|f| &f.id == id)
            .map(|f| f.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FileUpload;
    use crate::panel::fakes::FakeBackend;
    use crate::panel::feedback::{AutoConfirm, ToastLog};
    use crate::panel::forms::CHARACTER_REQUIRED;

    #[tokio::test]
    async fn test_create_shrek_sends_one_multipart_create() {
        let backend = FakeBackend::seeded();
        let toasts = ToastLog::new();
        let mut page = CharactersPage::new(&backend, &backend, &toasts);
        page.mount().await;
        backend.clear_calls();

        page.open_create();
        page.form.name = "Shrek".into();
        page.form.franchise_id = "1".into();
        assert!(page.submit().await);

        assert_eq!(backend.calls(), vec!["characters.create", "characters.get_all"]);
        let body = backend.last_multipart().unwrap();
        assert_eq!(body.text_value("emojis"), Some("[]"));
        assert_eq!(body.text_value("race"), Some("[]"));
        assert_eq!(body.text_value("ethnicity"), Some("[]"));
        assert_eq!(body.text_value("franchiseIds"), Some(r#"["1"]"#));
        assert!(!body.has_file());

        assert_eq!(toasts.last().unwrap().message, CREATED);
        assert!(!page.modal.is_open());
        assert!(page.list.items().iter().any(|c| c.name == "Shrek"));
    }

    #[tokio::test]
    async fn test_blocked_submit_makes_no_call() {
        let backend = FakeBackend::seeded();
        let toasts = ToastLog::new();
        let mut page = CharactersPage::new(&backend, &backend, &toasts);

        page.open_create();
        page.form.name = "Fiona".into();
        assert!(!page.submit().await);

        assert!(backend.calls().is_empty());
        assert_eq!(toasts.last().unwrap().message, CHARACTER_REQUIRED);
        assert!(page.modal.is_open());
    }

    #[tokio::test]
    async fn test_edit_with_both_images() {
        let backend = FakeBackend::seeded();
        let toasts = ToastLog::new();
        let mut page = CharactersPage::new(&backend, &backend, &toasts);
        page.load().await;
        let existing = page.list.items()[0].clone();
        backend.clear_calls();

        page.open_edit(&existing);
        page.form.file1 = Some(FileUpload::new("a.png", vec![1]));
        page.form.file2 = Some(FileUpload::new("b.png", vec![2]));
        assert!(page.submit().await);

        assert_eq!(
            backend.calls(),
            vec![
                "characters.update",
                "characters.update_image",
                "characters.update_image",
                "characters.get_all"
            ]
        );
        assert_eq!(toasts.last().unwrap().message, UPDATED);
    }

    #[tokio::test]
    async fn test_save_failure_uses_server_message() {
        let backend = FakeBackend::seeded();
        backend.fail("characters.create", r#"{"message":"Nome duplicado"}"#);
        let toasts = ToastLog::new();
        let mut page = CharactersPage::new(&backend, &backend, &toasts);

        page.open_create();
        page.form.name = "Shrek".into();
        page.form.franchise_id = "1".into();
        assert!(!page.submit().await);

        assert_eq!(toasts.last().unwrap().message, "Nome duplicado");
        assert!(page.modal.is_open());
        assert_eq!(backend.calls(), vec!["characters.create"]);
    }

    #[tokio::test]
    async fn test_delete_declined_and_accepted() {
        let backend = FakeBackend::seeded();
        let toasts = ToastLog::new();
        let mut page = CharactersPage::new(&backend, &backend, &toasts);
        page.load().await;
        let target = page.list.items()[0].clone();
        backend.clear_calls();

        assert!(!page.delete(&target, &AutoConfirm(false)).await);
        assert!(backend.calls().is_empty());

        assert!(page.delete(&target, &AutoConfirm(true)).await);
        assert_eq!(backend.calls(), vec!["characters.remove", "characters.get_all"]);
        assert_eq!(toasts.last().unwrap().message, DELETED);
        assert!(page.list.items().iter().all(|c| c.id != target.id));
    }

    #[tokio::test]
    async fn test_load_failures_toast() {
        let backend = FakeBackend::seeded();
        backend.fail("characters.get_all", "");
        backend.fail("franchises.get_all", "");
        let toasts = ToastLog::new();
        let mut page = CharactersPage::new(&backend, &backend, &toasts);
        page.mount().await;

        let messages: Vec<String> = toasts.toasts().into_iter().map(|t| t.message).collect();
        assert_eq!(messages, vec![LOAD_FAILED, FRANCHISES_LOAD_FAILED]);
        assert!(!page.list.is_loading());
    }

    #[test]
    fn test_delete_prompt() {
        assert_eq!(delete_prompt("Shrek"), "Tem certeza que deseja excluir \"Shrek\"?");
    }
}
