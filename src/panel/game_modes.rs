//! Game modes page

use crate::error::ApiResult;
use crate::models::{EntityId, GameMode};
use crate::services::GameModeApi;

use super::feedback::{failure_message, Confirm, Notifier};
use super::forms::GameModeForm;
use super::list::ListState;
use super::modal::ModalState;

pub const LOAD_FAILED: &str = "Erro ao carregar modos de jogo";
pub const CREATED: &str = "Modo criado";
pub const UPDATED: &str = "Modo atualizado";
pub const SAVE_FAILED: &str = "Erro ao salvar";
pub const DELETED: &str = "Modo deletado";
pub const DELETE_FAILED: &str = "Erro ao deletar";

pub fn delete_prompt(name: &str) -> String {
    format!("Deletar modo \"{}\"?", name)
}

pub async fn save_game_mode(
    api: &dyn GameModeApi,
    form: &GameModeForm,
    editing: Option<&EntityId>,
) -> ApiResult<GameMode> {
    let dto = form.to_dto();
    match editing {
        Some(id) => api.update(id, &dto).await,
        None => api.create(&dto).await,
    }
}

/// Game modes page controller
pub struct GameModesPage<'a> {
    modes: &'a dyn GameModeApi,
    notifier: &'a dyn Notifier,
    pub list: ListState<GameMode>,
    pub modal: ModalState<GameMode>,
    pub form: GameModeForm,
}

impl<'a> GameModesPage<'a> {
    pub fn new(modes: &'a dyn GameModeApi, notifier: &'a dyn Notifier) -> Self {
        Self {
            modes,
            notifier,
            list: ListState::new(),
            modal: ModalState::Closed,
            form: GameModeForm::new(),
        }
    }

    pub async fn mount(&mut self) {
        self.load().await;
    }

    pub async fn load(&mut self) {
        self.list.begin();
        match self.modes.get_all().await {
            Ok(items) => self.list.loaded(items),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load game modes");
                self.list.failed();
                self.notifier.error(LOAD_FAILED);
            }
        }
    }

    pub fn open_create(&mut self) {
        self.form = GameModeForm::new();
        self.modal = ModalState::Create;
    }

    pub fn open_edit(&mut self, mode: &GameMode) {
        self.form = GameModeForm::from_game_mode(mode);
        self.modal = ModalState::Edit(mode.clone());
    }

    pub fn close_modal(&mut self) {
        self.modal.close();
    }

    pub async fn submit(&mut self) -> bool {
        if let Err(message) = self.form.validate() {
            self.notifier.error(message);
            return false;
        }

        let editing = self.modal.editing().map(|m| m.id.clone());
        match save_game_mode(self.modes, &self.form, editing.as_ref()).await {
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

    pub async fn delete(&mut self, mode: &GameMode, confirm: &dyn Confirm) -> bool {
        if !confirm.confirm(&delete_prompt(&mode.name)) {
            return false;
        }

        match self.modes.remove(&mode.id).await {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panel::fakes::FakeBackend;
    use crate::panel::feedback::{AutoConfirm, ToastLog};

    #[tokio::test]
    async fn test_create_and_reload() {
        let backend = FakeBackend::seeded();
        let toasts = ToastLog::new();
        let mut page = GameModesPage::new(&backend, &toasts);
        page.mount().await;
        let before = page.list.items().len();

        page.open_create();
        page.form.name = "EMOJI".into();
        page.form.description = "Adivinhe pelos emojis".into();
        assert!(page.submit().await);

        assert_eq!(page.list.items().len(), before + 1);
        assert_eq!(toasts.last().unwrap().message, CREATED);
        assert_eq!(
            backend.calls(),
            vec!["game_modes.get_all", "game_modes.create", "game_modes.get_all"]
        );
    }

    #[tokio::test]
    async fn test_update_existing() {
        let backend = FakeBackend::seeded();
        let toasts = ToastLog::new();
        let mut page = GameModesPage::new(&backend, &toasts);
        page.mount().await;
        let mode = page.list.items()[0].clone();

        page.open_edit(&mode);
        page.form.is_active = false;
        assert!(page.submit().await);

        assert_eq!(toasts.last().unwrap().message, UPDATED);
        assert!(!page.list.items()[0].is_active);
    }

    #[tokio::test]
    async fn test_delete_prompt_and_toast() {
        let backend = FakeBackend::seeded();
        let toasts = ToastLog::new();
        let mut page = GameModesPage::new(&backend, &toasts);
        page.mount().await;
        let mode = page.list.items()[0].clone();

        assert!(page.delete(&mode, &AutoConfirm(true)).await);
        assert_eq!(toasts.last().unwrap().message, DELETED);
        assert_eq!(delete_prompt("IMAGE"), "Deletar modo \"IMAGE\"?");
    }
}
