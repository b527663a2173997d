//! Create/edit modal state

/// Whether the form modal is shown, and for which entity
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ModalState<T> {
    #[default]
    Closed,
    Create,
    Edit(T),
}

impl<T> ModalState<T> {
    pub fn is_open(&self) -> bool {
        !matches!(self, ModalState::Closed)
    }

    /// Entity being edited, if any
    pub fn editing(&self) -> Option<&T> {
        match self {
            ModalState::Edit(item) => Some(item),
            _ => None,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing().is_some()
    }

    pub fn close(&mut self) {
        *self = ModalState::Closed;
    }

    /// Pick the title for the current mode
    pub fn title<'a>(&self, create: &'a str, edit: &'a str) -> &'a str {
        if self.is_editing() {
            edit
        } else {
            create
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modal_transitions() {
        let mut modal: ModalState<u32> = ModalState::default();
        assert!(!modal.is_open());

        modal = ModalState::Create;
        assert!(modal.is_open());
        assert!(modal.editing().is_none());
        assert_eq!(modal.title("Novo", "Editar"), "Novo");

        modal = ModalState::Edit(7);
        assert_eq!(modal.editing(), Some(&7));
        assert_eq!(modal.title("Novo", "Editar"), "Editar");

        modal.close();
        assert_eq!(modal, ModalState::Closed);
    }
}
