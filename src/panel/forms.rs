//! Form State
//!
//! Editable copies of the entities shown in the create/edit modals, with
//! the required-field checks and the conversion into request DTOs.

use crate::models::{
    AliveStatus, Character, CreateCharacterDto, FileUpload, Franchise, GameMode,
    GameModeDto, Gender, ImageUpdate, NewFranchise, UpdateCharacterDto, UpdateFranchiseDto,
};

use super::multi_value::MultiValueField;

pub const CHARACTER_REQUIRED: &str = "Nome e franquia são obrigatórios";
pub const FRANCHISE_REQUIRED: &str = "Nome da franquia é obrigatório";
pub const GAME_MODE_REQUIRED: &str = "Nome do modo é obrigatório";

fn non_blank(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Character modal fields
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CharacterForm {
    pub name: String,
    pub description: String,
    pub emojis: MultiValueField,
    pub race: MultiValueField,
    pub ethnicity: MultiValueField,
    pub hair: String,
    pub gender: Gender,
    pub alive_status: AliveStatus,
    pub is_protagonist: bool,
    pub is_antagonist: bool,
    /// Current images, shown as previews while editing
    pub image_url1: String,
    pub image_url2: String,
    /// Selected franchise id, empty when none
    pub franchise_id: String,
    /// Primary image
    pub file1: Option<FileUpload>,
    /// Secondary image, uploaded after the save
    pub file2: Option<FileUpload>,
}

impl CharacterForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefill from an existing character
    pub fn from_character(character: &Character) -> Self {
        Self {
            name: character.name.clone(),
            description: character.description.clone(),
            emojis: MultiValueField::from_values(&character.emojis),
            race: MultiValueField::from_values(&character.race),
            ethnicity: MultiValueField::from_values(&character.ethnicity),
            hair: character.hair.clone(),
            gender: character.gender,
            alive_status: character.alive_status,
            is_protagonist: character.is_protagonist,
            is_antagonist: character.is_antagonist,
            image_url1: character.image_url1.clone().unwrap_or_default(),
            image_url2: character.image_url2.clone().unwrap_or_default(),
            franchise_id: character
                .franchise_id
                .as_ref()
                .map(|id| id.to_string())
                .unwrap_or_default(),
            file1: None,
            file2: None,
        }
    }

    /// A name and a franchise are required
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() || self.franchise_id.trim().is_empty() {
            return Err(CHARACTER_REQUIRED);
        }
        Ok(())
    }

    /// Request body; list fields keep only non-blank entries
    pub fn to_dto(&self) -> CreateCharacterDto {
        CreateCharacterDto {
            name: self.name.clone(),
            description: self.description.clone(),
            emojis: Some(self.emojis.non_blank()),
            gender: self.gender,
            race: Some(self.race.non_blank()),
            ethnicity: Some(self.ethnicity.non_blank()),
            hair: non_blank(&self.hair),
            alive_status: self.alive_status,
            is_protagonist: self.is_protagonist,
            is_antagonist: self.is_antagonist,
            image_url1: None,
            image_url2: None,
            franchise_ids: Some(vec![self.franchise_id.clone()]),
        }
    }

    /// JSON patch for an edit. `hair` is always sent so clearing it
    /// reaches the backend.
    pub fn to_update_dto(&self) -> UpdateCharacterDto {
        UpdateCharacterDto {
            hair: Some(self.hair.clone()),
            ..UpdateCharacterDto::from(self.to_dto())
        }
    }
}

/// Franchise modal fields
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FranchiseForm {
    pub name: String,
    pub image_url: String,
    pub file: Option<FileUpload>,
}

impl FranchiseForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Editing starts from the current name with no image change
    pub fn from_franchise(franchise: &Franchise) -> Self {
        Self {
            name: franchise.name.clone(),
            image_url: String::new(),
            file: None,
        }
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() {
            return Err(FRANCHISE_REQUIRED);
        }
        Ok(())
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn to_new(&self) -> NewFranchise {
        NewFranchise {
            name: self.name.clone(),
            image_url: non_blank(&self.image_url),
            file: self.file.clone(),
        }
    }

    pub fn to_update(&self) -> UpdateFranchiseDto {
        UpdateFranchiseDto {
            name: Some(self.name.clone()),
            image_url: None,
        }
    }

    /// Image change to send after an update, when one was given
    pub fn image_update(&self) -> Option<ImageUpdate> {
        let update = ImageUpdate {
            file: self.file.clone(),
            image_url: non_blank(&self.image_url),
        };
        if update.is_empty() {
            None
        } else {
            Some(update)
        }
    }
}

/// Game mode modal fields
#[derive(Debug, Clone, PartialEq)]
pub struct GameModeForm {
    pub name: String,
    pub description: String,
    pub is_active: bool,
}

impl Default for GameModeForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            is_active: true,
        }
    }
}

impl GameModeForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_game_mode(mode: &GameMode) -> Self {
        Self {
            name: mode.name.clone(),
            description: mode.description.clone(),
            is_active: mode.is_active,
        }
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() {
            return Err(GAME_MODE_REQUIRED);
        }
        Ok(())
    }

    pub fn to_dto(&self) -> GameModeDto {
        GameModeDto {
            name: self.name.clone(),
            description: self.description.clone(),
            is_active: self.is_active,
        }
    }
}
