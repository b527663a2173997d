//! Character records and DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{EntityId, FileUpload, MultipartBody};

/// Character gender as stored by the backend
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Gender {
    #[default]
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn all() -> &'static [Gender] {
        &[Gender::Male, Gender::Female, Gender::Other]
    }

    /// Wire value
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "MALE",
            Gender::Female => "FEMALE",
            Gender::Other => "OTHER",
        }
    }

    /// Label shown in the panel
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Masculino",
            Gender::Female => "Feminino",
            Gender::Other => "Outro",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "MALE" => Ok(Gender::Male),
            "FEMALE" => Ok(Gender::Female),
            "OTHER" => Ok(Gender::Other),
            other => Err(format!("unknown gender: {}", other)),
        }
    }
}

/// Whether the character is alive in its franchise
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum AliveStatus {
    #[default]
    Alive,
    Dead,
    Unknown,
}

impl AliveStatus {
    pub fn all() -> &'static [AliveStatus] {
        &[AliveStatus::Alive, AliveStatus::Dead, AliveStatus::Unknown]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AliveStatus::Alive => "ALIVE",
            AliveStatus::Dead => "DEAD",
            AliveStatus::Unknown => "UNKNOWN",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AliveStatus::Alive => "Vivo",
            AliveStatus::Dead => "Morto",
            AliveStatus::Unknown => "Desconhecido",
        }
    }
}

impl fmt::Display for AliveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AliveStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ALIVE" => Ok(AliveStatus::Alive),
            "DEAD" => Ok(AliveStatus::Dead),
            "UNKNOWN" => Ok(AliveStatus::Unknown),
            other => Err(format!("unknown alive status: {}", other)),
        }
    }
}

/// A guessable game character
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub emojis: Vec<String>,
    #[serde(default)]
    pub gender: Gender,
    #[serde(default)]
    pub race: Vec<String>,
    #[serde(default)]
    pub ethnicity: Vec<String>,
    #[serde(default)]
    pub hair: String,
    #[serde(default)]
    pub alive_status: AliveStatus,
    #[serde(default)]
    pub is_protagonist: bool,
    #[serde(default)]
    pub is_antagonist: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url2: Option<String>,
    /// Primary franchise
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub franchise_id: Option<EntityId>,
    #[serde(default)]
    pub franchise_names: Vec<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Character {
    /// Story role shown in the characters table
    pub fn role_label(&self) -> &'static str {
        if self.is_protagonist {
            "Protagonista"
        } else if self.is_antagonist {
            "Antagonista"
        } else {
            "Secundário"
        }
    }
}

/// Fields for `POST /characters`; sent as multipart
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCharacterDto {
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emojis: Option<Vec<String>>,
    pub gender: Gender,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub race: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ethnicity: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hair: Option<String>,
    pub alive_status: AliveStatus,
    pub is_protagonist: bool,
    pub is_antagonist: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub franchise_ids: Option<Vec<String>>,
}

impl CreateCharacterDto {
    /// Multipart body with the optional image under `file`.
    ///
    /// List fields travel as JSON-stringified arrays.
    pub fn to_multipart(&self, file: Option<&FileUpload>) -> MultipartBody {
        MultipartBody::new()
            .file_opt("file", file)
            .text("name", self.name.as_str())
            .text("description", self.description.as_str())
            .text("gender", self.gender.as_str())
            .text("aliveStatus", self.alive_status.as_str())
            .text("isProtagonist", self.is_protagonist.to_string())
            .text("isAntagonist", self.is_antagonist.to_string())
            .json_opt("emojis", self.emojis.as_ref())
            .json_opt("race", self.race.as_ref())
            .json_opt("ethnicity", self.ethnicity.as_ref())
            .text_opt("hair", self.hair.as_deref())
            .text_opt("imageUrl1", self.image_url1.as_deref())
            .text_opt("imageUrl2", self.image_url2.as_deref())
            .json_opt("franchiseIds", self.franchise_ids.as_ref())
    }
}

/// JSON body for `PATCH /characters/{id}`; unset fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCharacterDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emojis: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub race: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ethnicity: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hair: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alive_status: Option<AliveStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_protagonist: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_antagonist: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub franchise_ids: Option<Vec<String>>,
}

impl From<CreateCharacterDto> for UpdateCharacterDto {
    fn from(dto: CreateCharacterDto) -> Self {
        Self {
            name: Some(dto.name),
            description: Some(dto.description),
            emojis: dto.emojis,
            gender: Some(dto.gender),
            race: dto.race,
            ethnicity: dto.ethnicity,
            hair: dto.hair,
            alive_status: Some(dto.alive_status),
            is_protagonist: Some(dto.is_protagonist),
            is_antagonist: Some(dto.is_antagonist),
            image_url1: dto.image_url1,
            image_url2: dto.image_url2,
            franchise_ids: dto.franchise_ids,
        }
    }
}
