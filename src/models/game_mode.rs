//! Game mode records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::EntityId;

/// Known guessing variants
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum ModeTag {
    Characteristics,
    Description,
    Image,
    Emoji,
}

impl ModeTag {
    pub fn all() -> &'static [ModeTag] {
        &[
            ModeTag::Characteristics,
            ModeTag::Description,
            ModeTag::Image,
            ModeTag::Emoji,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ModeTag::Characteristics => "CHARACTERISTICS",
            ModeTag::Description => "DESCRIPTION",
            ModeTag::Image => "IMAGE",
            ModeTag::Emoji => "EMOJI",
        }
    }

    /// Label used on the dashboard charts
    pub fn label(&self) -> &'static str {
        match self {
            ModeTag::Characteristics => "Características",
            ModeTag::Description => "Descrição",
            ModeTag::Image => "Imagem",
            ModeTag::Emoji => "Emoji",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        ModeTag::all()
            .iter()
            .copied()
            .find(|tag| tag.as_str().eq_ignore_ascii_case(name.trim()))
    }
}

impl fmt::Display for ModeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named guessing variant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameMode {
    pub id: EntityId,
    /// Free text; older backends use a [`ModeTag`] value here
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_for: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl GameMode {
    /// Known mode tag, when the name is one
    pub fn tag(&self) -> Option<ModeTag> {
        ModeTag::parse(&self.name)
    }

    pub fn status_label(&self) -> &'static str {
        if self.is_active {
            "Ativo"
        } else {
            "Inativo"
        }
    }
}

/// JSON body for creating and updating a game mode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameModeDto {
    pub name: String,
    pub description: String,
    pub is_active: bool,
}

impl Default for GameModeDto {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            is_active: true,
        }
    }
}
