//! Franchise records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{EntityId, FileUpload, MultipartBody};

/// A media property (e.g. a film) that characters belong to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Franchise {
    pub id: EntityId,
    pub name: String,
    /// Cover image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    /// Derived server-side
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub characters_count: Option<u64>,
}

impl Franchise {
    /// Character count as displayed (absent counts show as zero)
    pub fn character_count(&self) -> u64 {
        self.characters_count.unwrap_or(0)
    }

    /// Creation date in the panel's `dd/mm/yyyy` format
    pub fn created_on(&self) -> String {
        self.created_at
            .map(|dt| dt.format("%d/%m/%Y").to_string())
            .unwrap_or_default()
    }
}

/// Fields for creating a franchise; sent as multipart
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewFranchise {
    pub name: String,
    pub image_url: Option<String>,
    pub file: Option<FileUpload>,
}

impl NewFranchise {
    pub fn to_multipart(&self) -> MultipartBody {
        MultipartBody::new()
            .text("name", self.name.as_str())
            .file_opt("file", self.file.as_ref())
            .text_opt(
                "imageUrl",
                self.image_url.as_deref().filter(|u| !u.trim().is_empty()),
            )
    }
}

/// JSON body for `PATCH /franchises/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFranchiseDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_franchise() {
        let json = r#"{
            "id": 3,
            "name": "Shrek",
            "imageUrl": "https://res.cloudinary.com/demo/shrek.png",
            "createdAt": "2024-05-10T12:00:00.000Z",
            "updatedAt": "2024-05-11T12:00:00.000Z",
            "charactersCount": 12
        }"#;
        let franchise: Franchise = serde_json::from_str(json).unwrap();
        assert_eq!(franchise.id.as_str(), "3");
        assert_eq!(franchise.character_count(), 12);
        assert_eq!(franchise.created_on(), "10/05/2024");
    }

    #[test]
    fn test_missing_count_shows_zero() {
        let franchise: Franchise =
            serde_json::from_str(r#"{"id":"1","name":"Madagascar"}"#).unwrap();
        assert_eq!(franchise.character_count(), 0);
        assert_eq!(franchise.created_on(), "");
    }

    #[test]
    fn test_update_dto_skips_unset() {
        let dto = UpdateFranchiseDto {
            name: Some("Kung Fu Panda".into()),
            image_url: None,
        };
        assert_eq!(
            serde_json::to_string(&dto).unwrap(),
            r#"{"name":"Kung Fu Panda"}"#
        );
    }

    #[test]
    fn test_new_franchise_multipart() {
        let new = NewFranchise {
            name: "Shrek".into(),
            image_url: Some(String::new()),
            file: None,
        };
        let body = new.to_multipart();
        assert_eq!(body.fields().len(), 1);
        assert_eq!(body.text_value("name"), Some("Shrek"));
    }
}
