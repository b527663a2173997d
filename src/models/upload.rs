//! Multipart Request Bodies
//!
//! Create and image-update calls switch to multipart encoding. The field list
//! is built here once and turned into a wire body by each HTTP backend.

use serde::Serialize;

/// A file picked for upload, read into memory at submit time
#[derive(Debug, Clone, PartialEq)]
pub struct FileUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl FileUpload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let content_type = guess_image_mime(&file_name).to_string();
        Self {
            file_name,
            content_type,
            bytes,
        }
    }

    /// Builder method: override the content type
    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Content type for the image formats the panel accepts (`image/*`)
pub fn guess_image_mime(file_name: &str) -> &'static str {
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "avif" => "image/avif",
        _ => "application/octet-stream",
    }
}

/// One part of a multipart body
#[derive(Debug, Clone, PartialEq)]
pub enum FormField {
    Text { name: String, value: String },
    File { name: String, file: FileUpload },
}

impl FormField {
    pub fn name(&self) -> &str {
        match self {
            FormField::Text { name, .. } | FormField::File { name, .. } => name,
        }
    }
}

/// Ordered list of multipart fields.
///
/// Only present values are appended: `None` never produces a part, so the
/// backend can tell an unset field from an empty one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultipartBody {
    fields: Vec<FormField>,
}

impl MultipartBody {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a text field
    pub fn text(mut self, name: &str, value: impl Into<String>) -> Self {
        self.fields.push(FormField::Text {
            name: name.to_string(),
            value: value.into(),
        });
        self
    }

    /// Append a text field when present
    pub fn text_opt(self, name: &str, value: Option<&str>) -> Self {
        match value {
            Some(v) => self.text(name, v),
            None => self,
        }
    }

    /// Append a JSON-stringified value when present
    pub fn json_opt<T: Serialize>(self, name: &str, value: Option<&T>) -> Self {
        match value.and_then(|v| serde_json::to_string(v).ok()) {
            Some(json) => self.text(name, json),
            None => self,
        }
    }

    /// Append a file part when present
    pub fn file_opt(mut self, name: &str, file: Option<&FileUpload>) -> Self {
        if let Some(file) = file {
            self.fields.push(FormField::File {
                name: name.to_string(),
                file: file.clone(),
            });
        }
        self
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn into_fields(self) -> Vec<FormField> {
        self.fields
    }

    /// Value of the first text field with this name
    pub fn text_value(&self, name: &str) -> Option<&str> {
        self.fields.iter().find_map(|f| match f {
            FormField::Text { name: n, value } if n == name => Some(value.as_str()),
            _ => None,
        })
    }

    pub fn has_file(&self) -> bool {
        self.fields
            .iter()
            .any(|f| matches!(f, FormField::File { .. }))
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Replacement image for an entity: an uploaded file, a remote URL, or both
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImageUpdate {
    pub file: Option<FileUpload>,
    pub image_url: Option<String>,
}

impl ImageUpdate {
    pub fn file(file: FileUpload) -> Self {
        Self {
            file: Some(file),
            image_url: None,
        }
    }

    pub fn url(image_url: impl Into<String>) -> Self {
        Self {
            file: None,
            image_url: Some(image_url.into()),
        }
    }

    /// Whether there is anything to send
    pub fn is_empty(&self) -> bool {
        self.file.is_none() && self.image_url.as_deref().map_or(true, |u| u.trim().is_empty())
    }

    /// Multipart body with the file under `file` and the URL under `url_field`
    pub fn to_multipart(&self, url_field: &str) -> MultipartBody {
        MultipartBody::new()
            .file_opt("file", self.file.as_ref())
            .text_opt(url_field, self.image_url.as_deref().filter(|u| !u.trim().is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_fields_are_skipped() {
        let body = MultipartBody::new()
            .text("name", "Shrek")
            .text_opt("imageUrl", None)
            .json_opt::<Vec<String>>("emojis", None)
            .file_opt("file", None);

        assert_eq!(body.fields().len(), 1);
        assert_eq!(body.text_value("name"), Some("Shrek"));
        assert!(!body.has_file());
    }

    #[test]
    fn test_empty_list_is_still_sent() {
        let empty: Vec<String> = Vec::new();
        let body = MultipartBody::new().json_opt("race", Some(&empty));
        assert_eq!(body.text_value("race"), Some("[]"));
    }

    #[test]
    fn test_image_update_fields() {
        let update = ImageUpdate::url("https://res.cloudinary.com/x.png");
        let body = update.to_multipart("imageUrl1");
        assert_eq!(body.text_value("imageUrl1"), Some("https://res.cloudinary.com/x.png"));
        assert!(!body.has_file());

        let blank = ImageUpdate::url("  ");
        assert!(blank.is_empty());
        assert!(blank.to_multipart("imageUrl").is_empty());
    }

    #[test]
    fn test_mime_guess() {
        assert_eq!(guess_image_mime("shrek.PNG"), "image/png");
        assert_eq!(guess_image_mime("fiona.jpeg"), "image/jpeg");
        assert_eq!(guess_image_mime("noext"), "application/octet-stream");
        assert_eq!(FileUpload::new("a.webp", vec![1]).content_type, "image/webp");
    }
}
