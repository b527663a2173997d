//! Editable list of strings (emojis, race, ethnicity)

/// Ordered list of form entries.
///
/// Never empty: the last remaining entry resets to `""` instead of being
/// removed, so the form always shows one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiValueField {
    values: Vec<String>,
}

impl Default for MultiValueField {
    fn default() -> Self {
        Self {
            values: vec![String::new()],
        }
    }
}

impl MultiValueField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefill from an entity list; an empty list becomes `[""]`
    pub fn from_values(values: &[String]) -> Self {
        if values.is_empty() {
            Self::default()
        } else {
            Self {
                values: values.to_vec(),
            }
        }
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Append an empty entry
    pub fn add(&mut self) {
        self.values.push(String::new());
    }

    /// Replace the entry at `index`; out-of-range indices are ignored
    pub fn update(&mut self, index: usize, value: impl Into<String>) {
        if let Some(slot) = self.values.get_mut(index) {
            *slot = value.into();
        }
    }

    /// Remove the entry at `index`; out-of-range indices are ignored
    pub fn remove(&mut self, index: usize) {
        if index >= self.values.len() {
            return;
        }
        if self.values.len() > 1 {
            self.values.remove(index);
        } else {
            self.values = vec![String::new()];
        }
    }

    /// Entries with content, as sent to the backend
    pub fn non_blank(&self) -> Vec<String> {
        self.values
            .iter()
            .filter(|v| !v.trim().is_empty())
            .cloned()
            .collect()
    }
}

impl<S: Into<String>> FromIterator<S> for MultiValueField {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let values: Vec<String> = iter.into_iter().map(Into::into).collect();
        Self::from_values(&values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removing_last_entry_resets() {
        let mut field = MultiValueField::from_values(&["🟢".to_string()]);
        field.remove(0);
        assert_eq!(field.values(), &[String::new()]);
    }

    #[test]
    fn test_add_update_remove() {
        let mut field = MultiValueField::new();
        field.update(0, "ogro");
        field.add();
        field.update(1, "humano");
        assert_eq!(field.len(), 2);

        field.remove(0);
        assert_eq!(field.values(), &["humano".to_string()]);
    }

    #[test]
    fn test_out_of_range_is_ignored() {
        let mut field: MultiValueField = ["a", "b"].into_iter().collect();
        field.update(5, "x");
        field.remove(9);
        assert_eq!(field.values(), &["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_non_blank_filters() {
        let field: MultiValueField = ["🧅", "  ", "", "🟢"].into_iter().collect();
        assert_eq!(field.non_blank(), vec!["🧅".to_string(), "🟢".to_string()]);
        assert!(MultiValueField::new().non_blank().is_empty());
    }

    #[test]
    fn test_prefill_empty_list() {
        assert_eq!(MultiValueField::from_values(&[]), MultiValueField::new());
    }
}
