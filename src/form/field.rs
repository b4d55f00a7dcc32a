//! Labeled numeric entry fields with a single-lock discipline.

use tracing::debug;

/// One labeled entry field holding its raw text value.
#[derive(Debug, Clone)]
pub struct Field {
    /// Stable identifier used in commands and lookups
    pub key: &'static str,

    /// Human-readable label for rendering
    pub label: &'static str,

    /// Raw text as entered; parsed lazily at calculation time
    pub value: String,
}

impl Field {
    pub fn new(key: &'static str, label: &'static str, value: &str) -> Self {
        Self {
            key,
            label,
            value: value.to_string(),
        }
    }
}

/// An ordered set of fields where at most one field is locked at a time.
///
/// Locking is a single optional index rather than a per-field flag, which
/// makes the at-most-one invariant structural.
#[derive(Debug, Clone)]
pub struct FieldSet {
    fields: Vec<Field>,
    locked: Option<usize>,
}

impl FieldSet {
    pub fn new(fields: Vec<Field>) -> Self {
        Self {
            fields,
            locked: None,
        }
    }

    fn index_of(&self, key: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.key == key)
    }

    /// Raw text value of a field.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.index_of(key).map(|i| self.fields[i].value.as_str())
    }

    /// Set a field's raw value. Returns false if the field is unknown or
    /// currently locked.
    pub fn set(&mut self, key: &str, value: String) -> bool {
        let Some(i) = self.index_of(key) else {
            return false;
        };
        if self.locked == Some(i) {
            debug!(field = key, "Edit refused: field is locked");
            return false;
        }
        self.fields[i].value = value;
        true
    }

    /// Parse a field as a number. Empty, missing, and unparsable values all
    /// come back as `None`, signalling "skip the calculation".
    pub fn parsed(&self, key: &str) -> Option<f64> {
        let raw = self.get(key)?.trim();
        if raw.is_empty() {
            return None;
        }
        raw.parse::<f64>().ok()
    }

    /// Toggle the lock on a field: locking it releases any other lock, and
    /// toggling the locked field unlocks it. Returns the field's new locked
    /// state, or `None` for an unknown key.
    pub fn toggle_lock(&mut self, key: &str) -> Option<bool> {
        let i = self.index_of(key)?;
        if self.locked == Some(i) {
            self.locked = None;
            Some(false)
        } else {
            self.locked = Some(i);
            Some(true)
        }
    }

    pub fn is_locked(&self, key: &str) -> bool {
        self.index_of(key).is_some_and(|i| self.locked == Some(i))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FieldSet {
        FieldSet::new(vec![
            Field::new("a", "Alpha", "1"),
            Field::new("b", "Beta", ""),
        ])
    }

    #[test]
    fn test_set_and_get() {
        let mut fields = sample();
        assert!(fields.set("b", "2.5".to_string()));
        assert_eq!(fields.get("b"), Some("2.5"));
        assert!(!fields.set("missing", "1".to_string()));
    }

    #[test]
    fn test_parsed_gating() {
        let mut fields = sample();
        assert_eq!(fields.parsed("a"), Some(1.0));
        assert_eq!(fields.parsed("b"), None); // empty
        fields.set("b", "not a number".to_string());
        assert_eq!(fields.parsed("b"), None); // unparsable
        assert_eq!(fields.parsed("missing"), None);
    }

    #[test]
    fn test_at_most_one_lock() {
        let mut fields = sample();
        assert_eq!(fields.toggle_lock("a"), Some(true));
        assert!(fields.is_locked("a"));

        // Locking another field releases the first.
        assert_eq!(fields.toggle_lock("b"), Some(true));
        assert!(!fields.is_locked("a"));
        assert!(fields.is_locked("b"));

        // Toggling the locked field unlocks it.
        assert_eq!(fields.toggle_lock("b"), Some(false));
        assert!(!fields.is_locked("b"));
    }

    #[test]
    fn test_locked_field_refuses_edits() {
        let mut fields = sample();
        fields.toggle_lock("a");
        assert!(!fields.set("a", "9".to_string()));
        assert_eq!(fields.get("a"), Some("1"));

        fields.toggle_lock("a");
        assert!(fields.set("a", "9".to_string()));
    }
}
