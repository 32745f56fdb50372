use crate::objects::Object;

/// PDF dictionary that keeps keys in insertion order, so two runs with the
/// same inputs serialize to the same bytes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dictionary {
    entries: Vec<(String, Object)>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Insert or replace `key`. A replaced key keeps its original position.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Object>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Object> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&String, &Object)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(dict: &Dictionary) -> Vec<&str> {
        dict.entries().map(|(k, _)| k.as_str()).collect()
    }

    #[test]
    fn test_new_dictionary() {
        let dict = Dictionary::new();
        assert_eq!(dict.entries().count(), 0);
        assert_eq!(dict.get("Type"), None);
    }

    #[test]
    fn test_set_and_get() {
        let mut dict = Dictionary::new();
        dict.set("Type", Object::name("Page"));
        dict.set("Count", 42i64);

        assert_eq!(dict.get("Type"), Some(&Object::Name("Page".to_string())));
        assert_eq!(dict.get("Count"), Some(&Object::Integer(42)));
        assert_eq!(dict.get("Missing"), None);
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        let mut dict = Dictionary::with_capacity(3);
        dict.set("Type", Object::name("Pages"));
        dict.set("Kids", Object::Array(Vec::new()));
        dict.set("Count", 0i64);

        assert_eq!(keys(&dict), vec!["Type", "Kids", "Count"]);
    }

    #[test]
    fn test_replace_keeps_position() {
        let mut dict = Dictionary::new();
        dict.set("Length", 0i64);
        dict.set("Filter", Object::name("FlateDecode"));
        dict.set("Length", 128i64);

        assert_eq!(keys(&dict), vec!["Length", "Filter"]);
        assert_eq!(dict.get("Length"), Some(&Object::Integer(128)));
    }

    #[test]
    fn test_nested_dictionary() {
        let mut fonts = Dictionary::new();
        fonts.set("Helvetica", Object::Reference(crate::objects::ObjectId::new(3, 0)));
        let mut resources = Dictionary::new();
        resources.set("Font", fonts.clone());

        assert_eq!(resources.get("Font"), Some(&Object::Dictionary(fonts)));
    }
}
