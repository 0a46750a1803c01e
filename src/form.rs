/// Named field values of a submitted search form, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    fields: Vec<(String, String)>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.push((name.into(), value.into()));
    }

    /// Value of the field `name`. Repeated names resolve to the last one,
    /// the same way collecting the pairs into a map would.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .rev()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for FormData
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut form = FormData::new();
        for (name, value) in iter {
            form.set(name, value);
        }
        form
    }
}

#[test]
fn test_get_resolves_last_duplicate() {
    let form = FormData::new()
        .with_field("query", "hamlet")
        .with_field("page", "1")
        .with_field("query", "macbeth");

    assert_eq!(form.get("query"), Some("macbeth"));
    assert_eq!(form.get("page"), Some("1"));
    assert_eq!(form.get("limit"), None);
    assert_eq!(form.len(), 3);
}
