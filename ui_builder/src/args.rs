//! Arguments accepted by every element-opening call.

use std::slice;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// Attributes of an element.
///
/// Names are unique and keep the order in which they were first set,
/// so the rendered markup is deterministic.
/// Setting an existing name replaces its value in place.
pub struct Attributes(Vec<(String, String)>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.0.iter_mut().find(|(key, _)| *key == name) {
            Some((_, existing)) => *existing = value,
            None => self.0.push((name, value)),
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        let index = self.0.iter().position(|(key, _)| key == name)?;
        Some(self.0.remove(index).1)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

impl<K, V> Extend<(K, V)> for Attributes
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        iter.into_iter()
            .for_each(|(name, value)| self.set(name, value));
    }
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut attrs = Attributes::new();
        attrs.extend(iter);
        attrs
    }
}

impl<'a> IntoIterator for &'a Attributes {
    type Item = &'a (String, String);
    type IntoIter = slice::Iter<'a, (String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// Text content and attributes for a newly opened element.
///
/// Most calls take `impl Into<Args>`, so any of these work:
///
/// ```
/// use ui_builder::Args;
///
/// let _: Args = ().into();
/// let _: Args = "Save".into();
/// let _: Args = [("id", "save"), ("type", "submit")].into();
/// let _: Args = ("Save", [("id", "save")]).into();
/// let _ = Args::new().text("Save").attr("id", "save").class("wide");
/// ```
pub struct Args {
    pub(crate) text: Option<String>,
    pub(crate) attrs: Attributes,
}

impl Args {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text content of the element. It is escaped when rendered.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.set(name, value);
        self
    }

    pub fn class(self, class: impl Into<String>) -> Self {
        self.attr("class", class)
    }

    pub fn get_text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attrs
    }
}

impl From<()> for Args {
    fn from(_: ()) -> Self {
        Args::default()
    }
}

impl From<&str> for Args {
    fn from(text: &str) -> Self {
        Args::new().text(text)
    }
}

impl From<String> for Args {
    fn from(text: String) -> Self {
        Args::new().text(text)
    }
}

impl From<Attributes> for Args {
    fn from(attrs: Attributes) -> Self {
        Args { text: None, attrs }
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Args
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(attrs: [(K, V); N]) -> Self {
        Args {
            text: None,
            attrs: attrs.into_iter().collect(),
        }
    }
}

impl<K, V> From<Vec<(K, V)>> for Args
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(attrs: Vec<(K, V)>) -> Self {
        Args {
            text: None,
            attrs: attrs.into_iter().collect(),
        }
    }
}

impl<T, K, V, const N: usize> From<(T, [(K, V); N])> for Args
where
    T: Into<String>,
    K: Into<String>,
    V: Into<String>,
{
    fn from((text, attrs): (T, [(K, V); N])) -> Self {
        Args {
            text: Some(text.into()),
            attrs: attrs.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attributes_keep_first_insertion_order() {
        let mut attrs = Attributes::new();
        attrs.set("id", "a");
        attrs.set("class", "b");
        attrs.set("id", "c");
        assert_eq!(attrs.iter().collect::<Vec<_>>(), [("id", "c"), ("class", "b")]);
        assert_eq!(attrs.remove("id").as_deref(), Some("c"));
        assert_eq!(attrs.len(), 1);
    }

    #[test]
    fn later_keys_win_on_bulk_merge() {
        let attrs: Attributes = [("type", "text"), ("name", "q"), ("type", "search")]
            .into_iter()
            .collect();
        assert_eq!(attrs.get("type"), Some("search"));
        assert_eq!(attrs.len(), 2);
    }

    #[test]
    fn conversions() {
        let args: Args = ("Go", [("href", "/")]).into();
        assert_eq!(args.get_text(), Some("Go"));
        assert_eq!(args.attributes().get("href"), Some("/"));

        let args: Args = vec![("id", String::from("x"))].into();
        assert_eq!(args.get_text(), None);
        assert_eq!(args.attributes().get("id"), Some("x"));
    }
}
