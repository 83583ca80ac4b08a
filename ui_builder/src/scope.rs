use crate::{
    args::{Args, Attributes},
    helpers::join_classes,
    node::{Element, Node},
};

#[derive(Debug)]
/// An open element that hasn't been rendered yet.
///
/// Returned by [`HtmlBuilder::open`](crate::HtmlBuilder::open) so that
/// framework styling can be layered onto the element that was just opened.
pub struct Scope {
    tag_name: String,
    attrs: Attributes,
    pub(crate) children: Vec<Node>,
    is_wrapper: bool,
}

impl Scope {
    pub(crate) fn new(tag_name: String, args: Args, is_wrapper: bool) -> Self {
        let Args { text, attrs } = args;
        Self {
            tag_name,
            attrs,
            children: text.map(Node::Text).into_iter().collect(),
            is_wrapper,
        }
    }

    pub fn tag_name(&self) -> &str {
        &self.tag_name
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attrs
    }

    /// Wrappers were opened implicitly by a widget and are ended together with their content.
    pub fn is_wrapper(&self) -> bool {
        self.is_wrapper
    }

    pub fn set_attribute(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> &mut Self {
        self.attrs.set(name, value);
        self
    }

    /// Merge attributes into the element. Later values replace earlier ones with the same name.
    pub fn set_attributes<K, V>(&mut self, attrs: impl IntoIterator<Item = (K, V)>) -> &mut Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.attrs.extend(attrs);
        self
    }

    pub fn append_class(&mut self, class: &str) -> &mut Self {
        let classes = join_classes(self.attrs.get("class").unwrap_or_default(), class);
        self.attrs.set("class", classes);
        self
    }

    pub fn prepend_class(&mut self, class: &str) -> &mut Self {
        let classes = join_classes(class, self.attrs.get("class").unwrap_or_default());
        self.attrs.set("class", classes);
        self
    }

    pub(crate) fn into_element(self, self_closing: bool) -> Element {
        Element {
            tag_name: self.tag_name,
            attrs: self.attrs,
            children: self.children,
            self_closing,
        }
    }
}
