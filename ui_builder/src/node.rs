use crate::{args::Attributes, helpers::is_whitespace_sensitive_tag};

#[derive(Clone, Debug)]
pub(crate) struct Element {
    pub(crate) tag_name: String,
    pub(crate) attrs: Attributes,
    pub(crate) children: Vec<Node>,
    /// Ended with `end_shorted`, rendered as `<tag />`.
    pub(crate) self_closing: bool,
}

#[derive(Clone, Debug)]
pub(crate) enum Node {
    Comment(String),
    Element(Element),
    /// Markup inserted verbatim.
    Raw(String),
    Text(String),
}

impl Node {
    pub(crate) fn is_text_like(&self) -> bool {
        matches!(self, Node::Raw(..) | Node::Text(..))
    }

    /// Elements that may be surrounded by line breaks without changing the rendered page.
    pub(crate) fn is_block(&self) -> bool {
        matches!(self, Node::Element(element) if !is_whitespace_sensitive_tag(&element.tag_name))
    }
}
