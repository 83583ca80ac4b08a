use crate::{
    config::MarkupOptions,
    helpers::{escape_attr_value, is_valid_attr_name, is_void_element},
    node::Element,
};
use tiny_pretty::Doc;

pub(crate) struct Ctx<'b> {
    pub(crate) options: &'b MarkupOptions,
    pub(crate) indent_width: usize,
}

impl Ctx<'_> {
    /// Whether the element is written without children and without a closing tag.
    pub(crate) fn is_childless(&self, element: &Element) -> bool {
        element.self_closing || element.children.is_empty() && is_void_element(&element.tag_name)
    }

    pub(crate) fn write_open_tag(&self, element: &Element, out: &mut String) {
        let quote = self.options.quotes.as_char();
        out.push('<');
        out.push_str(&element.tag_name);
        for (name, value) in element.attrs.iter() {
            if !is_valid_attr_name(name) {
                tracing::warn!(
                    tag = element.tag_name.as_str(),
                    attr = name,
                    "skip invalid attribute name"
                );
                continue;
            }
            out.push(' ');
            out.push_str(name);
            out.push('=');
            out.push(quote);
            out.push_str(&escape_attr_value(value, &self.options.quotes));
            out.push(quote);
        }
        if element.self_closing || self.options.void_self_closing && self.is_childless(element) {
            out.push_str(" />");
        } else {
            out.push('>');
        }
    }

    pub(crate) fn write_close_tag(&self, element: &Element, out: &mut String) {
        if !self.is_childless(element) {
            out.push_str("</");
            out.push_str(&element.tag_name);
            out.push('>');
        }
    }
}

pub(crate) trait NestWithCtx {
    fn nest_with_ctx(self, ctx: &Ctx) -> Self;
}

impl NestWithCtx for Doc<'_> {
    fn nest_with_ctx(self, ctx: &Ctx) -> Self {
        self.nest(ctx.indent_width)
    }
}
