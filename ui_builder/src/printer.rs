use crate::{
    config::RenderOptions,
    ctx::{Ctx, NestWithCtx},
    helpers::{escape_text, is_preformatted_tag, is_whitespace_sensitive_tag},
    node::{Element, Node},
};
use tiny_pretty::{Doc, IndentKind, PrintOptions};

/// Render the root nodes with the given options.
pub(crate) fn render(nodes: &[Node], options: &RenderOptions) -> String {
    let ctx = Ctx {
        options: &options.markup,
        indent_width: options.layout.indent_width,
    };

    if options.markup.pretty {
        tiny_pretty::print(
            &root_doc(nodes, &ctx),
            &PrintOptions {
                indent_kind: if options.layout.use_tabs {
                    IndentKind::Tab
                } else {
                    IndentKind::Space
                },
                line_break: options.layout.line_break.clone().into(),
                width: options.layout.print_width,
                tab_size: options.layout.indent_width,
            },
        )
    } else {
        let mut out = String::new();
        nodes.iter().for_each(|node| node.write(&ctx, &mut out));
        out
    }
}

pub(crate) trait WriteMarkup {
    fn write(&self, ctx: &Ctx, out: &mut String);
}

impl WriteMarkup for Element {
    fn write(&self, ctx: &Ctx, out: &mut String) {
        ctx.write_open_tag(self, out);
        if !ctx.is_childless(self) {
            self.children.iter().for_each(|child| child.write(ctx, out));
        }
        ctx.write_close_tag(self, out);
    }
}

impl WriteMarkup for Node {
    fn write(&self, ctx: &Ctx, out: &mut String) {
        match self {
            Node::Comment(comment) => {
                out.push_str("<!--");
                out.push_str(comment);
                out.push_str("-->");
            }
            Node::Element(element) => element.write(ctx, out),
            Node::Raw(raw) => out.push_str(raw),
            Node::Text(text) => out.push_str(&escape_text(text)),
        }
    }
}

pub(crate) trait DocGen<'s> {
    fn doc(&'s self, ctx: &Ctx) -> Doc<'s>;
}

impl<'s> DocGen<'s> for Element {
    fn doc(&'s self, ctx: &Ctx) -> Doc<'s> {
        let mut open_tag = String::new();
        ctx.write_open_tag(self, &mut open_tag);
        if ctx.is_childless(self) {
            return Doc::text(open_tag);
        }

        let mut close_tag = String::new();
        ctx.write_close_tag(self, &mut close_tag);

        if self.children.is_empty() {
            open_tag.push_str(&close_tag);
            return Doc::text(open_tag);
        }

        // Breaks are only allowed next to block elements.
        if is_whitespace_sensitive_tag(&self.tag_name)
            || is_preformatted_tag(&self.tag_name)
            || !self.children.iter().any(Node::is_block)
        {
            return Doc::text(open_tag)
                .concat(self.children.iter().map(|child| child.doc(ctx)))
                .append(Doc::text(close_tag));
        }

        let leading = if self.children.first().is_some_and(Node::is_block) {
            Doc::line_or_nil()
        } else {
            Doc::nil()
        };
        let trailing = if self.children.last().is_some_and(Node::is_block) {
            Doc::line_or_nil()
        } else {
            Doc::nil()
        };
        let children = self.children.iter().enumerate().fold(
            Vec::with_capacity(self.children.len() * 2),
            |mut docs, (i, child)| {
                if i > 0 && self.children[i - 1].is_block() && child.is_block() {
                    docs.push(Doc::line_or_nil());
                }
                docs.push(child.doc(ctx));
                docs
            },
        );

        Doc::text(open_tag)
            .append(leading.append(Doc::list(children)).nest_with_ctx(ctx))
            .append(trailing)
            .append(Doc::text(close_tag))
            .group()
    }
}

impl<'s> DocGen<'s> for Node {
    fn doc(&'s self, ctx: &Ctx) -> Doc<'s> {
        match self {
            Node::Comment(comment) => Doc::text(format!("<!--{comment}-->")),
            Node::Element(element) => element.doc(ctx),
            Node::Raw(raw) => Doc::text(raw.as_str()),
            Node::Text(text) => Doc::text(escape_text(text)),
        }
    }
}

fn root_doc<'s>(nodes: &'s [Node], ctx: &Ctx) -> Doc<'s> {
    if nodes.iter().any(Node::is_text_like) {
        Doc::list(nodes.iter().map(|node| node.doc(ctx)).collect())
    } else {
        Doc::list(
            itertools::intersperse(nodes.iter().map(|node| node.doc(ctx)), Doc::hard_line())
                .collect(),
        )
    }
}
