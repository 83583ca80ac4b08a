use crate::{
    args::Args,
    config::RenderOptions,
    error::{BuildError, BuildErrorKind},
    node::Node,
    printer,
    scope::Scope,
};
use std::mem;

#[derive(Debug, Default)]
/// Stack of open elements and the markup built so far.
///
/// The element below the top of the stack is the parent of the top one.
/// Ending an element renders it into its parent, or into the output when
/// it has no parent.
///
/// ```
/// use ui_builder::HtmlBuilder;
///
/// let mut html = HtmlBuilder::new();
/// html.open("ul", [("class", "list")]);
/// html.open("li", "first");
/// html.close()?;
/// html.close()?;
/// assert_eq!(html.build()?, r#"<ul class="list"><li>first</li></ul>"#);
/// # Ok::<_, ui_builder::BuildError>(())
/// ```
pub struct HtmlBuilder {
    scopes: Vec<Scope>,
    output: Vec<Node>,
}

impl HtmlBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open an element as a child of the current one.
    pub fn open(&mut self, tag_name: impl Into<String>, args: impl Into<Args>) -> &mut Scope {
        self.push(Scope::new(tag_name.into(), args.into(), false))
    }

    /// Open an element that will be ended implicitly
    /// as soon as the element opened inside of it is ended.
    pub fn open_wrapper(
        &mut self,
        tag_name: impl Into<String>,
        args: impl Into<Args>,
    ) -> &mut Scope {
        self.push(Scope::new(tag_name.into(), args.into(), true))
    }

    fn push(&mut self, scope: Scope) -> &mut Scope {
        tracing::trace!(
            tag = scope.tag_name(),
            depth = self.scopes.len(),
            wrapper = scope.is_wrapper(),
            "open element"
        );
        let index = self.scopes.len();
        self.scopes.push(scope);
        &mut self.scopes[index]
    }

    /// End the current element, then every wrapper it leaves current.
    pub fn close(&mut self) -> Result<(), BuildError> {
        let scope = self.pop()?;
        self.finish(scope, false);
        self.close_wrappers();
        Ok(())
    }

    /// End the current element as `<tag />`, then every wrapper it leaves current.
    ///
    /// Children of a short-ended element are dropped.
    pub fn close_shorted(&mut self) -> Result<(), BuildError> {
        let mut scope = self.pop()?;
        if !scope.children.is_empty() {
            tracing::warn!(
                tag = scope.tag_name(),
                children = scope.children.len(),
                "discarding children of short-ended element"
            );
            scope.children.clear();
        }
        self.finish(scope, true);
        self.close_wrappers();
        Ok(())
    }

    fn pop(&mut self) -> Result<Scope, BuildError> {
        self.scopes
            .pop()
            .ok_or_else(|| BuildErrorKind::NothingToClose.into())
    }

    fn pop_wrapper(&mut self) -> Option<Scope> {
        if self.scopes.last().is_some_and(Scope::is_wrapper) {
            self.scopes.pop()
        } else {
            None
        }
    }

    fn close_wrappers(&mut self) {
        while let Some(wrapper) = self.pop_wrapper() {
            self.finish(wrapper, false);
        }
    }

    fn finish(&mut self, scope: Scope, self_closing: bool) {
        tracing::trace!(
            tag = scope.tag_name(),
            depth = self.scopes.len(),
            self_closing,
            "end element"
        );
        self.push_node(Node::Element(scope.into_element(self_closing)));
    }

    fn push_node(&mut self, node: Node) {
        match self.scopes.last_mut() {
            Some(parent) => parent.children.push(node),
            None => self.output.push(node),
        }
    }

    pub fn current(&self) -> Option<&Scope> {
        self.scopes.last()
    }

    pub fn current_mut(&mut self) -> Option<&mut Scope> {
        self.scopes.last_mut()
    }

    /// Open element at the given depth, counted from the outermost one.
    pub fn scope_at(&self, depth: usize) -> Option<&Scope> {
        self.scopes.get(depth)
    }

    /// Number of open elements.
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Add text to the current element. It is escaped when rendered.
    pub fn add_text(&mut self, text: impl Into<String>) {
        self.push_node(Node::Text(text.into()));
    }

    /// Add markup to the current element as is.
    pub fn add_html(&mut self, html: impl Into<String>) {
        self.push_node(Node::Raw(html.into()));
    }

    pub fn add_comment(&mut self, comment: impl Into<String>) {
        self.push_node(Node::Comment(comment.into()));
    }

    /// Add a complete element to the current one.
    ///
    /// Its content is built by `content` on a separate builder;
    /// elements left open there are ended implicitly.
    ///
    /// ```
    /// use ui_builder::{Args, HtmlBuilder};
    ///
    /// let mut html = HtmlBuilder::new();
    /// html.add_element("span", Args::new().class("icon"), |icon| {
    ///     icon.add_element("i", Args::new().class("fas fa-home"), |_| {});
    /// });
    /// assert_eq!(
    ///     html.build()?,
    ///     r#"<span class="icon"><i class="fas fa-home"></i></span>"#
    /// );
    /// # Ok::<_, ui_builder::BuildError>(())
    /// ```
    pub fn add_element(
        &mut self,
        tag_name: impl Into<String>,
        args: impl Into<Args>,
        content: impl FnOnce(&mut HtmlBuilder),
    ) {
        let mut scope = Scope::new(tag_name.into(), args.into(), false);
        let mut inner = HtmlBuilder::new();
        content(&mut inner);
        inner.close_all();
        scope.children.append(&mut inner.output);
        self.finish(scope, false);
    }

    fn close_all(&mut self) {
        while let Some(scope) = self.scopes.pop() {
            self.finish(scope, false);
        }
    }

    /// Render everything built so far as compact markup and reset the builder.
    pub fn build(&mut self) -> Result<String, BuildError> {
        self.build_with(&RenderOptions::default())
    }

    /// Render everything built so far and reset the builder.
    ///
    /// Fails, leaving the builder untouched, when some elements are still open.
    pub fn build_with(&mut self, options: &RenderOptions) -> Result<String, BuildError> {
        if !self.scopes.is_empty() {
            return Err(BuildErrorKind::UnclosedElements(
                self.scopes
                    .iter()
                    .map(|scope| scope.tag_name().to_owned())
                    .collect(),
            )
            .into());
        }
        let output = mem::take(&mut self.output);
        Ok(printer::render(&output, options))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn balanced_calls_nest_in_open_order() {
        let mut html = HtmlBuilder::new();
        html.open("div", ());
        html.open("p", ());
        html.open("span", "a");
        html.close().unwrap();
        html.close().unwrap();
        html.open("p", "b");
        html.close().unwrap();
        html.close().unwrap();
        assert_eq!(
            html.build().unwrap(),
            "<div><p><span>a</span></p><p>b</p></div>"
        );
    }

    #[test]
    fn one_close_ends_nested_wrappers() {
        let mut html = HtmlBuilder::new();
        html.open_wrapper("div", [("class", "outer")]);
        html.open_wrapper("div", [("class", "inner")]);
        html.open("table", ());
        html.close().unwrap();
        assert_eq!(html.depth(), 0);
        assert_eq!(
            html.build().unwrap(),
            r#"<div class="outer"><div class="inner"><table></table></div></div>"#
        );
    }

    #[test]
    fn wrappers_stop_at_first_regular_element() {
        let mut html = HtmlBuilder::new();
        html.open("form", ());
        html.open_wrapper("li", ());
        html.open("a", ());
        html.close().unwrap();
        assert_eq!(html.current().map(Scope::tag_name), Some("form"));
    }

    #[test]
    fn short_close_still_ends_wrappers() {
        let mut html = HtmlBuilder::new();
        html.open_wrapper("div", [("class", "input-group")]);
        html.open("input", "dropped");
        html.close_shorted().unwrap();
        assert_eq!(
            html.build().unwrap(),
            r#"<div class="input-group"><input /></div>"#
        );
    }

    #[test]
    fn closing_nothing_is_an_error() {
        let mut html = HtmlBuilder::new();
        assert_eq!(html.close().unwrap_err().kind, BuildErrorKind::NothingToClose);
        assert_eq!(
            html.close_shorted().unwrap_err().kind,
            BuildErrorKind::NothingToClose
        );
    }

    #[test]
    fn building_with_open_elements_is_an_error() {
        let mut html = HtmlBuilder::new();
        html.open("div", ());
        html.open("span", ());
        assert_eq!(
            html.build().unwrap_err().kind,
            BuildErrorKind::UnclosedElements(vec!["div".into(), "span".into()])
        );
        assert_eq!(html.depth(), 2);
    }

    #[test]
    fn content_goes_to_current_element_or_output() {
        let mut html = HtmlBuilder::new();
        html.add_comment(" start ");
        html.open("p", ());
        html.add_text("1 < 2");
        html.add_html("<br>");
        html.close().unwrap();
        assert_eq!(html.build().unwrap(), "<!-- start --><p>1 &lt; 2<br></p>");
        assert_eq!(html.build().unwrap(), "");
    }

    #[test]
    fn added_elements_end_what_their_content_left_open() {
        let mut html = HtmlBuilder::new();
        html.open("p", ());
        html.add_element("b", (), |b| {
            b.open("i", "x");
        });
        assert_eq!(html.depth(), 1);
        html.close().unwrap();
        assert_eq!(html.build().unwrap(), "<p><b><i>x</i></b></p>");
    }
}
