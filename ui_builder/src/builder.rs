use crate::{
    args::Args,
    config::RenderOptions,
    error::{BuildError, BuildErrorKind},
    helpers::{is_known_tag, is_valid_attr_name, kebab_case},
    html::HtmlBuilder,
};
use std::ops::{BitOr, BitOrAssign};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
/// Style flags of [`UiBuilder::button`], combined with `|`.
pub struct ButtonFlags(u8);

impl ButtonFlags {
    pub const NONE: Self = Self(0);
    pub const PRIMARY: Self = Self(1);
    pub const SECONDARY: Self = Self(2);
    pub const DANGER: Self = Self(4);
    pub const FULL_WIDTH: Self = Self(8);
    pub const OUTLINE: Self = Self(16);
    pub const SMALL: Self = Self(32);

    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn bits(self) -> u8 {
        self.0
    }
}

impl BitOr for ButtonFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for ButtonFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

fn log_unknown_tag(tag_name: &str) {
    if !tag_name.contains('-') && !is_known_tag(tag_name) {
        tracing::debug!(tag = tag_name, "opening element with unknown tag name");
    }
}

macro_rules! tag_methods {
    ($($method:ident => $tag:literal),* $(,)?) => {
        $(
            #[doc = concat!("Open a `<", $tag, ">` element.")]
            fn $method(&mut self, args: impl Into<Args>) -> &mut Self {
                self.tag($tag, args)
            }
        )*
    };
}

/// Fluent builder of UI framework markup.
///
/// Implementors supply the framework-specific widgets and class names;
/// everything else (plain tags, the dynamic [`call`](UiBuilder::call) dispatcher,
/// check boxes, ending elements, building) is provided.
///
/// ```
/// use ui_builder::{Bootstrap5, UiBuilder};
///
/// let mut ui = Bootstrap5::new();
/// ui.form_row(())
///     .form_col(6, ())
///     .call("formInput", [("name", "email")])?
///     .end_shorted()?
///     .end()?
///     .end()?;
/// assert_eq!(
///     ui.build()?,
///     r#"<div class="mb-3"><div class="col-md-6"><input name="email" class="form-control" /></div></div>"#
/// );
/// # Ok::<_, ui_builder::BuildError>(())
/// ```
pub trait UiBuilder: Sized {
    fn html(&self) -> &HtmlBuilder;

    fn html_mut(&mut self) -> &mut HtmlBuilder;

    /// Class of the framework for a form control, such as `form-control` for `input`.
    fn form_element_class(&self, tag_name: &str) -> &str;

    /// Open an element with any tag name.
    fn tag(&mut self, tag_name: impl Into<String>, args: impl Into<Args>) -> &mut Self {
        let tag_name = tag_name.into();
        log_unknown_tag(&tag_name);
        self.html_mut().open(tag_name, args);
        self
    }

    /// Dispatch a method by name.
    ///
    /// The name is turned into kebab-case (`formInput` and `form_input` both become `form-input`), then:
    /// - `set-<name>` sets attribute `<name>` of the current element to the text argument;
    /// - `form-<tag>` opens `<tag>` with the framework class of form controls prepended;
    /// - anything else opens an element with that tag name.
    fn call(&mut self, method: &str, args: impl Into<Args>) -> Result<&mut Self, BuildError> {
        let name = kebab_case(method);
        if let Some(attr_name) = name.strip_prefix("set-") {
            let args: Args = args.into();
            return self.set_attr(attr_name, args.text.unwrap_or_default());
        }
        if let Some(tag_name) = name.strip_prefix("form-") {
            log_unknown_tag(tag_name);
            let class = self.form_element_class(tag_name).to_owned();
            self.html_mut()
                .open(tag_name, args)
                .prepend_class(&class);
            return Ok(self);
        }
        Ok(self.tag(name, args))
    }

    /// Set an attribute of the current element.
    fn set_attr(&mut self, name: &str, value: impl Into<String>) -> Result<&mut Self, BuildError> {
        let scope = self
            .html_mut()
            .current_mut()
            .ok_or_else(|| BuildErrorKind::AttributeWithoutElement(name.to_owned()))?;
        if !is_valid_attr_name(name) {
            return Err(BuildErrorKind::InvalidAttributeName(name.to_owned()).into());
        }
        scope.set_attribute(name, value);
        Ok(self)
    }

    /// Append classes to the current element.
    fn set_class(&mut self, class: &str) -> Result<&mut Self, BuildError> {
        self.html_mut()
            .current_mut()
            .ok_or(BuildErrorKind::ClassWithoutElement)?
            .append_class(class);
        Ok(self)
    }

    /// Add escaped text to the current element.
    fn add_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.html_mut().add_text(text);
        self
    }

    /// Add raw markup to the current element.
    fn add_html(&mut self, html: impl Into<String>) -> &mut Self {
        self.html_mut().add_html(html);
        self
    }

    fn add_comment(&mut self, comment: impl Into<String>) -> &mut Self {
        self.html_mut().add_comment(comment);
        self
    }

    /// End the current element, along with wrappers opened implicitly around it.
    fn end(&mut self) -> Result<&mut Self, BuildError> {
        self.html_mut().close()?;
        Ok(self)
    }

    /// End the current element as `<tag />`, along with wrappers opened implicitly around it.
    fn end_shorted(&mut self) -> Result<&mut Self, BuildError> {
        self.html_mut().close_shorted()?;
        Ok(self)
    }

    fn build(&mut self) -> Result<String, BuildError> {
        self.html_mut().build()
    }

    fn build_with(&mut self, options: &RenderOptions) -> Result<String, BuildError> {
        self.html_mut().build_with(options)
    }

    fn checkbox(&mut self, checked: bool, args: impl Into<Args>) -> &mut Self {
        let input = self.html_mut().open("input", args);
        input.set_attribute("type", "checkbox");
        if checked {
            input.set_attribute("checked", "checked");
        }
        self
    }

    fn radio(&mut self, checked: bool, args: impl Into<Args>) -> &mut Self {
        let input = self.html_mut().open("input", args);
        input.set_attribute("type", "radio");
        if checked {
            input.set_attribute("checked", "checked");
        }
        self
    }

    fn option(&mut self, selected: bool, args: impl Into<Args>) -> &mut Self {
        let option = self.html_mut().open("option", args);
        if selected {
            option.set_attribute("selected", "selected");
        }
        self
    }

    /// Column inside a form row. Same as [`col`](UiBuilder::col) unless the framework says otherwise.
    fn form_col(&mut self, width: u8, args: impl Into<Args>) -> &mut Self {
        self.col(width, args)
    }

    fn form_row_tag(&self) -> &'static str {
        "div"
    }

    tag_methods! {
        a => "a",
        abbr => "abbr",
        article => "article",
        aside => "aside",
        b => "b",
        br => "br",
        code => "code",
        div => "div",
        em => "em",
        fieldset => "fieldset",
        footer => "footer",
        h1 => "h1",
        h2 => "h2",
        h3 => "h3",
        h4 => "h4",
        h5 => "h5",
        h6 => "h6",
        header => "header",
        hr => "hr",
        i => "i",
        img => "img",
        input => "input",
        label => "label",
        legend => "legend",
        li => "li",
        main => "main",
        nav => "nav",
        ol => "ol",
        p => "p",
        pre => "pre",
        section => "section",
        select => "select",
        small => "small",
        span => "span",
        strong => "strong",
        tbody => "tbody",
        td => "td",
        textarea => "textarea",
        tfoot => "tfoot",
        th => "th",
        thead => "thead",
        tr => "tr",
        ul => "ul",
    }

    /// Add a complete icon element.
    fn add_icon(&mut self, icon: &str) -> &mut Self;

    /// Add a complete dropdown caret element, if the framework needs one.
    fn add_caret(&mut self) -> &mut Self;

    /// Static text inside an input group.
    fn text(&mut self, args: impl Into<Args>) -> &mut Self;

    fn row(&mut self, args: impl Into<Args>) -> &mut Self;

    /// Grid column, `width` out of 12.
    fn col(&mut self, width: u8, args: impl Into<Args>) -> &mut Self;

    fn input_group(&mut self, args: impl Into<Args>) -> &mut Self;

    fn button_group(&mut self, full_width: bool, args: impl Into<Args>) -> &mut Self;

    fn button(&mut self, flags: ButtonFlags, args: impl Into<Args>) -> &mut Self;

    /// Panel (or card) with a framework color style, `"default"` for none.
    fn panel(&mut self, style: &str, args: impl Into<Args>) -> &mut Self;

    fn panel_header(&mut self, args: impl Into<Args>) -> &mut Self;

    fn panel_body(&mut self, args: impl Into<Args>) -> &mut Self;

    fn panel_footer(&mut self, args: impl Into<Args>) -> &mut Self;

    fn menu(&mut self, args: impl Into<Args>) -> &mut Self;

    fn menu_item(&mut self, args: impl Into<Args>) -> &mut Self;

    fn breadcrumb(&mut self, args: impl Into<Args>) -> &mut Self;

    fn breadcrumb_item(&mut self, args: impl Into<Args>) -> &mut Self;

    fn tab_header(&mut self, args: impl Into<Args>) -> &mut Self;

    /// Tab link targeting the tab content item with the given `id`.
    fn tab_header_item(&mut self, id: &str, active: bool, args: impl Into<Args>) -> &mut Self;

    fn tab_content(&mut self, args: impl Into<Args>) -> &mut Self;

    fn tab_content_item(&mut self, id: &str, active: bool, args: impl Into<Args>) -> &mut Self;

    /// Table with a framework style modifier, empty for none.
    fn table(&mut self, responsive: bool, style: &str, args: impl Into<Args>) -> &mut Self;

    fn form(&mut self, horizontal: bool, wrapped: bool, args: impl Into<Args>) -> &mut Self;

    fn form_row(&mut self, args: impl Into<Args>) -> &mut Self;

    /// Classes of a form row, followed by `class`.
    fn form_row_class(&self, class: &str) -> String;

    /// Classes of a form control with the given tag name, followed by `class`.
    fn form_tag_class(&self, tag_name: &str, class: &str) -> String;

    fn dropdown(&mut self, args: impl Into<Args>) -> &mut Self;

    /// The button toggling a dropdown, with a framework color style, `"default"` for none.
    fn dropdown_item(&mut self, style: &str, args: impl Into<Args>) -> &mut Self;

    fn dropdown_menu(&mut self, args: impl Into<Args>) -> &mut Self;

    fn dropdown_menu_item(&mut self, args: impl Into<Args>) -> &mut Self;

    fn pagination(&mut self, args: impl Into<Args>) -> &mut Self;

    fn pagination_item(&mut self, args: impl Into<Args>) -> &mut Self;

    fn pagination_active_item(&mut self, args: impl Into<Args>) -> &mut Self;

    fn pagination_disabled_item(&mut self, args: impl Into<Args>) -> &mut Self;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_flags() {
        let flags = ButtonFlags::PRIMARY | ButtonFlags::SMALL;
        assert!(flags.contains(ButtonFlags::PRIMARY));
        assert!(flags.contains(ButtonFlags::SMALL));
        assert!(!flags.contains(ButtonFlags::OUTLINE));
        assert!(flags.contains(ButtonFlags::NONE));
        assert_eq!(flags.bits(), 33);
    }
}
