use crate::{
    args::Args,
    builder::{ButtonFlags, UiBuilder},
    helpers::join_classes,
    html::HtmlBuilder,
};

#[derive(Debug, Default)]
/// Builder of [Bootstrap 5](https://getbootstrap.com/docs/5.3/) markup.
///
/// Icons are [Bootstrap Icons](https://icons.getbootstrap.com/) names.
pub struct Bootstrap5 {
    html: HtmlBuilder,
    /// Depth of the `<form>` opened by `form` in horizontal mode.
    horizontal_form: Option<usize>,
}

impl Bootstrap5 {
    pub fn new() -> Self {
        Self::default()
    }

    fn in_horizontal_form(&self) -> bool {
        self.horizontal_form
            .and_then(|depth| self.html.scope_at(depth))
            .is_some_and(|scope| scope.tag_name() == "form")
    }
}

fn button_style(flags: ButtonFlags) -> Option<&'static str> {
    if flags.contains(ButtonFlags::PRIMARY) {
        Some("primary")
    } else if flags.contains(ButtonFlags::DANGER) {
        Some("danger")
    } else if flags.contains(ButtonFlags::SECONDARY) {
        Some("secondary")
    } else {
        None
    }
}

fn button_classes(flags: ButtonFlags) -> String {
    let mut classes = vec![String::from("btn")];
    match (button_style(flags), flags.contains(ButtonFlags::OUTLINE)) {
        (Some(style), true) => classes.push(format!("btn-outline-{style}")),
        (Some(style), false) => classes.push(format!("btn-{style}")),
        (None, _) => {}
    }
    if flags.contains(ButtonFlags::SMALL) {
        classes.push("btn-sm".into());
    }
    if flags.contains(ButtonFlags::FULL_WIDTH) {
        classes.push("w-100".into());
    }
    classes.join(" ")
}

/// Bootstrap has no `default` contextual color.
fn contextual_style(style: &str) -> &str {
    match style {
        "" | "default" => "secondary",
        style => style,
    }
}

impl UiBuilder for Bootstrap5 {
    fn html(&self) -> &HtmlBuilder {
        &self.html
    }

    fn html_mut(&mut self) -> &mut HtmlBuilder {
        &mut self.html
    }

    fn form_element_class(&self, tag_name: &str) -> &str {
        match tag_name {
            "input" | "textarea" => "form-control",
            "select" => "form-select",
            "label" if self.in_horizontal_form() => "col-form-label",
            "label" => "form-label",
            "button" => "btn",
            _ => "",
        }
    }

    fn add_icon(&mut self, icon: &str) -> &mut Self {
        self.html
            .add_element("i", Args::new().class(format!("bi bi-{icon}")), |_| {});
        self
    }

    /// Dropdown toggles draw their caret with CSS, so there is nothing to add.
    fn add_caret(&mut self) -> &mut Self {
        self
    }

    fn text(&mut self, args: impl Into<Args>) -> &mut Self {
        self.html
            .open("span", args)
            .prepend_class("input-group-text");
        self
    }

    fn row(&mut self, args: impl Into<Args>) -> &mut Self {
        self.html.open("div", args).prepend_class("row");
        self
    }

    fn col(&mut self, width: u8, args: impl Into<Args>) -> &mut Self {
        self.html
            .open("div", args)
            .prepend_class(&format!("col-md-{width}"));
        self
    }

    fn input_group(&mut self, args: impl Into<Args>) -> &mut Self {
        self.html.open("div", args).prepend_class("input-group");
        self
    }

    fn button_group(&mut self, full_width: bool, args: impl Into<Args>) -> &mut Self {
        let group = self.html.open("div", args);
        group
            .prepend_class("btn-group")
            .set_attribute("role", "group");
        if full_width {
            group.append_class("w-100");
        }
        self
    }

    fn button(&mut self, flags: ButtonFlags, args: impl Into<Args>) -> &mut Self {
        let button = self.html.open("button", args);
        button.prepend_class(&button_classes(flags));
        if button.attributes().get("type").is_none() {
            button.set_attribute("type", "button");
        }
        self
    }

    fn panel(&mut self, style: &str, args: impl Into<Args>) -> &mut Self {
        let card = self.html.open("div", args);
        card.prepend_class("card");
        if !matches!(style, "" | "default") {
            card.append_class(&format!("border-{style}"));
        }
        self
    }

    fn panel_header(&mut self, args: impl Into<Args>) -> &mut Self {
        self.html.open("div", args).prepend_class("card-header");
        self
    }

    fn panel_body(&mut self, args: impl Into<Args>) -> &mut Self {
        self.html.open("div", args).prepend_class("card-body");
        self
    }

    fn panel_footer(&mut self, args: impl Into<Args>) -> &mut Self {
        self.html.open("div", args).prepend_class("card-footer");
        self
    }

    fn menu(&mut self, args: impl Into<Args>) -> &mut Self {
        self.html.open("div", args).prepend_class("list-group");
        self
    }

    fn menu_item(&mut self, args: impl Into<Args>) -> &mut Self {
        self.html
            .open("a", args)
            .prepend_class("list-group-item list-group-item-action");
        self
    }

    fn breadcrumb(&mut self, args: impl Into<Args>) -> &mut Self {
        self.html
            .open_wrapper("nav", [("aria-label", "breadcrumb")]);
        self.html.open("ol", args).prepend_class("breadcrumb");
        self
    }

    fn breadcrumb_item(&mut self, args: impl Into<Args>) -> &mut Self {
        self.html.open("li", args).prepend_class("breadcrumb-item");
        self
    }

    fn tab_header(&mut self, args: impl Into<Args>) -> &mut Self {
        self.html
            .open("ul", args)
            .prepend_class("nav nav-tabs")
            .set_attribute("role", "tablist");
        self
    }

    fn tab_header_item(&mut self, id: &str, active: bool, args: impl Into<Args>) -> &mut Self {
        self.html.open_wrapper(
            "li",
            [("class", "nav-item"), ("role", "presentation")],
        );
        let link = self.html.open("a", args);
        link.prepend_class("nav-link");
        if active {
            link.append_class("active");
        }
        link.set_attributes([
            ("data-bs-toggle", "tab"),
            ("href", &*format!("#{id}")),
            ("role", "tab"),
        ]);
        self
    }

    fn tab_content(&mut self, args: impl Into<Args>) -> &mut Self {
        self.html.open("div", args).prepend_class("tab-content");
        self
    }

    fn tab_content_item(&mut self, id: &str, active: bool, args: impl Into<Args>) -> &mut Self {
        let pane = self.html.open("div", args);
        pane.prepend_class("tab-pane fade");
        if active {
            pane.append_class("show active");
        }
        pane.set_attributes([("id", id), ("role", "tabpanel")]);
        self
    }

    fn table(&mut self, responsive: bool, style: &str, args: impl Into<Args>) -> &mut Self {
        if responsive {
            self.html
                .open_wrapper("div", [("class", "table-responsive")]);
        }
        let table = self.html.open("table", args);
        table.prepend_class("table");
        if !style.is_empty() {
            table.append_class(&format!("table-{style}"));
        }
        self
    }

    fn form(&mut self, horizontal: bool, wrapped: bool, args: impl Into<Args>) -> &mut Self {
        if wrapped {
            self.html.open_wrapper("div", [("class", "card-body")]);
        }
        let depth = self.html.depth();
        self.horizontal_form = horizontal.then_some(depth);
        self.html.open("form", args);
        self
    }

    fn form_row(&mut self, args: impl Into<Args>) -> &mut Self {
        let class = self.form_row_class("");
        let tag_name = self.form_row_tag();
        self.html.open(tag_name, args).prepend_class(&class);
        self
    }

    fn form_row_class(&self, class: &str) -> String {
        let row_class = if self.in_horizontal_form() {
            "row mb-3"
        } else {
            "mb-3"
        };
        join_classes(row_class, class)
    }

    fn form_tag_class(&self, tag_name: &str, class: &str) -> String {
        join_classes(self.form_element_class(tag_name), class)
    }

    fn dropdown(&mut self, args: impl Into<Args>) -> &mut Self {
        self.html.open("div", args).prepend_class("dropdown");
        self
    }

    fn dropdown_item(&mut self, style: &str, args: impl Into<Args>) -> &mut Self {
        let toggle = self.html.open("button", args);
        toggle
            .prepend_class(&format!("btn btn-{} dropdown-toggle", contextual_style(style)))
            .set_attributes([
                ("type", "button"),
                ("data-bs-toggle", "dropdown"),
                ("aria-expanded", "false"),
            ]);
        self
    }

    fn dropdown_menu(&mut self, args: impl Into<Args>) -> &mut Self {
        self.html.open("ul", args).prepend_class("dropdown-menu");
        self
    }

    fn dropdown_menu_item(&mut self, args: impl Into<Args>) -> &mut Self {
        self.html.open_wrapper("li", ());
        self.html.open("a", args).prepend_class("dropdown-item");
        self
    }

    fn pagination(&mut self, args: impl Into<Args>) -> &mut Self {
        self.html.open_wrapper("nav", ());
        self.html.open("ul", args).prepend_class("pagination");
        self
    }

    fn pagination_item(&mut self, args: impl Into<Args>) -> &mut Self {
        self.html.open_wrapper("li", [("class", "page-item")]);
        self.html.open("a", args).prepend_class("page-link");
        self
    }

    fn pagination_active_item(&mut self, args: impl Into<Args>) -> &mut Self {
        self.html.open_wrapper(
            "li",
            [("class", "page-item active"), ("aria-current", "page")],
        );
        self.html.open("a", args).prepend_class("page-link");
        self
    }

    fn pagination_disabled_item(&mut self, args: impl Into<Args>) -> &mut Self {
        self.html
            .open_wrapper("li", [("class", "page-item disabled")]);
        self.html
            .open("a", args)
            .prepend_class("page-link")
            .set_attribute("aria-disabled", "true");
        self
    }
}
