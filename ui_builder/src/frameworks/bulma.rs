use crate::{
    args::Args,
    builder::{ButtonFlags, UiBuilder},
    helpers::join_classes,
    html::HtmlBuilder,
};

#[derive(Debug, Default)]
/// Builder of [Bulma](https://bulma.io/) markup.
///
/// Icons are Font Awesome names.
pub struct Bulma {
    html: HtmlBuilder,
    /// Depth of the `<form>` opened by `form` in horizontal mode.
    horizontal_form: Option<usize>,
}

impl Bulma {
    pub fn new() -> Self {
        Self::default()
    }

    fn in_horizontal_form(&self) -> bool {
        self.horizontal_form
            .and_then(|depth| self.html.scope_at(depth))
            .is_some_and(|scope| scope.tag_name() == "form")
    }
}

fn button_classes(flags: ButtonFlags) -> String {
    let mut classes = vec!["button"];
    if flags.contains(ButtonFlags::PRIMARY) {
        classes.push("is-primary");
    } else if flags.contains(ButtonFlags::DANGER) {
        classes.push("is-danger");
    } else if flags.contains(ButtonFlags::SECONDARY) {
        classes.push("is-link");
    }
    if flags.contains(ButtonFlags::OUTLINE) {
        classes.push("is-outlined");
    }
    if flags.contains(ButtonFlags::SMALL) {
        classes.push("is-small");
    }
    if flags.contains(ButtonFlags::FULL_WIDTH) {
        classes.push("is-fullwidth");
    }
    classes.join(" ")
}

fn color_modifier(style: &str) -> Option<String> {
    match style {
        "" | "default" => None,
        style => Some(format!("is-{style}")),
    }
}

impl UiBuilder for Bulma {
    fn html(&self) -> &HtmlBuilder {
        &self.html
    }

    fn html_mut(&mut self) -> &mut HtmlBuilder {
        &mut self.html
    }

    fn form_element_class(&self, tag_name: &str) -> &str {
        match tag_name {
            "input" => "input",
            "textarea" => "textarea",
            "label" => "label",
            "button" => "button",
            _ => "",
        }
    }

    fn add_icon(&mut self, icon: &str) -> &mut Self {
        let class = format!("fas fa-{icon}");
        self.html
            .add_element("span", Args::new().class("icon"), |span| {
                span.add_element("i", Args::new().class(class), |_| {});
            });
        self
    }

    fn add_caret(&mut self) -> &mut Self {
        self.html.add_element(
            "span",
            [("class", "icon is-small"), ("aria-hidden", "true")],
            |span| span.add_element("i", Args::new().class("fas fa-angle-down"), |_| {}),
        );
        self
    }

    fn text(&mut self, args: impl Into<Args>) -> &mut Self {
        self.html.open_wrapper("p", [("class", "control")]);
        self.html
            .open("a", args)
            .prepend_class("button is-static");
        self
    }

    fn row(&mut self, args: impl Into<Args>) -> &mut Self {
        self.html.open("div", args).prepend_class("columns");
        self
    }

    fn col(&mut self, width: u8, args: impl Into<Args>) -> &mut Self {
        self.html
            .open("div", args)
            .prepend_class(&format!("column is-{width}"));
        self
    }

    fn input_group(&mut self, args: impl Into<Args>) -> &mut Self {
        self.html
            .open("div", args)
            .prepend_class("field has-addons");
        self
    }

    fn button_group(&mut self, full_width: bool, args: impl Into<Args>) -> &mut Self {
        let group = self.html.open("div", args);
        group.prepend_class("buttons has-addons");
        if full_width {
            group.append_class("is-fullwidth");
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
        let panel = self.html.open("nav", args);
        panel.prepend_class("panel");
        if let Some(modifier) = color_modifier(style) {
            panel.append_class(&modifier);
        }
        self
    }

    fn panel_header(&mut self, args: impl Into<Args>) -> &mut Self {
        self.html.open("p", args).prepend_class("panel-heading");
        self
    }

    fn panel_body(&mut self, args: impl Into<Args>) -> &mut Self {
        self.html.open("div", args).prepend_class("panel-block");
        self
    }

    fn panel_footer(&mut self, args: impl Into<Args>) -> &mut Self {
        self.html.open("div", args).prepend_class("panel-block");
        self
    }

    fn menu(&mut self, args: impl Into<Args>) -> &mut Self {
        self.html.open_wrapper("aside", [("class", "menu")]);
        self.html.open("ul", args).prepend_class("menu-list");
        self
    }

    fn menu_item(&mut self, args: impl Into<Args>) -> &mut Self {
        self.html.open_wrapper("li", ());
        self.html.open("a", args);
        self
    }

    fn breadcrumb(&mut self, args: impl Into<Args>) -> &mut Self {
        self.html.open_wrapper(
            "nav",
            [("class", "breadcrumb"), ("aria-label", "breadcrumbs")],
        );
        self.html.open("ul", args);
        self
    }

    fn breadcrumb_item(&mut self, args: impl Into<Args>) -> &mut Self {
        self.html.open_wrapper("li", ());
        self.html.open("a", args);
        self
    }

    fn tab_header(&mut self, args: impl Into<Args>) -> &mut Self {
        self.html.open_wrapper("div", [("class", "tabs")]);
        self.html.open("ul", args);
        self
    }

    fn tab_header_item(&mut self, id: &str, active: bool, args: impl Into<Args>) -> &mut Self {
        let item = self.html.open_wrapper("li", ());
        if active {
            item.append_class("is-active");
        }
        self.html
            .open("a", args)
            .set_attribute("href", format!("#{id}"));
        self
    }

    fn tab_content(&mut self, args: impl Into<Args>) -> &mut Self {
        self.html.open("div", args).prepend_class("tabs-content");
        self
    }

    fn tab_content_item(&mut self, id: &str, active: bool, args: impl Into<Args>) -> &mut Self {
        let pane = self.html.open("div", args);
        pane.prepend_class("tab-pane");
        if !active {
            pane.append_class("is-hidden");
        }
        pane.set_attribute("id", id);
        self
    }

    fn table(&mut self, responsive: bool, style: &str, args: impl Into<Args>) -> &mut Self {
        if responsive {
            self.html
                .open_wrapper("div", [("class", "table-container")]);
        }
        let table = self.html.open("table", args);
        table.prepend_class("table");
        if let Some(modifier) = color_modifier(style) {
            table.append_class(&modifier);
        }
        self
    }

    fn form(&mut self, horizontal: bool, wrapped: bool, args: impl Into<Args>) -> &mut Self {
        if wrapped {
            self.html.open_wrapper("div", [("class", "box")]);
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
            "field is-horizontal"
        } else {
            "field"
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
        self.html
            .open_wrapper("div", [("class", "dropdown-trigger")]);
        let toggle = self.html.open("button", args);
        toggle.prepend_class("button");
        if let Some(modifier) = color_modifier(style) {
            toggle.append_class(&modifier);
        }
        toggle.set_attributes([("type", "button"), ("aria-haspopup", "true")]);
        self
    }

    fn dropdown_menu(&mut self, args: impl Into<Args>) -> &mut Self {
        self.html
            .open_wrapper("div", [("class", "dropdown-menu"), ("role", "menu")]);
        self.html
            .open("div", args)
            .prepend_class("dropdown-content");
        self
    }

    fn dropdown_menu_item(&mut self, args: impl Into<Args>) -> &mut Self {
        self.html.open("a", args).prepend_class("dropdown-item");
        self
    }

    fn pagination(&mut self, args: impl Into<Args>) -> &mut Self {
        self.html.open_wrapper(
            "nav",
            [
                ("class", "pagination"),
                ("role", "navigation"),
                ("aria-label", "pagination"),
            ],
        );
        self.html
            .open("ul", args)
            .prepend_class("pagination-list");
        self
    }

    fn pagination_item(&mut self, args: impl Into<Args>) -> &mut Self {
        self.html.open_wrapper("li", ());
        self.html
            .open("a", args)
            .prepend_class("pagination-link");
        self
    }

    fn pagination_active_item(&mut self, args: impl Into<Args>) -> &mut Self {
        self.html.open_wrapper("li", ());
        self.html
            .open("a", args)
            .prepend_class("pagination-link is-current")
            .set_attribute("aria-current", "page");
        self
    }

    fn pagination_disabled_item(&mut self, args: impl Into<Args>) -> &mut Self {
        self.html.open_wrapper("li", ());
        self.html
            .open("a", args)
            .prepend_class("pagination-link is-disabled");
        self
    }
}
