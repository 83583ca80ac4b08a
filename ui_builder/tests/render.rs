use insta::assert_snapshot;
use ui_builder::{
    Bootstrap5, Bulma, UiBuilder,
    config::{LayoutOptions, MarkupOptions, Quotes, RenderOptions},
};

fn pretty() -> RenderOptions {
    RenderOptions {
        markup: MarkupOptions {
            pretty: true,
            ..Default::default()
        },
        ..Default::default()
    }
}

#[test]
fn pretty_pagination() -> anyhow::Result<()> {
    let mut ui = Bootstrap5::new();
    ui.pagination(())
        .pagination_disabled_item("Previous")
        .end()?
        .pagination_item(("2", [("href", "?page=2")]))
        .end()?
        .end()?;
    assert_snapshot!(ui.build_with(&pretty())?, @r#"
<nav>
  <ul class="pagination">
    <li class="page-item disabled"><a class="page-link" aria-disabled="true">Previous</a></li>
    <li class="page-item"><a href="?page=2" class="page-link">2</a></li>
  </ul>
</nav>
"#);
    Ok(())
}

#[test]
fn pretty_list_group_keeps_links_together() -> anyhow::Result<()> {
    let mut ui = Bootstrap5::new();
    ui.menu(())
        .menu_item(("Dashboard", [("href", "/")]))
        .end()?
        .menu_item(("Settings", [("href", "/settings")]))
        .end()?
        .end()?;
    assert_eq!(
        ui.build_with(&pretty())?,
        concat!(
            r#"<div class="list-group">"#,
            r#"<a href="/" class="list-group-item list-group-item-action">Dashboard</a>"#,
            r#"<a href="/settings" class="list-group-item list-group-item-action">Settings</a>"#,
            r#"</div>"#,
        )
    );
    Ok(())
}

#[test]
fn pretty_output_leaves_inline_siblings_and_pre_alone() -> anyhow::Result<()> {
    let sentence = "this sentence goes on for long enough that the paragraph overflows";
    let mut ui = Bulma::new();
    ui.p(())
        .strong(sentence)
        .end()?
        .em(sentence)
        .end()?
        .end()?
        .pre(())
        .code(sentence)
        .end()?
        .code(sentence)
        .end()?
        .end()?;
    assert_eq!(
        ui.build_with(&pretty())?,
        format!(
            "<p><strong>{sentence}</strong><em>{sentence}</em></p>\n\
             <pre><code>{sentence}</code><code>{sentence}</code></pre>"
        )
    );
    Ok(())
}

#[test]
fn pretty_output_keeps_inline_content_together() -> anyhow::Result<()> {
    let mut ui = Bulma::new();
    ui.div(())
        .span("a")
        .end()?
        .add_text(" and ")
        .span("b")
        .end()?
        .end()?;
    assert_eq!(
        ui.build_with(&pretty())?,
        "<div><span>a</span> and <span>b</span></div>"
    );
    Ok(())
}

#[test]
fn pretty_output_with_tabs() -> anyhow::Result<()> {
    let mut ui = Bulma::new();
    ui.ul(())
        .li("a fairly long list item that fills the line")
        .end()?
        .li("and another one")
        .end()?
        .end()?;
    let options = RenderOptions {
        layout: LayoutOptions {
            use_tabs: true,
            ..Default::default()
        },
        ..pretty()
    };
    assert_eq!(
        ui.build_with(&options)?,
        "<ul>\n\t<li>a fairly long list item that fills the line</li>\n\t<li>and another one</li>\n</ul>"
    );
    Ok(())
}

#[test]
fn void_elements_and_quotes() -> anyhow::Result<()> {
    let mut ui = Bootstrap5::new();
    ui.checkbox(true, [("title", "it's")]).end()?;
    let options = RenderOptions {
        markup: MarkupOptions {
            quotes: Quotes::Single,
            void_self_closing: true,
            ..Default::default()
        },
        ..Default::default()
    };
    assert_eq!(
        ui.build_with(&options)?,
        "<input title='it&#39;s' type='checkbox' checked='checked' />"
    );
    Ok(())
}

#[cfg(feature = "config_serde")]
#[test]
fn render_options_from_toml() -> anyhow::Result<()> {
    let options: RenderOptions = toml::from_str(
        r#"
pretty = true
indentWidth = 4
quotes = "single"
"#,
    )?;
    assert!(options.markup.pretty);
    assert!(!options.markup.void_self_closing);
    assert!(matches!(options.markup.quotes, Quotes::Single));
    assert_eq!(options.layout.indent_width, 4);
    assert_eq!(options.layout.print_width, 80);
    Ok(())
}
