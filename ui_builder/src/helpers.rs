use crate::config::Quotes;
use aho_corasick::AhoCorasick;
use itertools::Itertools;
use std::{borrow::Cow, sync::LazyLock};

/// Converts a method name such as `formInput` or `set_data_id` into a kebab-case name.
pub(crate) fn kebab_case(method: &str) -> String {
    let mut name = String::with_capacity(method.len() + 4);
    for (i, c) in method.chars().enumerate() {
        if c == '_' {
            name.push('-');
        } else if c.is_ascii_uppercase() {
            if i > 0 {
                name.push('-');
            }
            name.push(c.to_ascii_lowercase());
        } else {
            name.push(c);
        }
    }
    name
}

/// Joins two class lists with a single space, dropping stray whitespace.
pub(crate) fn join_classes(first: &str, second: &str) -> String {
    [first, second]
        .into_iter()
        .flat_map(str::split_ascii_whitespace)
        .join(" ")
}

static NON_WS_SENSITIVE_TAGS: [&str; 76] = [
    "address", "blockquote", "button", "caption", "center", "colgroup", "dialog", "div",
    "figure", "figcaption", "footer", "form", "select", "option", "optgroup", "header", "hr",
    "legend", "listing", "main", "p", "plaintext", "pre", "progress", "search", "object",
    "details", "summary", "xmp", "area", "base", "basefont", "datalist", "head", "link", "meta",
    "meter", "noembed", "noframes", "param", "rp", "title", "html", "body", "article", "aside",
    "h1", "h2", "h3", "h4", "h5", "h6", "hgroup", "nav", "section", "table", "tr", "thead", "th",
    "tbody", "td", "tfoot", "dir", "dd", "dl", "dt", "menu", "ol", "ul", "li", "fieldset",
    "video", "audio", "picture", "source", "track",
];

/// Inline elements whose children must not get extra whitespace when pretty printed.
pub(crate) fn is_whitespace_sensitive_tag(name: &str) -> bool {
    // "a" is also an SVG tag, so check it first.
    name.eq_ignore_ascii_case("a")
        || !NON_WS_SENSITIVE_TAGS
            .iter()
            .any(|tag| tag.eq_ignore_ascii_case(name))
            && !css_dataset::tags::SVG_TAGS
                .iter()
                .any(|tag| tag.eq_ignore_ascii_case(name))
}

/// Whether the name can be written as an attribute name without breaking the tag.
pub(crate) fn is_valid_attr_name(name: &str) -> bool {
    !name.is_empty()
        && !name.chars().any(|c| {
            c.is_whitespace() || c.is_control() || matches!(c, '"' | '\'' | '<' | '>' | '/' | '=')
        })
}

/// Elements whose content is rendered as written, including whitespace.
pub(crate) fn is_preformatted_tag(name: &str) -> bool {
    name.eq_ignore_ascii_case("pre") || name.eq_ignore_ascii_case("textarea")
}

static VOID_ELEMENTS: [&str; 14] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr", "param",
];

pub(crate) fn is_void_element(name: &str) -> bool {
    VOID_ELEMENTS
        .iter()
        .any(|tag| tag.eq_ignore_ascii_case(name))
}

/// Whether the name is a standard or widely supported HTML, SVG or MathML tag.
pub(crate) fn is_known_tag(name: &str) -> bool {
    let groups: [&[&str]; 4] = [
        &css_dataset::tags::STANDARD_HTML_TAGS[..],
        &css_dataset::tags::NON_STANDARD_HTML_TAGS[..],
        &css_dataset::tags::SVG_TAGS[..],
        &css_dataset::tags::MATH_ML_TAGS[..],
    ];
    groups
        .iter()
        .any(|tags| tags.iter().any(|tag| tag.eq_ignore_ascii_case(name)))
}

static TEXT_ESCAPING_AC: LazyLock<AhoCorasick> =
    LazyLock::new(|| AhoCorasick::new(["&", "<", ">"]).unwrap());
static DOUBLE_QUOTED_ESCAPING_AC: LazyLock<AhoCorasick> =
    LazyLock::new(|| AhoCorasick::new(["&", "<", "\""]).unwrap());
static SINGLE_QUOTED_ESCAPING_AC: LazyLock<AhoCorasick> =
    LazyLock::new(|| AhoCorasick::new(["&", "<", "'"]).unwrap());

pub(crate) fn escape_text(text: &str) -> Cow<'_, str> {
    if memchr::memchr3(b'&', b'<', b'>', text.as_bytes()).is_none() {
        Cow::from(text)
    } else {
        Cow::from(TEXT_ESCAPING_AC.replace_all(text, &["&amp;", "&lt;", "&gt;"]))
    }
}

pub(crate) fn escape_attr_value<'a>(value: &'a str, quotes: &Quotes) -> Cow<'a, str> {
    let (quote, ac, entity) = match quotes {
        Quotes::Double => (b'"', &*DOUBLE_QUOTED_ESCAPING_AC, "&quot;"),
        Quotes::Single => (b'\'', &*SINGLE_QUOTED_ESCAPING_AC, "&#39;"),
    };
    if memchr::memchr3(b'&', b'<', quote, value.as_bytes()).is_none() {
        Cow::from(value)
    } else {
        Cow::from(ac.replace_all(value, &["&amp;", "&lt;", entity]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kebab_case_inserts_hyphens_before_inner_capitals() {
        assert_eq!(kebab_case("formInput"), "form-input");
        assert_eq!(kebab_case("setDataToggle"), "set-data-toggle");
        assert_eq!(kebab_case("Div"), "div");
        assert_eq!(kebab_case("set_aria_label"), "set-aria-label");
        assert_eq!(kebab_case("setHTMLFor"), "set-h-t-m-l-for");
    }

    #[test]
    fn join_classes_trims_stray_whitespace() {
        assert_eq!(join_classes("  btn ", ""), "btn");
        assert_eq!(join_classes("", "  "), "");
        assert_eq!(join_classes("btn  btn-primary", " w-100"), "btn btn-primary w-100");
    }

    #[test]
    fn escaping() {
        assert!(matches!(escape_text("plain"), Cow::Borrowed(_)));
        assert_eq!(escape_text("a < b && c > d"), "a &lt; b &amp;&amp; c &gt; d");
        assert_eq!(
            escape_attr_value(r#"say "hi" & 'bye'"#, &Quotes::Double),
            "say &quot;hi&quot; &amp; 'bye'"
        );
        assert_eq!(
            escape_attr_value(r#"say "hi" & 'bye'"#, &Quotes::Single),
            "say \"hi\" &amp; &#39;bye&#39;"
        );
    }

    #[test]
    fn attribute_names() {
        assert!(is_valid_attr_name("data-id"));
        assert!(is_valid_attr_name("@click"));
        assert!(!is_valid_attr_name(""));
        assert!(!is_valid_attr_name("a b"));
        assert!(!is_valid_attr_name("x\"><script"));
        assert!(!is_valid_attr_name("a=b"));
    }

    #[test]
    fn tag_lookups() {
        assert!(is_void_element("input"));
        assert!(is_void_element("BR"));
        assert!(!is_void_element("div"));
        assert!(is_whitespace_sensitive_tag("span"));
        assert!(is_whitespace_sensitive_tag("a"));
        assert!(!is_whitespace_sensitive_tag("div"));
        assert!(is_preformatted_tag("PRE"));
        assert!(!is_preformatted_tag("p"));
        assert!(is_known_tag("nav"));
        assert!(is_known_tag("svg"));
        assert!(!is_known_tag("foo"));
    }
}
