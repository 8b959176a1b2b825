//! Post-processing of a written plot document.
//!
//! Two edits are applied, each at most once:
//! - an inline style on the `<body>` tag, skipped when the tag already has one
//! - the scroll listener script before `</body>`, skipped when a script with
//!   [`LISTENER_SCRIPT_ID`] is already present
//!
//! The listener is generated from [`LayerBinding`]s, so the trace indices it
//! restyles always match the scene that produced the document.

use std::fmt::Write as _;
use std::path::Path;

use linefield_core::LayerBinding;

use crate::document::{escape_html, PLOT_DIV_CLASS};
use crate::error::{RenderError, RenderResult};

/// Element id marking an injected listener.
pub const LISTENER_SCRIPT_ID: &str = "linefield-scroll-listener";

/// Message `type` the listener reacts to.
pub const SCROLL_MESSAGE_TYPE: &str = "scroll";

/// Which edits a patch pass applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PatchOutcome {
    /// The body style was added.
    pub body_styled: bool,
    /// The listener script was inserted.
    pub listener_injected: bool,
}

impl PatchOutcome {
    /// Returns true if the document changed.
    #[must_use]
    pub fn changed(&self) -> bool {
        self.body_styled || self.listener_injected
    }
}

/// Generates the scroll listener `<script>` element.
///
/// For each binding, a message carrying the binding's field restyles the
/// bound traces. Values are forwarded as-is; absent fields are skipped.
pub fn listener_script(bindings: &[LayerBinding]) -> String {
    let mut js = String::with_capacity(512 + bindings.len() * 160);

    let _ = write!(
        js,
        r#"<script id="{LISTENER_SCRIPT_ID}" type="text/javascript">
    window.addEventListener('message', function(event) {{
        const plotDiv = document.getElementsByClassName('{PLOT_DIV_CLASS}')[0];
        if (!plotDiv) return;
        if (!event.data || event.data.type !== '{SCROLL_MESSAGE_TYPE}') return;
"#
    );

    for binding in bindings {
        let value = js_member("event.data", &binding.message_field);
        let update = binding
            .restyle_keys
            .iter()
            .map(|key| format!("{}: {value}", js_string(key)))
            .collect::<Vec<_>>()
            .join(", ");
        let indices = binding
            .indices
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");

        let _ = write!(
            js,
            "        // {group}
        if ({value} !== undefined) {{
            Plotly.restyle(plotDiv, {{ {update} }}, [{indices}]);
        }}
",
            group = binding.group.replace(['\r', '\n'], " "),
        );
    }

    js.push_str("    });\n</script>\n");
    js
}

/// Applies the body style and listener to an HTML string.
///
/// Fails with [`RenderError::MissingTag`] if there is no `<body>` or `</body>`.
pub fn patch_html(
    html: &str,
    body_style: &str,
    bindings: &[LayerBinding],
) -> RenderResult<(String, PatchOutcome)> {
    let mut outcome = PatchOutcome::default();
    let mut out = html.to_string();

    let (tag_start, tag_end) = find_body_open(&out).ok_or(RenderError::MissingTag("<body>"))?;
    if has_style_attribute(&out[tag_start..tag_end]) {
        log::debug!("body tag already styled, leaving it");
    } else {
        let insert_at = tag_start + "<body".len();
        out.insert_str(insert_at, &format!(r#" style="{}""#, escape_html(body_style)));
        outcome.body_styled = true;
    }

    if out.contains(&format!(r#"id="{LISTENER_SCRIPT_ID}""#)) {
        log::debug!("scroll listener already present, leaving it");
    } else {
        let close = out.rfind("</body>").ok_or(RenderError::MissingTag("</body>"))?;
        out.insert_str(close, &listener_script(bindings));
        outcome.listener_injected = true;
    }

    Ok((out, outcome))
}

/// Patches a document on disk in place.
///
/// The file is only rewritten if an edit was applied.
pub fn patch_file(
    path: &Path,
    body_style: &str,
    bindings: &[LayerBinding],
) -> RenderResult<PatchOutcome> {
    let html = std::fs::read_to_string(path)?;
    let (patched, outcome) = patch_html(&html, body_style, bindings)?;

    if outcome.changed() {
        std::fs::write(path, patched)?;
        log::info!(
            "patched {} (body style: {}, listener: {})",
            path.display(),
            outcome.body_styled,
            outcome.listener_injected
        );
    } else {
        log::info!("{} already patched", path.display());
    }
    Ok(outcome)
}

/// Returns the byte span of the opening `<body ...>` tag.
///
/// Comments and `<script>` contents are skipped, so markup quoted inside them
/// is never taken for the body tag.
fn find_body_open(html: &str) -> Option<(usize, usize)> {
    // ASCII lowering keeps byte offsets valid for `html`.
    let lower = html.to_ascii_lowercase();
    let mut pos = 0;
    while let Some(offset) = lower[pos..].find('<') {
        let start = pos + offset;
        let rest = &lower[start..];
        if rest.starts_with("<!--") {
            pos = start + rest.find("-->")? + "-->".len();
        } else if opens_tag(rest, "script") {
            pos = start + rest.find("</script")? + "</script".len();
        } else if opens_tag(rest, "body") {
            return Some((start, start + tag_end(&html[start..])?));
        } else {
            pos = start + 1;
        }
    }
    None
}

/// True if `text` starts with the opening tag `<name`, not a longer name.
fn opens_tag(text: &str, name: &str) -> bool {
    text.strip_prefix('<')
        .and_then(|t| t.strip_prefix(name))
        .and_then(|t| t.chars().next())
        .is_some_and(|c| c == '>' || c == '/' || c.is_ascii_whitespace())
}

/// Offset just past the `>` closing the tag at the start of `tag`.
fn tag_end(tag: &str) -> Option<usize> {
    let mut quote = None;
    for (i, c) in tag.char_indices() {
        match (quote, c) {
            (Some(q), _) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(c),
            (None, '>') => return Some(i + 1),
            _ => {}
        }
    }
    None
}

/// Attribute names of an opening tag, skipping over attribute values.
fn attribute_names(tag: &str) -> Vec<&str> {
    let inner = tag.trim_start_matches('<').trim_end_matches('>');
    let mut rest = inner.trim_start_matches(|c: char| !c.is_ascii_whitespace() && c != '/');
    let mut names = Vec::new();

    loop {
        rest = rest.trim_start_matches(|c: char| c.is_ascii_whitespace() || c == '/');
        if rest.is_empty() {
            return names;
        }
        let name_len = rest
            .find(|c: char| c.is_ascii_whitespace() || c == '=' || c == '/')
            .unwrap_or(rest.len());
        names.push(&rest[..name_len]);
        rest = rest[name_len..].trim_start();

        if let Some(value) = rest.strip_prefix('=') {
            let value = value.trim_start();
            rest = match value.chars().next() {
                Some(q @ ('"' | '\'')) => value[1..].find(q).map_or("", |end| &value[end + 2..]),
                _ => value.trim_start_matches(|c: char| !c.is_ascii_whitespace()),
            };
        }
    }
}

fn has_style_attribute(tag: &str) -> bool {
    attribute_names(tag)
        .iter()
        .any(|name| name.eq_ignore_ascii_case("style"))
}

fn js_string(text: &str) -> String {
    // serde_json string escaping is valid JavaScript.
    serde_json::Value::String(text.to_string()).to_string()
}

fn js_member(object: &str, field: &str) -> String {
    let is_identifier = field
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        && field
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$');
    if is_identifier {
        format!("{object}.{field}")
    } else {
        format!("{object}[{}]", js_string(field))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const STYLE: &str = "margin: 0;";

    fn binding(field: &str, keys: &[&str], indices: &[usize]) -> LayerBinding {
        LayerBinding {
            group: format!("{field} group"),
            message_field: field.to_string(),
            restyle_keys: keys.iter().map(|k| (*k).to_string()).collect(),
            indices: indices.to_vec(),
        }
    }

    fn sample_bindings() -> Vec<LayerBinding> {
        vec![
            binding("fieldPosOpacity", &["marker.opacity"], &[1]),
            binding("barOpacity", &["opacity"], &[5, 6, 7]),
            binding("dqOpacity", &["opacity", "marker.opacity"], &[8, 9, 10, 11]),
        ]
    }

    const PAGE: &str = "<html>\n<body>\n<div class=\"plotly-graph-div\"></div>\n</body>\n</html>\n";

    #[test]
    fn test_listener_script_restyles_bound_indices() {
        let js = listener_script(&sample_bindings());
        assert!(js.starts_with(r#"<script id="linefield-scroll-listener""#));
        assert!(js.contains("getElementsByClassName('plotly-graph-div')[0]"));
        assert!(js.contains("event.data.type !== 'scroll'"));
        assert!(js.contains(
            r#"Plotly.restyle(plotDiv, { "marker.opacity": event.data.fieldPosOpacity }, [1]);"#
        ));
        assert!(js.contains(r#"{ "opacity": event.data.barOpacity }, [5, 6, 7]"#));
        assert!(js.contains(
            r#"{ "opacity": event.data.dqOpacity, "marker.opacity": event.data.dqOpacity }, [8, 9, 10, 11]"#
        ));
        assert!(js.trim_end().ends_with("</script>"));
    }

    #[test]
    fn test_non_identifier_field_uses_brackets() {
        assert_eq!(js_member("event.data", "barOpacity"), "event.data.barOpacity");
        assert_eq!(
            js_member("event.data", "bar-opacity"),
            r#"event.data["bar-opacity"]"#
        );
        assert_eq!(js_member("event.data", "1st"), r#"event.data["1st"]"#);
    }

    #[test]
    fn test_patch_applies_both_edits() {
        let (out, outcome) = patch_html(PAGE, STYLE, &sample_bindings()).unwrap();
        assert!(outcome.body_styled);
        assert!(outcome.listener_injected);
        assert!(out.contains(r#"<body style="margin: 0;">"#));
        let script_at = out.find(LISTENER_SCRIPT_ID).unwrap();
        let close_at = out.rfind("</body>").unwrap();
        assert!(script_at < close_at);
    }

    #[test]
    fn test_patch_is_idempotent() {
        let (once, _) = patch_html(PAGE, STYLE, &sample_bindings()).unwrap();
        let (twice, outcome) = patch_html(&once, STYLE, &sample_bindings()).unwrap();
        assert_eq!(outcome, PatchOutcome::default());
        assert!(!outcome.changed());
        assert_eq!(once, twice);
        assert_eq!(twice.matches(LISTENER_SCRIPT_ID).count(), 1);
        assert_eq!(twice.matches("style=").count(), 1);
    }

    #[test]
    fn test_existing_body_style_is_kept() {
        let page = "<body class=\"x\" style=\"color: red\">\n</body>";
        let (out, outcome) = patch_html(page, STYLE, &[]).unwrap();
        assert!(!outcome.body_styled);
        assert!(outcome.listener_injected);
        assert!(out.starts_with("<body class=\"x\" style=\"color: red\">"));
    }

    #[test]
    fn test_bodylike_tags_are_skipped() {
        let page = "<bodyguard></bodyguard>\n<body>\n</body>";
        let (out, _) = patch_html(page, STYLE, &[]).unwrap();
        assert!(out.starts_with("<bodyguard></bodyguard>\n<body style="));
    }

    #[test]
    fn test_body_style_is_attribute_escaped() {
        let (out, outcome) =
            patch_html("<body>\n</body>", r#"font-family: "Fira Sans";"#, &[]).unwrap();
        assert!(outcome.body_styled);
        assert!(out.starts_with(r#"<body style="font-family: &quot;Fira Sans&quot;;">"#));
        assert_eq!(attribute_names(&out[..out.find('>').unwrap() + 1]), vec!["style"]);
    }

    #[test]
    fn test_body_in_script_or_comment_is_skipped() {
        let page = "<head><script>var s = \"<body>\";</script><!-- <body> --></head>\n<BODY>\n</body>";
        let (out, outcome) = patch_html(page, STYLE, &[]).unwrap();
        assert!(outcome.body_styled);
        assert!(out.contains(r#"var s = "<body>";</script><!-- <body> -->"#));
        assert!(out.contains(r#"<BODY style="margin: 0;">"#));
    }

    #[test]
    fn test_style_inside_attribute_value_is_not_a_style() {
        let page = "<body class=\"a style=b\">\n</body>";
        let (out, outcome) = patch_html(page, STYLE, &[]).unwrap();
        assert!(outcome.body_styled);
        assert!(out.starts_with(r#"<body style="margin: 0;" class="a style=b">"#));
    }

    #[test]
    fn test_attribute_names() {
        assert_eq!(attribute_names("<body>"), Vec::<&str>::new());
        assert_eq!(
            attribute_names(r#"<body data-x='1 > 0' hidden STYLE=color:red>"#),
            vec!["data-x", "hidden", "STYLE"]
        );
        assert_eq!(tag_end(r#"<body title="a>b">x"#), Some(18));
    }

    #[test]
    fn test_missing_tags_are_errors() {
        assert!(matches!(
            patch_html("<html></html>", STYLE, &[]),
            Err(RenderError::MissingTag("<body>"))
        ));
        assert!(matches!(
            patch_html("<body>", STYLE, &[]),
            Err(RenderError::MissingTag("</body>"))
        ));
    }

    proptest! {
        #[test]
        fn prop_patching_twice_equals_once(
            field in "[a-zA-Z][a-zA-Z0-9]{0,12}",
            indices in proptest::collection::vec(0usize..64, 0..8),
        ) {
            let bindings = vec![binding(&field, &["opacity"], &indices)];
            let (once, first) = patch_html(PAGE, STYLE, &bindings).unwrap();
            let (twice, second) = patch_html(&once, STYLE, &bindings).unwrap();
            prop_assert!(first.changed());
            prop_assert!(!second.changed());
            prop_assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_patch_file_rewrites_once() {
        let path = std::env::temp_dir().join(format!(
            "linefield-patch-{}.html",
            std::process::id()
        ));
        std::fs::write(&path, PAGE).unwrap();

        let first = patch_file(&path, STYLE, &sample_bindings()).unwrap();
        assert!(first.changed());
        let second = patch_file(&path, STYLE, &sample_bindings()).unwrap();
        assert!(!second.changed());

        let html = std::fs::read_to_string(&path).unwrap();
        assert_eq!(html.matches(LISTENER_SCRIPT_ID).count(), 1);
        std::fs::remove_file(&path).unwrap();
    }
}
