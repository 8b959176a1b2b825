//! End-to-end tests: build, write and patch the figure on disk.

use std::path::{Path, PathBuf};

use linefield::*;

fn temp_output(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("linefield-{tag}-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir.join("final_interactive.html")
}

fn options_for(path: &Path) -> FigureOptions {
    let mut options = FigureOptions::default();
    options.document.output_file = path.to_path_buf();
    options
}

fn cleanup(path: &Path) {
    if let Some(dir) = path.parent() {
        let _ = std::fs::remove_dir_all(dir);
    }
}

#[test]
fn test_generate_writes_patched_document() {
    let path = temp_output("e2e");
    let report = generate_with_options(&options_for(&path)).unwrap();

    assert_eq!(report.output, path);
    assert_eq!(report.num_traces, 21);
    assert!(report.patch.body_styled);
    assert!(report.patch.listener_injected);

    let html = std::fs::read_to_string(&path).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("final_interactive"));
    assert!(html.contains(
        r#"<body style="margin: 0; padding: 0; background-color: transparent; overflow: hidden;">"#
    ));
    assert!(html.contains("MathJax.js"));
    assert!(html.contains("plotly-2.35.2.min.js"));
    assert!(html.contains(r#"class="plotly-graph-div""#));
    assert!(html.contains("Plotly.newPlot("));

    for indices in ["[1]", "[2]", "[3]", "[4]", "[5, 6, 7]", "[8, 9, 10, 11]"] {
        assert!(
            html.contains(&format!("}}, {indices});")),
            "missing restyle for {indices}"
        );
    }
    for field in [
        "fieldPosOpacity",
        "fieldNegOpacity",
        "fieldOutOpacity",
        "cylOpacity",
        "barOpacity",
        "dqOpacity",
    ] {
        assert!(html.contains(&format!("event.data.{field} !== undefined")));
    }

    let script = html.find(LISTENER_SCRIPT_ID).unwrap();
    let body_close = html.rfind("</body>").unwrap();
    assert!(script < body_close);

    cleanup(&path);
}

#[test]
fn test_report_bindings_match_scene() {
    let path = temp_output("bindings");
    let options = options_for(&path);
    let report = generate_with_options(&options).unwrap();
    let scene = build_scene(&options).unwrap();

    assert_eq!(report.bindings, scene.layer_bindings());
    let indices: Vec<Vec<usize>> = report.bindings.iter().map(|b| b.indices.clone()).collect();
    assert_eq!(
        indices,
        vec![
            vec![1],
            vec![2],
            vec![3],
            vec![4],
            vec![5, 6, 7],
            vec![8, 9, 10, 11]
        ]
    );

    cleanup(&path);
}

#[test]
fn test_reruns_are_byte_identical() {
    let path = temp_output("rerun");
    let options = options_for(&path);

    generate_with_options(&options).unwrap();
    let first = std::fs::read(&path).unwrap();
    generate_with_options(&options).unwrap();
    let second = std::fs::read(&path).unwrap();
    assert_eq!(first, second);

    cleanup(&path);
}

#[test]
fn test_repatching_is_a_no_op() {
    let path = temp_output("repatch");
    let options = options_for(&path);
    let report = generate_with_options(&options).unwrap();
    let before = std::fs::read_to_string(&path).unwrap();

    let outcome = patch_file(&path, &options.document.body_style, &report.bindings).unwrap();
    assert!(!outcome.changed());

    let after = std::fs::read_to_string(&path).unwrap();
    assert_eq!(before, after);
    assert_eq!(after.matches(LISTENER_SCRIPT_ID).count(), 1);

    cleanup(&path);
}

#[test]
fn test_invalid_options_write_nothing() {
    let path = temp_output("invalid");
    let mut options = options_for(&path);
    options.surface.opacity = 1.5;

    let err = generate_with_options(&options).unwrap_err();
    assert!(matches!(err, LinefieldError::InvalidOption(_)));
    assert!(!path.exists());

    cleanup(&path);
}

#[test]
fn test_unwritable_output_is_render_error() {
    let path = std::env::temp_dir()
        .join(format!("linefield-missing-{}", std::process::id()))
        .join("no-such-dir")
        .join("out.html");
    let err = generate_with_options(&options_for(&path)).unwrap_err();
    assert!(matches!(err, LinefieldError::RenderError(_)));
}

#[test]
fn test_options_from_json() {
    let path = temp_output("json");
    let json = format!(
        r#"{{ "bar": {{ "element_opacity": 0.25 }}, "document": {{ "output_file": {} }} }}"#,
        serde_json::to_string(&path).unwrap()
    );
    let options: FigureOptions = serde_json::from_str(&json).unwrap();
    let scene = build_scene(&options).unwrap();

    let element = scene.registry.get("charge element").unwrap();
    assert_eq!(element.opacity(), 0.25);
    assert_eq!(scene.registry.get("bar").unwrap().opacity(), 1.0);

    generate_with_options(&options).unwrap();
    assert!(path.exists());
    cleanup(&path);
}
