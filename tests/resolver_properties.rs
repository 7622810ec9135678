use div_centering::style::{resolve, CenteringMethod, PlaygroundParams, StyleMap};

/// Split a snippet into `(selector, declarations)` blocks.
fn parse_snippet(css: &str) -> Vec<(String, Vec<(String, String)>)> {
    let mut blocks = Vec::new();
    let mut current: Option<(String, Vec<(String, String)>)> = None;
    for line in css.lines().map(str::trim) {
        if let Some(selector) = line.strip_suffix(" {") {
            current = Some((selector.to_string(), Vec::new()));
        } else if line == "}" {
            blocks.push(current.take().expect("closing brace without a block"));
        } else if let Some(decl) = line.strip_suffix(';') {
            let (property, value) = decl.split_once(": ").expect("property: value");
            current
                .as_mut()
                .expect("declaration outside a block")
                .1
                .push((property.to_string(), value.to_string()));
        }
    }
    assert!(current.is_none(), "unterminated block in snippet");
    blocks
}

fn block<'a>(blocks: &'a [(String, Vec<(String, String)>)], selector: &str) -> &'a [(String, String)] {
    blocks
        .iter()
        .find(|(s, _)| s == selector)
        .map(|(_, d)| d.as_slice())
        .unwrap_or(&[])
}

const CENTERING_PROPERTIES: [&str; 8] = [
    "display",
    "justify-content",
    "align-items",
    "place-items",
    "position",
    "top",
    "left",
    "transform",
];

fn assert_agrees(style: &StyleMap, declared: &[(String, String)], element: &str, method: CenteringMethod) {
    for (property, value) in declared {
        assert_eq!(
            style.get(property),
            Some(value.as_str()),
            "{method}: snippet sets {element} {property}: {value} but style does not"
        );
    }
    for property in CENTERING_PROPERTIES {
        let Some(value) = style.get(property) else { continue };
        // Every container is positioned; the snippet only shows it when the child depends on it.
        if element == ".parent" && property == "position" && method != CenteringMethod::Absolute {
            continue;
        }
        assert!(
            declared.iter().any(|(p, v)| p == property && v == value),
            "{method}: style sets {element} {property}: {value} but snippet does not show it"
        );
    }
}

#[test]
fn resolve_is_deterministic() {
    for method in CenteringMethod::ALL {
        for (content, parent) in [(50, 200), (100, 300), (250, 500), (137, 421)] {
            let params = PlaygroundParams::new(method, content, parent).unwrap();
            assert_eq!(resolve(&params), resolve(&params));
        }
    }
}

#[test]
fn snippet_matches_applied_style() {
    for method in CenteringMethod::ALL {
        let params = PlaygroundParams::new(method, 100, 300).unwrap();
        let out = resolve(&params);
        let blocks = parse_snippet(&out.snippet);
        assert!(out.snippet.starts_with(&format!("/* {} Centering Method */", method.as_str().to_uppercase())));
        assert_agrees(&out.container, block(&blocks, ".parent"), ".parent", method);
        assert_agrees(&out.content, block(&blocks, ".child"), ".child", method);
    }
}

#[test]
fn flexbox_centers_on_the_container() {
    let out = resolve(&PlaygroundParams::new(CenteringMethod::Flexbox, 100, 300).unwrap());
    assert_eq!(out.container.get("display"), Some("flex"));
    assert_eq!(out.container.get("justify-content"), Some("center"));
    assert_eq!(out.container.get("align-items"), Some("center"));
    assert!(!out.content.contains("position"));
}

#[test]
fn absolute_centers_on_the_content() {
    let out = resolve(&PlaygroundParams::new(CenteringMethod::Absolute, 100, 300).unwrap());
    assert_eq!(out.content.get("position"), Some("absolute"));
    assert_eq!(out.content.get("top"), Some("50%"));
    assert_eq!(out.content.get("left"), Some("50%"));
    assert_eq!(out.content.get("transform"), Some("translate(-50%, -50%)"));
    assert!(!out.container.contains("display"));
    assert_eq!(out.container.get("position"), Some("relative"));
}

#[test]
fn sizes_come_from_params_not_method() {
    for method in CenteringMethod::ALL {
        let out = resolve(&PlaygroundParams::new(method, 75, 420).unwrap());
        assert_eq!(out.container.get("width"), Some("420px"));
        assert_eq!(out.container.get("height"), Some("420px"));
        assert_eq!(out.container.get("border"), Some("2px solid #4a5568"));
        assert_eq!(out.content.get("width"), Some("75px"));
        assert_eq!(out.content.get("height"), Some("75px"));
        assert_eq!(out.content.get("background-color"), Some("#6366f1"));
    }
}
