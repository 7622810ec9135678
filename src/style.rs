//! Style resolution for the centering playground.
//!
//! A [`PlaygroundParams`] (method plus two box sizes) resolves to a
//! [`StyleDescriptor`]: the inline styles for the parent container and the
//! centered child, and the CSS snippet shown under the preview. Both the
//! styles and the snippet are built from the same [`CenteringRules`] table,
//! so the displayed code always matches what is applied.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::{CenteringError, Result};

/// Slider range for the centered box, in pixels.
pub const CONTENT_SIZE_RANGE: RangeInclusive<u32> = 50..=250;
/// Slider range for the parent container, in pixels.
pub const PARENT_SIZE_RANGE: RangeInclusive<u32> = 200..=500;

const CONTAINER_BORDER: &str = "2px solid #4a5568";
const CONTENT_BACKGROUND: &str = "#6366f1";
const CONTENT_COLOR: &str = "white";

/// One of the three supported ways to center a div.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CenteringMethod {
    #[default]
    Flexbox,
    Grid,
    Absolute,
}

impl CenteringMethod {
    pub const ALL: [CenteringMethod; 3] = [Self::Flexbox, Self::Grid, Self::Absolute];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Flexbox => "flexbox",
            Self::Grid => "grid",
            Self::Absolute => "absolute",
        }
    }

    /// Human-readable name used in the method picker.
    pub fn label(self) -> &'static str {
        match self {
            Self::Flexbox => "Flexbox",
            Self::Grid => "CSS Grid",
            Self::Absolute => "Absolute Positioning",
        }
    }

    /// The declarations that do the centering, split by element.
    pub fn rules(self) -> CenteringRules {
        match self {
            Self::Flexbox => CenteringRules {
                parent: &[
                    ("display", "flex"),
                    ("justify-content", "center"),
                    ("align-items", "center"),
                ],
                child: &[],
            },
            Self::Grid => CenteringRules {
                parent: &[("display", "grid"), ("place-items", "center")],
                child: &[],
            },
            Self::Absolute => CenteringRules {
                parent: &[("position", "relative")],
                child: &[
                    ("position", "absolute"),
                    ("top", "50%"),
                    ("left", "50%"),
                    ("transform", "translate(-50%, -50%)"),
                ],
            },
        }
    }
}

impl fmt::Display for CenteringMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CenteringMethod {
    type Err = CenteringError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CenteringError::UnknownMethod(s.to_string()))
    }
}

/// Centering declarations for the `.parent` and `.child` rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CenteringRules {
    pub parent: &'static [(&'static str, &'static str)],
    pub child: &'static [(&'static str, &'static str)],
}

/// User-controlled playground inputs. Sizes are always inside their ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlaygroundParams {
    method: CenteringMethod,
    content_size: u32,
    parent_size: u32,
}

impl Default for PlaygroundParams {
    fn default() -> Self {
        Self {
            method: CenteringMethod::Flexbox,
            content_size: 100,
            parent_size: 300,
        }
    }
}

impl PlaygroundParams {
    /// Checked constructor; rejects sizes outside the slider ranges.
    pub fn new(method: CenteringMethod, content_size: u32, parent_size: u32) -> Result<Self> {
        let mut params = Self { method, ..Self::default() };
        params.set_content_size(content_size)?;
        params.set_parent_size(parent_size)?;
        Ok(params)
    }

    /// Builds params the way a range slider would, pinning sizes to the nearest bound.
    pub fn clamped(method: CenteringMethod, content_size: u32, parent_size: u32) -> Self {
        Self {
            method,
            content_size: clamp_to(content_size, &CONTENT_SIZE_RANGE),
            parent_size: clamp_to(parent_size, &PARENT_SIZE_RANGE),
        }
    }

    pub fn method(&self) -> CenteringMethod {
        self.method
    }

    pub fn content_size(&self) -> u32 {
        self.content_size
    }

    pub fn parent_size(&self) -> u32 {
        self.parent_size
    }

    pub fn set_method(&mut self, method: CenteringMethod) {
        self.method = method;
    }

    pub fn set_content_size(&mut self, size: u32) -> Result<()> {
        if !CONTENT_SIZE_RANGE.contains(&size) {
            return Err(CenteringError::out_of_range("content size", size, CONTENT_SIZE_RANGE));
        }
        self.content_size = size;
        Ok(())
    }

    pub fn set_parent_size(&mut self, size: u32) -> Result<()> {
        if !PARENT_SIZE_RANGE.contains(&size) {
            return Err(CenteringError::out_of_range("parent size", size, PARENT_SIZE_RANGE));
        }
        self.parent_size = size;
        Ok(())
    }
}

fn clamp_to(value: u32, range: &RangeInclusive<u32>) -> u32 {
    value.clamp(*range.start(), *range.end())
}

/// Ordered CSS property map. Re-setting a property replaces it in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleMap {
    entries: Vec<(String, String)>,
}

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, property: &str, value: impl Into<String>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(p, _)| p == property) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((property.to_string(), value)),
        }
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, property: &str) -> bool {
        self.get(property).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(p, v)| (p.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render as the body of an HTML `style` attribute.
    pub fn to_inline(&self) -> String {
        self.iter()
            .map(|(p, v)| format!("{p}: {v};"))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn apply(&mut self, declarations: &[(&str, &str)]) {
        for (property, value) in declarations {
            self.set(property, *value);
        }
    }
}

impl Serialize for StyleMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (property, value) in &self.entries {
            map.serialize_entry(property, value)?;
        }
        map.end()
    }
}

/// Resolved playground output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyleDescriptor {
    pub container: StyleMap,
    pub content: StyleMap,
    pub snippet: String,
}

/// Resolve playground parameters into concrete styles and their CSS snippet.
pub fn resolve(params: &PlaygroundParams) -> StyleDescriptor {
    let rules = params.method.rules();
    let parent = format!("{}px", params.parent_size);
    let child = format!("{}px", params.content_size);

    let mut container = StyleMap::new();
    container.set("width", parent.as_str());
    container.set("height", parent);
    container.set("border", CONTAINER_BORDER);
    container.set("position", "relative");
    container.apply(rules.parent);

    let mut content = StyleMap::new();
    content.set("width", child.as_str());
    content.set("height", child.as_str());
    content.set("background-color", CONTENT_BACKGROUND);
    content.set("color", CONTENT_COLOR);
    content.set("text-align", "center");
    content.set("line-height", child);
    content.apply(rules.child);

    log::debug!(
        "resolved {} ({}px in {}px)",
        params.method,
        params.content_size,
        params.parent_size
    );

    StyleDescriptor {
        container,
        content,
        snippet: render_snippet(params.method, &rules),
    }
}

/// CSS source for a method's centering rules.
pub fn render_snippet(method: CenteringMethod, rules: &CenteringRules) -> String {
    let mut css = format!("/* {} Centering Method */\n", method.as_str().to_uppercase());
    push_rule(&mut css, ".parent", rules.parent);
    if !rules.child.is_empty() {
        css.push('\n');
        push_rule(&mut css, ".child", rules.child);
    }
    css
}

fn push_rule(css: &mut String, selector: &str, declarations: &[(&str, &str)]) {
    css.push_str(selector);
    css.push_str(" {\n");
    for (property, value) in declarations {
        css.push_str(&format!("  {property}: {value};\n"));
    }
    css.push_str("}\n");
}
