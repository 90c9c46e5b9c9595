//! Inline style declarations passed through to rendered elements.
//!
//! # Design
//! - Keep declarations in insertion order so rendered markup is stable.
//! - Normalize property names once, on insert, to their CSS (kebab-case) form.
//! - Numbers follow the browser convention: `px` unless the property is unitless.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Properties whose numeric values are emitted without a unit.
const UNITLESS_PROPERTIES: &[&str] = &[
    "animation-iteration-count",
    "aspect-ratio",
    "border-image-outset",
    "border-image-slice",
    "border-image-width",
    "box-flex",
    "box-flex-group",
    "box-ordinal-group",
    "column-count",
    "columns",
    "fill-opacity",
    "flex",
    "flex-grow",
    "flex-negative",
    "flex-order",
    "flex-positive",
    "flex-shrink",
    "flood-opacity",
    "font-weight",
    "grid-area",
    "grid-column",
    "grid-column-end",
    "grid-column-span",
    "grid-column-start",
    "grid-row",
    "grid-row-end",
    "grid-row-span",
    "grid-row-start",
    "line-clamp",
    "line-height",
    "opacity",
    "order",
    "orphans",
    "scale",
    "stop-opacity",
    "stroke-dasharray",
    "stroke-dashoffset",
    "stroke-miterlimit",
    "stroke-opacity",
    "stroke-width",
    "tab-size",
    "widows",
    "z-index",
    "zoom",
];

const VENDOR_PREFIXES: &[&str] = &["-webkit-", "-moz-", "-ms-", "-o-"];

/// Errors raised while parsing CSS declaration text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StyleError {
    /// A declaration had no `:` separating name and value.
    #[error("style declaration `{0}` is missing a `:`")]
    MissingColon(String),
    /// A declaration had an empty property name.
    #[error("style declaration `{0}` has an empty property name")]
    EmptyProperty(String),
}

/// A single style value, either raw CSS text or a number.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    /// Numeric value; unit handling depends on the property.
    Number(f64),
    /// CSS text emitted verbatim.
    Text(String),
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for StyleValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Ordered set of inline style declarations.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InlineStyle {
    declarations: Vec<(String, StyleValue)>,
}

impl InlineStyle {
    /// Creates an empty style.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            declarations: Vec::new(),
        }
    }

    /// Builder-style [`InlineStyle::insert`].
    #[must_use]
    pub fn with(mut self, property: &str, value: impl Into<StyleValue>) -> Self {
        self.insert(property, value);
        self
    }

    /// Sets a property, replacing an existing value in place.
    pub fn insert(&mut self, property: &str, value: impl Into<StyleValue>) {
        self.set(css_property_name(property), value.into());
    }

    fn set(&mut self, name: String, value: StyleValue) {
        if let Some(slot) = self.declarations.iter_mut().find(|(key, _)| *key == name) {
            slot.1 = value;
        } else {
            self.declarations.push((name, value));
        }
    }

    /// Looks up a property by either its camelCase or CSS name.
    #[must_use]
    pub fn get(&self, property: &str) -> Option<&StyleValue> {
        let name = css_property_name(property);
        self.declarations
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value)
    }

    /// Whether no declarations are set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Number of declarations.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.declarations.len()
    }

    /// Iterates declarations as `(css-name, value)` in insertion order.
    pub fn declarations(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.declarations
            .iter()
            .map(|(key, value)| (key.as_str(), value))
    }

    /// Renders the declarations as an inline `style` attribute value.
    #[must_use]
    pub fn to_css(&self) -> String {
        self.declarations
            .iter()
            .map(|(name, value)| format!("{name}:{}", css_value(name, value)))
            .collect::<Vec<_>>()
            .join(";")
    }

    /// Parses CSS declaration text such as `opacity: 0.5; color: red`.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError`] when a declaration lacks a `:` or a property name.
    pub fn parse(text: &str) -> Result<Self, StyleError> {
        let mut style = Self::new();
        for declaration in split_declarations(text).into_iter().map(str::trim) {
            if declaration.is_empty() {
                continue;
            }
            let Some((name, value)) = declaration.split_once(':') else {
                return Err(StyleError::MissingColon(declaration.to_string()));
            };
            let name = name.trim();
            if name.is_empty() {
                return Err(StyleError::EmptyProperty(declaration.to_string()));
            }
            // CSS text names are case-insensitive; only custom properties keep their case.
            let name = if name.starts_with("--") {
                name.to_string()
            } else {
                name.to_ascii_lowercase()
            };
            style.set(name, StyleValue::from(value.trim()));
        }
        Ok(style)
    }
}

impl<K: AsRef<str>, V: Into<StyleValue>> FromIterator<(K, V)> for InlineStyle {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut style = Self::new();
        for (property, value) in iter {
            style.insert(property.as_ref(), value);
        }
        style
    }
}

impl fmt::Display for InlineStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

impl Serialize for InlineStyle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.declarations.len()))?;
        for (name, value) in &self.declarations {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

struct StyleVisitor;

impl<'de> Visitor<'de> for StyleVisitor {
    type Value = InlineStyle;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of style properties to strings or numbers")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut style = InlineStyle::new();
        while let Some((name, value)) = access.next_entry::<String, StyleValue>()? {
            style.insert(&name, value);
        }
        Ok(style)
    }
}

impl<'de> Deserialize<'de> for InlineStyle {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(StyleVisitor)
    }
}

/// Splits declaration text on `;` outside quoted strings and parentheses.
fn split_declarations(text: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut quote: Option<char> = None;
    let mut depth = 0_usize;
    let mut escaped = false;
    let mut start = 0;
    for (index, ch) in text.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match (quote, ch) {
            (_, '\\') => escaped = true,
            (Some(open), _) if ch == open => quote = None,
            (None, '"' | '\'') => quote = Some(ch),
            (None, '(') => depth += 1,
            (None, ')') => depth = depth.saturating_sub(1),
            (None, ';') if depth == 0 => {
                parts.push(&text[start..index]);
                start = index + 1;
            }
            _ => {}
        }
    }
    parts.push(&text[start..]);
    parts
}

/// Converts a camelCase property name to its CSS form; CSS names pass through.
fn css_property_name(property: &str) -> String {
    if property.starts_with("--") || property.contains('-') {
        return property.to_string();
    }
    let mut name = String::with_capacity(property.len() + 4);
    if property
        .strip_prefix("ms")
        .is_some_and(|rest| rest.starts_with(char::is_uppercase))
    {
        name.push('-');
    }
    for ch in property.chars() {
        if ch.is_ascii_uppercase() {
            name.push('-');
            name.push(ch.to_ascii_lowercase());
        } else {
            name.push(ch);
        }
    }
    name
}

fn is_unitless(name: &str) -> bool {
    let bare = VENDOR_PREFIXES
        .iter()
        .find_map(|prefix| name.strip_prefix(prefix))
        .unwrap_or(name);
    UNITLESS_PROPERTIES.contains(&bare)
}

fn css_value(name: &str, value: &StyleValue) -> String {
    match value {
        StyleValue::Text(text) => text.clone(),
        StyleValue::Number(number) => {
            if name.starts_with("--") || number.abs() < f64::EPSILON || is_unitless(name) {
                number.to_string()
            } else {
                format!("{number}px")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camel_case_names_render_as_css() {
        assert_eq!(css_property_name("fontSize"), "font-size");
        assert_eq!(css_property_name("WebkitTransform"), "-webkit-transform");
        assert_eq!(css_property_name("msTransition"), "-ms-transition");
        assert_eq!(css_property_name("--icon-size"), "--icon-size");
        assert_eq!(css_property_name("margin-top"), "margin-top");
        assert_eq!(css_property_name("color"), "color");
    }

    #[test]
    fn numbers_get_px_unless_unitless() {
        let style = InlineStyle::new()
            .with("opacity", 0.5)
            .with("width", 16)
            .with("margin", 0)
            .with("zIndex", 3)
            .with("WebkitFlexGrow", 1)
            .with("--gap", 4);
        assert_eq!(
            style.to_css(),
            "opacity:0.5;width:16px;margin:0;z-index:3;-webkit-flex-grow:1;--gap:4"
        );
    }

    #[test]
    fn insert_replaces_in_place() {
        let mut style = InlineStyle::new().with("color", "red").with("opacity", 1);
        style.insert("color", "blue");
        assert_eq!(style.len(), 2);
        assert_eq!(style.to_css(), "color:blue;opacity:1");
        let names: Vec<_> = style.declarations().map(|(name, _)| name).collect();
        assert_eq!(names, ["color", "opacity"]);
        assert_eq!(style.get("color"), Some(&StyleValue::from("blue")));
    }

    #[test]
    fn get_accepts_either_spelling() {
        let style = InlineStyle::new().with("font-size", "12px");
        assert_eq!(style.get("fontSize"), Some(&StyleValue::from("12px")));
        assert!(style.get("fontWeight").is_none());
    }

    #[test]
    fn parse_keeps_values_verbatim() -> Result<(), StyleError> {
        let style = InlineStyle::parse(" opacity: 0.5; color:red ;; ")?;
        assert_eq!(style.len(), 2);
        assert_eq!(style.get("opacity"), Some(&StyleValue::from("0.5")));
        assert_eq!(style.to_css(), "opacity:0.5;color:red");
        assert!(InlineStyle::parse("")?.is_empty());
        Ok(())
    }

    #[test]
    fn parse_keeps_semicolons_inside_urls_and_strings() -> Result<(), StyleError> {
        let style = InlineStyle::parse(
            r#"background: url("data:image/png;base64,AAAA"); content: 'a;b'; mask: url(a;b)"#,
        )?;
        assert_eq!(style.len(), 3);
        assert_eq!(
            style.get("background"),
            Some(&StyleValue::from(r#"url("data:image/png;base64,AAAA")"#))
        );
        assert_eq!(style.get("content"), Some(&StyleValue::from("'a;b'")));
        assert_eq!(style.get("mask"), Some(&StyleValue::from("url(a;b)")));
        Ok(())
    }

    #[test]
    fn parse_lowercases_property_names() -> Result<(), StyleError> {
        let style = InlineStyle::parse("Color: red; WIDTH: 1px; --Icon-Gap: 2px")?;
        assert_eq!(style.to_css(), "color:red;width:1px;--Icon-Gap:2px");
        Ok(())
    }

    #[test]
    fn parse_rejects_malformed_declarations() {
        assert_eq!(
            InlineStyle::parse("color red"),
            Err(StyleError::MissingColon("color red".to_string()))
        );
        assert_eq!(
            InlineStyle::parse("opacity: 1; : red"),
            Err(StyleError::EmptyProperty(": red".to_string()))
        );
    }

    #[test]
    fn json_objects_keep_key_order() -> Result<(), serde_json::Error> {
        let style: InlineStyle =
            serde_json::from_str(r#"{"opacity": 0.5, "color": "red", "marginLeft": 4}"#)?;
        assert_eq!(style.to_css(), "opacity:0.5;color:red;margin-left:4px");
        let encoded = serde_json::to_string(&style)?;
        assert_eq!(encoded, r#"{"opacity":0.5,"color":"red","margin-left":4.0}"#);
        Ok(())
    }
}
