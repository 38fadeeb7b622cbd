//! XML attribute serialization.
//!
//! Attribute names are always known at compile time, so only values go through
//! validation and escaping.

use std::borrow::Cow;

use crate::error::GmlError;

/// Value of a single XML attribute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AttrValue<'a> {
    /// Text value. Escaped on output; empty text is treated as absent.
    Text(&'a str),
    /// Numeric value. Must be finite.
    Number(f64),
    /// Integer value, written exactly.
    Integer(i128),
}

impl<'a> From<&'a str> for AttrValue<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for AttrValue<'_> {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<u32> for AttrValue<'_> {
    fn from(value: u32) -> Self {
        Self::Integer(i128::from(value))
    }
}

impl From<u64> for AttrValue<'_> {
    fn from(value: u64) -> Self {
        Self::Integer(i128::from(value))
    }
}

impl From<i64> for AttrValue<'_> {
    fn from(value: i64) -> Self {
        Self::Integer(i128::from(value))
    }
}

/// Replaces `"`, `'`, `&`, `<` and `>` with the corresponding XML entities.
///
/// Every character is replaced at most once, so the result of a single pass never contains any
/// of these characters in raw form. Returns the input unchanged if there is nothing to escape.
pub fn escape_attr_value(value: &str) -> Cow<'_, str> {
    if !value.contains(['"', '\'', '&', '<', '>']) {
        return Cow::Borrowed(value);
    }

    let mut escaped = String::with_capacity(value.len() + 16);
    for ch in value.chars() {
        match ch {
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }

    Cow::Owned(escaped)
}

/// Renders the given attributes as ` name="value"` pairs, in the given order.
///
/// Absent values and empty strings are skipped. Non-finite numbers fail with
/// [`GmlError::InvalidAttributeValue`].
pub fn attrs(attrs: &[(&str, Option<AttrValue<'_>>)]) -> Result<String, GmlError> {
    let mut out = String::new();
    write_attrs(&mut out, attrs)?;
    Ok(out)
}

pub(crate) fn write_attrs(
    out: &mut String,
    attrs: &[(&str, Option<AttrValue<'_>>)],
) -> Result<(), GmlError> {
    for (name, value) in attrs {
        match value {
            None | Some(AttrValue::Text("")) => {}
            Some(AttrValue::Number(n)) if !n.is_finite() => {
                return Err(GmlError::invalid_attr(name, n));
            }
            Some(AttrValue::Number(n)) => push_attr(out, name, &n.to_string()),
            Some(AttrValue::Integer(n)) => push_attr(out, name, &n.to_string()),
            Some(AttrValue::Text(text)) => push_attr(out, name, &escape_attr_value(text)),
        }
    }

    Ok(())
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(value);
    out.push('"');
}
