//! Attribute syntax: `#[name]`, `#[name = "value"]` and `#[name(sub, sub)]`
//!
//! Lowering carries attributes around but never interprets them; what a
//! given attribute means is decided by whichever pass reads it.

use ks_span::FileSpan;
use std::cell::Cell;
use std::fmt;

/// Payload of a [`MetaItem`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetaItemData {
    /// Bare name: `#[test]`
    None,
    /// Name with a string value: `#[path = "foo.rs"]`
    String(String),
    /// Name with nested items: `#[derive(Clone, Debug)]`
    List(Vec<MetaItem>),
}

/// A single attribute node
///
/// The payload kind is fixed by the constructor. Cloning is deep: nested
/// lists are copied and the copy shares nothing with the original.
#[derive(Debug, Clone)]
pub struct MetaItem {
    name: String,
    data: MetaItemData,
    used: Cell<bool>,
}

impl MetaItem {
    /// `name`
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_data(name, MetaItemData::None)
    }

    /// `name = "value"`
    pub fn with_string(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::with_data(name, MetaItemData::String(value.into()))
    }

    /// `name(items...)`
    pub fn with_list(name: impl Into<String>, items: Vec<MetaItem>) -> Self {
        Self::with_data(name, MetaItemData::List(items))
    }

    fn with_data(name: impl Into<String>, data: MetaItemData) -> Self {
        Self {
            name: name.into(),
            data,
            used: Cell::new(false),
        }
    }

    /// Attribute name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attribute payload
    pub fn data(&self) -> &MetaItemData {
        &self.data
    }

    /// True for a bare `#[name]`
    pub fn has_noarg(&self) -> bool {
        matches!(self.data, MetaItemData::None)
    }

    /// String value, if this is `name = "value"`
    pub fn string(&self) -> Option<&str> {
        match &self.data {
            MetaItemData::String(value) => Some(value),
            _ => None,
        }
    }

    /// Nested items, if this is `name(...)`
    pub fn items(&self) -> Option<&[MetaItem]> {
        match &self.data {
            MetaItemData::List(items) => Some(items),
            _ => None,
        }
    }

    /// Mutable access to nested items; the payload stays a list
    pub fn items_mut(&mut self) -> Option<&mut Vec<MetaItem>> {
        match &mut self.data {
            MetaItemData::List(items) => Some(items),
            _ => None,
        }
    }

    /// Record that some pass consumed this attribute
    pub fn mark_used(&self) {
        self.used.set(true);
    }

    /// Whether [`MetaItem::mark_used`] has been called
    pub fn is_used(&self) -> bool {
        self.used.get()
    }
}

// Equality is over the written form only; the used marker is bookkeeping.
impl PartialEq for MetaItem {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.data == other.data
    }
}

impl Eq for MetaItem {}

impl fmt::Display for MetaItem {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.name)?;
        match &self.data {
            MetaItemData::None => Ok(()),
            MetaItemData::String(value) => write!(formatter, "=\"{value}\""),
            MetaItemData::List(items) => {
                formatter.write_str("(")?;
                write_comma_separated(formatter, items)?;
                formatter.write_str(")")
            }
        }
    }
}

/// The attributes attached to one syntax node, in source order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetaItems {
    /// Span covering all the attributes
    pub span: FileSpan,
    /// Attributes in source order
    pub items: Vec<MetaItem>,
}

impl MetaItems {
    /// Create an attribute list
    pub fn new(span: FileSpan, items: Vec<MetaItem>) -> Self {
        Self { span, items }
    }

    /// Append an attribute, keeping source order
    pub fn push(&mut self, item: MetaItem) {
        self.items.push(item);
    }

    /// First attribute called `name`
    pub fn get(&self, name: &str) -> Option<&MetaItem> {
        self.items.iter().find(|item| item.name == name)
    }

    /// First attribute called `name`, mutably
    pub fn get_mut(&mut self, name: &str) -> Option<&mut MetaItem> {
        self.items.iter_mut().find(|item| item.name == name)
    }

    /// Whether any attribute is called `name`
    pub fn has(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Whether the list has no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Items in source order
    pub fn iter(&self) -> std::slice::Iter<'_, MetaItem> {
        self.items.iter()
    }
}

impl fmt::Display for MetaItems {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("[")?;
        write_comma_separated(formatter, &self.items)?;
        formatter.write_str("]")
    }
}

fn write_comma_separated(formatter: &mut fmt::Formatter<'_>, items: &[MetaItem]) -> fmt::Result {
    for (index, item) in items.iter().enumerate() {
        if index > 0 {
            formatter.write_str(", ")?;
        }
        write!(formatter, "{item}")?;
    }
    Ok(())
}
