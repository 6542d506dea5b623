//! Navigation tuning properties and their fixed schema
//!
//! Godot stores agent and region tuning values as named scalar or boolean
//! fields alongside the mesh data. The OBJ interchange format cannot carry
//! them, so they travel as a side-channel [`PropertySet`] harvested from a
//! donor resource when converting back.

use std::fmt;

use crate::types::format_scalar;

/// The value kind a property key accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
    /// A floating-point scalar
    Float,
    /// A boolean flag
    Bool,
}

impl PropertyKind {
    /// Looks up the kind of a catalog key, or `None` for unknown keys
    pub fn of(key: &str) -> Option<Self> {
        CATALOG
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, kind)| *kind)
    }
}

/// A property value: either a scalar or a flag, matching its catalog kind
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PropertyValue {
    /// A floating-point scalar value
    Float(f32),
    /// A boolean flag value
    Bool(bool),
}

impl PropertyValue {
    /// The kind of this value
    pub fn kind(&self) -> PropertyKind {
        match self {
            Self::Float(_) => PropertyKind::Float,
            Self::Bool(_) => PropertyKind::Bool,
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Float(value) => write!(f, "{}", format_scalar(*value)),
            Self::Bool(value) => write!(f, "{}", if *value { "true" } else { "false" }),
        }
    }
}

/// The fixed schema of recognized property keys and their kinds
///
/// Both the resource parser (which patterns to search for, how to coerce
/// each match) and the resource writer (how to format each value) consult
/// this table. Keys not listed here are ignored on input.
pub const CATALOG: &[(&str, PropertyKind)] = &[
    ("agent_height", PropertyKind::Float),
    ("agent_radius", PropertyKind::Float),
    ("agent_max_climb", PropertyKind::Float),
    ("agent_max_slope", PropertyKind::Float),
    ("region_min_size", PropertyKind::Float),
    ("region_merge_size", PropertyKind::Float),
    ("edge_max_length", PropertyKind::Float),
    ("edge_max_error", PropertyKind::Float),
    ("vertices_per_polygon", PropertyKind::Float),
    ("detail_sample_distance", PropertyKind::Float),
    ("detail_sample_max_error", PropertyKind::Float),
    ("filter_low_hanging_obstacles", PropertyKind::Bool),
    ("filter_ledge_spans", PropertyKind::Bool),
    ("filter_walkable_low_height_spans", PropertyKind::Bool),
];

/// The default property block written when no property set is supplied
///
/// Only used for a fully absent or empty set; a partially populated set is
/// written as-is without filling gaps.
pub const DEFAULT_PROPERTIES: [(&str, PropertyValue); 6] = [
    ("agent_height", PropertyValue::Float(0.5)),
    ("vertices_per_polygon", PropertyValue::Float(3.0)),
    ("detail_sample_distance", PropertyValue::Float(1.0)),
    ("filter_low_hanging_obstacles", PropertyValue::Bool(true)),
    ("filter_ledge_spans", PropertyValue::Bool(true)),
    ("filter_walkable_low_height_spans", PropertyValue::Bool(true)),
];

/// An insertion-ordered set of tuning properties
///
/// Membership is optional per key; absence means "not specified", never a
/// default. Iteration order is insertion order, which the resource writer
/// preserves on output.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertySet {
    entries: Vec<(&'static str, PropertyValue)>,
}

impl PropertySet {
    /// Creates an empty property set
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a property, replacing any earlier value for the same key
    ///
    /// Returns `false` (and inserts nothing) if the key is not in the
    /// catalog or the value kind does not match the schema.
    pub fn insert(&mut self, key: &str, value: PropertyValue) -> bool {
        let Some((name, kind)) = CATALOG.iter().find(|(name, _)| *name == key) else {
            return false;
        };
        if value.kind() != *kind {
            return false;
        }
        match self.entries.iter_mut().find(|(k, _)| k == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
        true
    }

    /// Looks up a property value by key
    pub fn get(&self, key: &str) -> Option<PropertyValue> {
        self.entries
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, value)| *value)
    }

    /// Number of properties present
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no properties are present
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(key, value)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, PropertyValue)> + '_ {
        self.entries.iter().map(|(key, value)| (*key, *value))
    }
}
