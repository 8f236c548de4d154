//! Resource schema descriptor for the agent queue resource.
//!
//! The orchestrating host owns diffing, planning, and state persistence.
//! This module describes the configuration surface it manages: the field
//! names, their types, and the flags that drive plan behavior.

/// Configuration field holding the backing agent pool identifier.
pub const AGENT_POOL_ID: &str = "agent_pool_id";

/// Configuration field holding the project identifier.
pub const PROJECT_ID: &str = "project_id";

/// Value type of a configuration field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Integer,
    String,
}

/// Description of a single configuration field.
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub kind: ValueKind,
    /// The field must be set in configuration.
    pub required: bool,
    /// A change to this field cannot be applied in place and forces
    /// destroy-then-recreate of the whole resource.
    pub force_new: bool,
    /// The value must be non-empty after trimming.
    pub non_empty: bool,
    /// Letter-case differences between prior state and configuration are
    /// not drift; compare with [`suppress_case_difference`].
    pub case_insensitive: bool,
}

/// Schema of a managed resource.
#[derive(Debug, Clone)]
pub struct ResourceSchema {
    pub resource: &'static str,
    pub fields: &'static [FieldDescriptor],
}

impl ResourceSchema {
    /// Look up a field descriptor by name.
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|field| field.name == name)
    }
}

const AGENT_QUEUE_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor {
        name: AGENT_POOL_ID,
        kind: ValueKind::Integer,
        required: true,
        force_new: true,
        non_empty: false,
        case_insensitive: false,
    },
    FieldDescriptor {
        name: PROJECT_ID,
        kind: ValueKind::String,
        required: true,
        force_new: true,
        non_empty: true,
        case_insensitive: true,
    },
];

/// Schema for the agent queue resource.
///
/// There is no update API for agent queues, so every field forces a new
/// resource.
pub fn agent_queue_schema() -> ResourceSchema {
    ResourceSchema {
        resource: "agent_queue",
        fields: AGENT_QUEUE_FIELDS,
    }
}

/// Diff suppression for case-insensitive fields.
///
/// Project identifiers compare equal regardless of letter case, so a
/// recased value in configuration must not be reported as drift.
pub fn suppress_case_difference(old: &str, new: &str) -> bool {
    old.to_lowercase() == new.to_lowercase()
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
