// verdict-core/src/domain/constraint.rs

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

/// Identity of a rule type ("not_blank", "range", "non_negative_age"...).
///
/// Kinds are usually declared as constants next to the type they constrain:
///
/// ```
/// use verdict_core::domain::ConstraintKind;
///
/// pub const NON_NEGATIVE_AGE: ConstraintKind = ConstraintKind::new("non_negative_age");
/// assert_eq!(NON_NEGATIVE_AGE.as_str(), "non_negative_age");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConstraintKind(Cow<'static, str>);

impl ConstraintKind {
    pub const fn new(id: &'static str) -> Self {
        Self(Cow::Borrowed(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for ConstraintKind {
    fn from(id: &'static str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ConstraintKind {
    fn from(id: String) -> Self {
        Self(Cow::Owned(id))
    }
}

impl fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The violated constraint instance: its kind plus the parameters it was
/// declared with (`min`, `max`, `pattern`...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstraintDescriptor {
    pub kind: ConstraintKind,
    #[serde(default)]
    pub params: BTreeMap<String, serde_json::Value>,
}

impl ConstraintDescriptor {
    pub fn new(kind: impl Into<ConstraintKind>) -> Self {
        Self {
            kind: kind.into(),
            params: BTreeMap::new(),
        }
    }

    pub fn with_param(mut self, name: impl Into<String>, value: serde_json::Value) -> Self {
        self.params.insert(name.into(), value);
        self
    }

    pub fn param(&self, name: &str) -> Option<&serde_json::Value> {
        self.params.get(name)
    }
}

/// Opaque tag selecting which subset of constraints applies to a call.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Group(String);

impl Group {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
