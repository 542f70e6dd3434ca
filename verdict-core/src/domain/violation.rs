// verdict-core/src/domain/violation.rs

use serde::{Deserialize, Serialize};
use std::fmt;

use super::constraint::{ConstraintDescriptor, ConstraintKind};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
    Index(usize),
    Field(String),
}

/// Location of the offending value inside the validated object.
/// Empty for object-level constraints.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldPath(Vec<PathSegment>);

impl FieldPath {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn field(mut self, name: impl Into<String>) -> Self {
        self.0.push(PathSegment::Field(name.into()));
        self
    }

    pub fn index(mut self, index: usize) -> Self {
        self.0.push(PathSegment::Index(index));
        self
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Last named segment, handy for handlers matching on a field name.
    pub fn leaf(&self) -> Option<&str> {
        self.0.iter().rev().find_map(|s| match s {
            PathSegment::Field(name) => Some(name.as_str()),
            PathSegment::Index(_) => None,
        })
    }
}

impl From<&str> for FieldPath {
    /// Parses the dotted form produced by `Display` (`items[2].name`).
    fn from(path: &str) -> Self {
        let mut out = FieldPath::root();
        for part in path.split('.').filter(|p| !p.is_empty()) {
            let mut pieces = part.split('[');
            if let Some(name) = pieces.next().filter(|n| !n.is_empty()) {
                out = out.field(name);
            }
            for idx in pieces {
                match idx.trim_end_matches(']').parse::<usize>() {
                    Ok(i) => out = out.index(i),
                    Err(_) => out = out.field(idx.trim_end_matches(']')),
                }
            }
        }
        out
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.0.iter().enumerate() {
            match segment {
                PathSegment::Field(name) if i == 0 => write!(f, "{}", name)?,
                PathSegment::Field(name) => write!(f, ".{}", name)?,
                PathSegment::Index(idx) => write!(f, "[{}]", idx)?,
            }
        }
        Ok(())
    }
}

/// One failed constraint instance, as reported by the validation engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    pub field_path: FieldPath,
    pub message: String,
    pub constraint: ConstraintDescriptor,
}

impl Violation {
    pub fn new(
        field_path: impl Into<FieldPath>,
        message: impl Into<String>,
        constraint: ConstraintDescriptor,
    ) -> Self {
        Self {
            field_path: field_path.into(),
            message: message.into(),
            constraint,
        }
    }

    pub fn kind(&self) -> &ConstraintKind {
        &self.constraint.kind
    }
}

/// How the router picks the one violation it reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionPolicy {
    /// Whatever the engine yields first. Engines backed by hash maps give no
    /// ordering, so this is not deterministic across runs.
    #[default]
    FirstEncountered,
    /// Smallest field path, then constraint kind, then message.
    FieldPathOrder,
}

impl SelectionPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstEncountered => "first_encountered",
            Self::FieldPathOrder => "field_path_order",
        }
    }
}

impl fmt::Display for SelectionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SelectionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "first_encountered" => Ok(Self::FirstEncountered),
            "field_path_order" => Ok(Self::FieldPathOrder),
            _ => Err(format!("Unknown selection policy: {}", s)),
        }
    }
}

/// Output of one engine run. The order of the contained violations is the
/// engine's and carries no meaning.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViolationSet {
    violations: Vec<Violation>,
}

impl ViolationSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Violation> {
        self.violations.iter()
    }

    pub fn select(&self, policy: SelectionPolicy) -> Option<&Violation> {
        match policy {
            SelectionPolicy::FirstEncountered => self.violations.first(),
            SelectionPolicy::FieldPathOrder => self.violations.iter().min_by(|a, b| {
                a.field_path
                    .cmp(&b.field_path)
                    .then_with(|| a.constraint.kind.cmp(&b.constraint.kind))
                    .then_with(|| a.message.cmp(&b.message))
            }),
        }
    }
}

impl FromIterator<Violation> for ViolationSet {
    fn from_iter<I: IntoIterator<Item = Violation>>(iter: I) -> Self {
        Self {
            violations: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ViolationSet {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.into_iter()
    }
}

impl<'a> IntoIterator for &'a ViolationSet {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.iter()
    }
}
