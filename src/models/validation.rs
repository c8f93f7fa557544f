use std::fmt;

/// A single field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldIssue {
    Required {
        path: &'static str,
    },
    NotAllowed {
        path: &'static str,
        value: String,
        allowed: &'static [&'static str],
    },
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldIssue::Required { path } => write!(f, "{path}: Path `{path}` is required."),
            FieldIssue::NotAllowed {
                path,
                value,
                allowed,
            } => write!(
                f,
                "{path}: `{value}` is not a valid enum value for path `{path}` (expected one of: {}).",
                allowed.join(", ")
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} validation failed: {}", join_issues(.issues))]
pub struct ValidationError {
    pub entity: &'static str,
    pub issues: Vec<FieldIssue>,
}

impl ValidationError {
    pub fn paths(&self) -> Vec<&'static str> {
        self.issues
            .iter()
            .map(|issue| match issue {
                FieldIssue::Required { path } | FieldIssue::NotAllowed { path, .. } => *path,
            })
            .collect()
    }
}

fn join_issues(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
