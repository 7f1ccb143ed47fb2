//! Field paths locating a violation inside a template.

use std::fmt;

/// Dotted path with indexed segments, e.g. `components[2].buttons[0].text`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FieldPath(String);

impl FieldPath {
    /// Returns the empty path, denoting the template itself.
    #[must_use]
    pub const fn root() -> Self {
        Self(String::new())
    }

    /// Appends a named field.
    #[must_use]
    pub fn field(&self, name: &str) -> Self {
        if self.0.is_empty() {
            Self(name.to_owned())
        } else {
            Self(format!("{}.{name}", self.0))
        }
    }

    /// Appends a named list element.
    #[must_use]
    pub fn item(&self, name: &str, index: usize) -> Self {
        let mut path = self.field(name);
        path.0.push_str(&format!("[{index}]"));
        path
    }

    /// Returns the path as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&FieldPath> for String {
    fn from(path: &FieldPath) -> Self {
        path.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn nested_paths_render_with_dots_and_indices() {
        let path = FieldPath::root()
            .item("components", 2)
            .item("buttons", 0)
            .field("text");
        assert_eq!(path.as_str(), "components[2].buttons[0].text");
    }

    #[rstest]
    fn root_field_has_no_leading_dot() {
        assert_eq!(FieldPath::root().field("name").to_string(), "name");
    }
}
