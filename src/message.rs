use thiserror::Error;

/// Built-in commit types with the short blurbs shown in the type selector
/// and the help window.
pub const COMMIT_KINDS: &[(&str, &str)] = &[
    ("feat", "A new feature"),
    ("fix", "A bug fix"),
    ("docs", "Documentation only changes"),
    ("style", "Formatting changes that do not affect meaning"),
    ("refactor", "A change that neither fixes a bug nor adds a feature"),
    ("perf", "A change that improves performance"),
    ("test", "Adding or correcting tests"),
    ("chore", "Build process or auxiliary tooling changes"),
];

/// Selector sentinel that reveals the free-form type field.
pub const CUSTOM_KIND: &str = "custom";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("description is required")]
    EmptyDescription,
}

/// Build a Conventional Commits message from its parts.
///
/// Scope and description are trimmed. The scope segment is emitted only when
/// the trimmed scope is non-empty. An empty description is an error; the
/// caller must not emit or persist a message in that case.
pub fn format_commit(kind: &str, scope: &str, description: &str) -> Result<String, FormatError> {
    let scope = scope.trim();
    let description = description.trim();
    if description.is_empty() {
        return Err(FormatError::EmptyDescription);
    }
    if scope.is_empty() {
        Ok(format!("{kind}: {description}"))
    } else {
        Ok(format!("{kind}({scope}): {description}"))
    }
}
