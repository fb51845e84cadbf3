use crate::domain::dockerfile::DOCKERFILE_NAME;

/// Characters that may not appear in a build-context filename.
pub const RESERVED_FILENAME_CHARS: [char; 9] = ['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Validates a build-context filename.
///
/// Checks:
/// - Non-empty
/// - None of `< > : " / \ | ? *`
/// - Not "." or ".."
/// - Not `Dockerfile` in any case; that name belongs to the Dockerfile itself
pub fn validate_context_file_name(name: &str) -> bool {
    if name.is_empty() {
        return false;
    }
    if name == "." || name == ".." || name.eq_ignore_ascii_case(DOCKERFILE_NAME) {
        return false;
    }
    !name.contains(RESERVED_FILENAME_CHARS)
}

/// Validates a single argument forwarded to an external tool.
///
/// Checks:
/// - Non-empty
/// - No whitespace or null bytes
/// - Does not start with '-' (would be read as a flag)
pub fn validate_tool_argument(value: &str) -> bool {
    if value.is_empty() || value.starts_with('-') {
        return false;
    }
    !value.chars().any(|c| c.is_whitespace() || c == '\0')
}
