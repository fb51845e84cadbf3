//! Dockerfile presence checks.
//!
//! The check is purely textual: each required instruction must occur somewhere
//! in the content. Grammar, ordering and comments are not considered.

/// Fixed on-disk name of the persisted Dockerfile.
pub const DOCKERFILE_NAME: &str = "Dockerfile";

/// Instructions that must appear in every saved Dockerfile.
pub const REQUIRED_INSTRUCTIONS: [&str; 2] = ["FROM", "COPY"];

/// Result of a Dockerfile check.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DockerfileCheck {
    /// Required instructions not found, in declaration order.
    pub missing: Vec<&'static str>,
}

impl DockerfileCheck {
    pub fn is_valid(&self) -> bool {
        self.missing.is_empty()
    }

    /// Owned copy of the missing set, for error values.
    pub fn missing_owned(&self) -> Vec<String> {
        self.missing.iter().map(|s| s.to_string()).collect()
    }
}

/// Check that `content` mentions every required instruction.
pub fn check_dockerfile(content: &str) -> DockerfileCheck {
    let missing =
        REQUIRED_INSTRUCTIONS.iter().copied().filter(|token| !content.contains(token)).collect();
    DockerfileCheck { missing }
}
