//! Records decoded from the container runtime's JSON-lines output.

use serde::Deserialize;
use serde::de::DeserializeOwned;

use super::AppError;

const SHORT_ID_LEN: usize = 12;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ImageSummary {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Repository", default)]
    pub repository: String,
    #[serde(rename = "Tag", default)]
    pub tag: String,
    #[serde(rename = "Size", default)]
    pub size: String,
}

impl ImageSummary {
    pub fn short_id(&self) -> &str {
        short_id(&self.id)
    }

    /// `repository:tag`, or `<none>` for dangling images.
    pub fn reference(&self) -> String {
        match (self.repository.as_str(), self.tag.as_str()) {
            ("" | "<none>", _) => "<none>".to_string(),
            (repo, "" | "<none>") => repo.to_string(),
            (repo, tag) => format!("{repo}:{tag}"),
        }
    }

    pub fn matches(&self, term: &str) -> bool {
        self.reference().contains(term) || self.id.contains(term)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContainerSummary {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Names", default)]
    pub names: String,
    #[serde(rename = "Image", default)]
    pub image: String,
    #[serde(rename = "Status", default)]
    pub status: String,
}

impl ContainerSummary {
    pub fn short_id(&self) -> &str {
        short_id(&self.id)
    }

    pub fn matches(&self, query: &str) -> bool {
        self.names.contains(query) || self.id.contains(query)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HubSearchResult {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Description", default)]
    pub description: String,
    #[serde(rename = "StarCount", default)]
    pub star_count: String,
    #[serde(rename = "IsOfficial", default)]
    pub is_official: String,
}

fn short_id(id: &str) -> &str {
    let id = id.strip_prefix("sha256:").unwrap_or(id);
    id.get(..SHORT_ID_LEN).unwrap_or(id)
}

/// Decode one JSON object per non-blank line.
pub fn parse_json_lines<T: DeserializeOwned>(what: &str, output: &str) -> Result<Vec<T>, AppError> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            serde_json::from_str(line).map_err(|e| AppError::ParseError {
                what: what.to_string(),
                details: format!("{e} in line: {line}"),
            })
        })
        .collect()
}
