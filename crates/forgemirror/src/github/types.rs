//! GitHub API data types.

use serde::Deserialize;

/// GitHub repository - fields we read from the API response.
///
/// API docs: https://docs.github.com/en/rest/repos/repos#get-a-repository
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubRepo {
    /// Repository ID.
    pub id: i64,
    /// Repository name.
    pub name: String,
    /// Full name including owner (e.g., "owner/repo").
    pub full_name: String,
    /// Repository description.
    pub description: Option<String>,
    /// Whether the repository is private.
    pub private: bool,
    /// Whether wiki is enabled.
    #[serde(default)]
    pub has_wiki: bool,
    /// Whether the projects board is enabled.
    #[serde(default)]
    pub has_projects: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_github_repo_deserializes() {
        let json = serde_json::json!({
            "id": 42,
            "name": "foo",
            "full_name": "octocat/foo",
            "description": "mirrored",
            "private": true,
            "has_wiki": true,
            "has_projects": false,
            "stargazers_count": 3
        });

        let repo: GitHubRepo = serde_json::from_value(json).expect("repo should deserialize");
        assert_eq!(repo.full_name, "octocat/foo");
        assert!(repo.private);
        assert!(repo.has_wiki);
        assert!(!repo.has_projects);
    }

    #[test]
    fn test_github_repo_defaults_optional_flags() {
        let json = serde_json::json!({
            "id": 43,
            "name": "bare",
            "full_name": "octocat/bare",
            "description": null,
            "private": false
        });

        let repo: GitHubRepo = serde_json::from_value(json).expect("repo should deserialize");
        assert!(!repo.has_wiki);
        assert!(!repo.has_projects);
    }
}
