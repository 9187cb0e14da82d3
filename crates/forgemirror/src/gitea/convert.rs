//! Conversion from Gitea API types to host-agnostic mirror types.

use super::types::GiteaRepo;
use crate::platform::SourceRepo;

/// Convert a Gitea API repository into a [`SourceRepo`].
///
/// Gitea reports `original_url` as the empty string for repositories that
/// were created in place; that is mapped to `None` so callers only see a
/// marker when one actually exists.
pub fn to_source_repo(repo: &GiteaRepo) -> SourceRepo {
    SourceRepo {
        name: repo.name.clone(),
        owner: repo.owner.login.clone(),
        private: repo.private,
        description: repo.description.clone(),
        has_wiki: repo.has_wiki,
        has_projects: repo.has_projects,
        original_url: if repo.original_url.is_empty() {
            None
        } else {
            Some(repo.original_url.clone())
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gitea::types::GiteaUser;
    use chrono::Utc;

    fn gitea_repo(original_url: &str) -> GiteaRepo {
        GiteaRepo {
            id: 1,
            name: "foo".to_string(),
            full_name: "alice/foo".to_string(),
            description: Some("a test repo".to_string()),
            private: true,
            fork: false,
            mirror: false,
            original_url: original_url.to_string(),
            has_wiki: true,
            has_projects: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            owner: GiteaUser {
                id: 1,
                login: "alice".to_string(),
                full_name: Some("Alice".to_string()),
            },
        }
    }

    #[test]
    fn test_to_source_repo_maps_fields() {
        let source = to_source_repo(&gitea_repo(""));
        assert_eq!(source.name, "foo");
        assert_eq!(source.owner, "alice");
        assert!(source.private);
        assert_eq!(source.description.as_deref(), Some("a test repo"));
        assert!(source.has_wiki);
        assert!(!source.has_projects);
    }

    #[test]
    fn test_to_source_repo_empty_marker_becomes_none() {
        let source = to_source_repo(&gitea_repo(""));
        assert!(source.original_url.is_none());
        assert!(!source.is_derived());
    }

    #[test]
    fn test_to_source_repo_keeps_nonempty_marker() {
        let source = to_source_repo(&gitea_repo("https://upstream.test/alice/foo"));
        assert_eq!(
            source.original_url.as_deref(),
            Some("https://upstream.test/alice/foo")
        );
        assert!(source.is_derived());
    }
}
