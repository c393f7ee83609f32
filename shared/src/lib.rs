use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use thiserror::Error;

/// Maximum number of links a single account may hold
pub const MAX_CHILD_LINKS: usize = 10;

/// Maximum length of a child name, in characters
pub const MAX_CHILD_NAME_LEN: usize = 50;

/// Signed-in account as seen by the dashboard. Owned by the identity layer,
/// never mutated by the frontend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub uid: String,
    /// Avatar image address, if the identity provider has one
    #[serde(default, rename = "photoURL")]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
}

impl User {
    pub fn new(uid: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            photo_url: None,
            display_name: None,
        }
    }

    /// Label used for the avatar's alt text
    pub fn label(&self) -> String {
        self.display_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .map(|name| name.to_string())
            .unwrap_or_else(|| "User profile".to_string())
    }
}

/// A link generated for one named child
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedLink {
    /// Unique (case-insensitive) among one user's links
    pub child_name: String,
    pub link: String,
    pub image_url: String,
}

impl GeneratedLink {
    pub fn new(child_name: impl Into<String>, link: impl Into<String>, image_url: impl Into<String>) -> Self {
        Self {
            child_name: child_name.into(),
            link: link.into(),
            image_url: image_url.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountSummary {
    pub balance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedLinksResponse {
    pub links: Vec<GeneratedLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateLinksRequest {
    pub links: Vec<GeneratedLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignOutResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Reasons a child name is refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChildNameError {
    #[error("Please enter the child's name")]
    Empty,
    #[error("Child name must be at most {max} characters")]
    TooLong { max: usize },
    #[error("A link for {0} already exists")]
    Duplicate(String),
    #[error("No link found for {0}")]
    NotFound(String),
}

/// Balance with two decimals, e.g. `250.00`
pub fn format_balance(balance: f64) -> String {
    format!("{:.2}", balance)
}

/// Avatar address for a user, falling back to the placeholder when the
/// identity record has none (or an empty one)
pub fn avatar_src(user: &User, default_icon: &str) -> String {
    match user.photo_url.as_deref().map(str::trim) {
        Some(url) if !url.is_empty() => url.to_string(),
        _ => default_icon.to_string(),
    }
}

/// The generated-links section is only rendered for a non-empty list
pub fn should_show_generated_links(links: &[GeneratedLink]) -> bool {
    !links.is_empty()
}

/// Trims and collapses inner whitespace
pub fn normalize_child_name(name: &str) -> String {
    name.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn name_key(name: &str) -> String {
    normalize_child_name(name).to_lowercase()
}

/// Validates a new child name against the names already in use and returns
/// the normalized name.
pub fn validate_child_name(name: &str, existing: &[String]) -> Result<String, ChildNameError> {
    let normalized = normalize_child_name(name);
    if normalized.is_empty() {
        return Err(ChildNameError::Empty);
    }
    if normalized.chars().count() > MAX_CHILD_NAME_LEN {
        return Err(ChildNameError::TooLong { max: MAX_CHILD_NAME_LEN });
    }

    let key = normalized.to_lowercase();
    if existing.iter().any(|other| name_key(other) == key) {
        return Err(ChildNameError::Duplicate(normalized));
    }

    Ok(normalized)
}

/// URL path segment derived from a child name
pub fn child_link_slug(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;

    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    if slug.is_empty() {
        "child".to_string()
    } else {
        slug
    }
}

/// Short random token that keeps links unguessable
pub fn new_link_token() -> String {
    uuid::Uuid::new_v4().simple().to_string()[..8].to_string()
}

/// Builds `{base}/gift/{uid}/{slug}-{token}`
pub fn build_child_link(base_url: &str, uid: &str, child_name: &str, token: &str) -> String {
    format!(
        "{}/gift/{}/{}-{}",
        base_url.trim_end_matches('/'),
        uid,
        child_link_slug(child_name),
        token
    )
}

/// Renames one entry, returning the full replacement list.
///
/// The entry is picked by its exact `child_name`; the new name must not
/// collide (case-insensitively) with any other entry.
pub fn rename_link(
    links: &[GeneratedLink],
    old_name: &str,
    new_name: &str,
) -> Result<Vec<GeneratedLink>, ChildNameError> {
    let Some(index) = links.iter().position(|l| l.child_name == old_name) else {
        return Err(ChildNameError::NotFound(old_name.to_string()));
    };

    // The entry being renamed may keep its own name with different casing
    let others: Vec<String> = links
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, l)| l.child_name.clone())
        .collect();
    let new_name = validate_child_name(new_name, &others)?;

    let mut updated = links.to_vec();
    updated[index].child_name = new_name;
    Ok(updated)
}

/// Removes the entry whose `child_name` matches exactly, returning the full
/// replacement list
pub fn remove_link(links: &[GeneratedLink], child_name: &str) -> Vec<GeneratedLink> {
    links
        .iter()
        .filter(|l| l.child_name != child_name)
        .cloned()
        .collect()
}

/// Names of the children that already have a link, in list order
pub fn child_names(links: &[GeneratedLink]) -> Vec<String> {
    links.iter().map(|l| l.child_name.clone()).collect()
}

/// Whether the supplied child names describe the same set as the links.
/// Only used for diagnostics; the link owner is responsible for the invariant.
pub fn child_names_consistent(names: &[String], links: &[GeneratedLink]) -> bool {
    let from_names: BTreeSet<String> = names.iter().map(|n| name_key(n)).collect();
    let from_links: BTreeSet<String> = links.iter().map(|l| name_key(&l.child_name)).collect();
    from_names == from_links
}

#[cfg(test)]
mod tests {
    use super::*;

    fn links() -> Vec<GeneratedLink> {
        vec![
            GeneratedLink::new("Mia", "https://x/1", "/i1.png"),
            GeneratedLink::new("Leo", "https://x/2", "/i2.png"),
        ]
    }

    #[test]
    fn test_format_balance() {
        assert_eq!(format_balance(250.0), "250.00");
        assert_eq!(format_balance(0.0), "0.00");
        assert_eq!(format_balance(12.345), "12.35");
    }

    #[test]
    fn test_avatar_src_falls_back_to_default() {
        let mut user = User::new("u1");
        assert_eq!(avatar_src(&user, "/default-user-icon.png"), "/default-user-icon.png");

        user.photo_url = Some("   ".to_string());
        assert_eq!(avatar_src(&user, "/default-user-icon.png"), "/default-user-icon.png");

        user.photo_url = Some("https://img/me.png".to_string());
        assert_eq!(avatar_src(&user, "/default-user-icon.png"), "https://img/me.png");
    }

    #[test]
    fn test_user_label() {
        let mut user = User::new("u1");
        assert_eq!(user.label(), "User profile");
        user.display_name = Some("Ana".to_string());
        assert_eq!(user.label(), "Ana");
    }

    #[test]
    fn test_should_show_generated_links() {
        assert!(!should_show_generated_links(&[]));
        assert!(should_show_generated_links(&links()));
    }

    #[test]
    fn test_validate_child_name() {
        let existing = child_names(&links());

        assert_eq!(validate_child_name("  Ava   Rose ", &existing), Ok("Ava Rose".to_string()));
        assert_eq!(validate_child_name("   ", &existing), Err(ChildNameError::Empty));
        assert_eq!(
            validate_child_name(" mia ", &existing),
            Err(ChildNameError::Duplicate("mia".to_string()))
        );

        let long = "a".repeat(MAX_CHILD_NAME_LEN + 1);
        assert_eq!(
            validate_child_name(&long, &existing),
            Err(ChildNameError::TooLong { max: MAX_CHILD_NAME_LEN })
        );
    }

    #[test]
    fn test_child_link_slug() {
        assert_eq!(child_link_slug("Mia"), "mia");
        assert_eq!(child_link_slug("  Ava  Rose!"), "ava-rose");
        assert_eq!(child_link_slug("Zoë-Jane"), "zo-jane");
        assert_eq!(child_link_slug("🌱"), "child");
    }

    #[test]
    fn test_build_child_link() {
        assert_eq!(
            build_child_link("https://sprout.example/", "u1", "Ava Rose", "abcd1234"),
            "https://sprout.example/gift/u1/ava-rose-abcd1234"
        );
        assert_eq!(
            build_child_link("https://sprout.example", "u1", "Mia", "0f0f0f0f"),
            "https://sprout.example/gift/u1/mia-0f0f0f0f"
        );
    }

    #[test]
    fn test_new_link_token() {
        let a = new_link_token();
        let b = new_link_token();
        assert_eq!(a.len(), 8);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(a, b);
    }

    #[test]
    fn test_rename_link() {
        let renamed = rename_link(&links(), "Mia", "Mila").unwrap();
        assert_eq!(renamed[0].child_name, "Mila");
        assert_eq!(renamed[0].link, "https://x/1");
        assert_eq!(renamed[1], links()[1]);

        // Changing only the casing of the same entry is allowed
        let recased = rename_link(&links(), "Mia", "MIA").unwrap();
        assert_eq!(recased[0].child_name, "MIA");

        assert_eq!(
            rename_link(&links(), "Mia", "leo"),
            Err(ChildNameError::Duplicate("leo".to_string()))
        );
        assert_eq!(
            rename_link(&links(), "Nobody", "Sam"),
            Err(ChildNameError::NotFound("Nobody".to_string()))
        );
        assert_eq!(
            rename_link(&links(), "mia", "Sam"),
            Err(ChildNameError::NotFound("mia".to_string()))
        );
    }

    #[test]
    fn test_rename_link_touches_only_exact_entry() {
        let clashing = vec![
            GeneratedLink::new("Mia", "https://x/1", "/i1.png"),
            GeneratedLink::new("mia", "https://x/3", "/i3.png"),
        ];

        // The other entry already holds "mia", so only a fresh name is accepted
        let renamed = rename_link(&clashing, "mia", "Nora").unwrap();
        assert_eq!(renamed[0].child_name, "Mia");
        assert_eq!(renamed[1].child_name, "Nora");
        assert_eq!(renamed[1].link, "https://x/3");
    }

    #[test]
    fn test_remove_link() {
        let remaining = remove_link(&links(), "Mia");
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].child_name, "Leo");

        assert_eq!(remove_link(&links(), "Nobody"), links());
        assert_eq!(remove_link(&links(), "MIA"), links());
    }

    #[test]
    fn test_remove_link_keeps_names_differing_in_case() {
        let clashing = vec![
            GeneratedLink::new("Mia", "https://x/1", "/i1.png"),
            GeneratedLink::new("mia", "https://x/3", "/i3.png"),
        ];

        let remaining = remove_link(&clashing, "Mia");
        assert_eq!(remaining, vec![GeneratedLink::new("mia", "https://x/3", "/i3.png")]);
    }

    #[test]
    fn test_child_names_consistent() {
        let names = vec!["leo".to_string(), "Mia".to_string()];
        assert!(child_names_consistent(&names, &links()));
        assert!(!child_names_consistent(&["Mia".to_string()], &links()));
        assert!(child_names_consistent(&[], &[]));
    }

    #[test]
    fn test_generated_link_wire_format() {
        let json = serde_json::to_value(&links()[0]).unwrap();
        assert_eq!(json["childName"], "Mia");
        assert_eq!(json["imageUrl"], "/i1.png");

        let user: User = serde_json::from_str(r#"{"uid":"u1","photoURL":null}"#).unwrap();
        assert_eq!(user, User::new("u1"));
    }
}
