//! # Domain models shared by every crate
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`User`] | The authenticated user record, including the session token. Serialised as camelCase JSON, which is both the backend wire shape and the durable record format. |
//! | [`Person`] | A draggable card on the demo board. |
//! | [`Column`] | A board bucket holding an ordered list of person ids. |
//! | [`FeedImage`] | One image of the infinite-scroll feed. |

use serde::{Deserialize, Serialize};

/// The authenticated user as held by the session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Backend identifier. The backend may omit it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Bearer token for the remote API.
    pub token: String,
}

impl User {
    /// "First Last", trimmed when either part is empty.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// First letter of each name, `"U"` when the first name is empty.
    pub fn initials(&self) -> String {
        let first = self.first_name.chars().next().unwrap_or('U');
        let last = self.last_name.chars().next();
        let mut out = String::new();
        out.extend(first.to_uppercase());
        if let Some(c) = last {
            out.extend(c.to_uppercase());
        }
        out
    }

    /// Generated avatar image for the profile card.
    pub fn avatar_url(&self) -> String {
        format!(
            "https://ui-avatars.com/api/?name={}+{}&background=random",
            self.first_name, self.last_name
        )
    }

    /// Whether this record can authenticate requests.
    pub fn has_token(&self) -> bool {
        !self.token.is_empty()
    }
}

/// A person card on the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: String,
    pub name: String,
    pub role: String,
    pub avatar: String,
}

impl Person {
    pub fn new(id: &str, name: &str, role: &str, avatar: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            role: role.to_string(),
            avatar: avatar.to_string(),
        }
    }

    /// "Alex Johnson" -> "AJ"
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .collect()
    }
}

/// A board column. `items` holds person ids in arrival order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: String,
    pub title: String,
    pub items: Vec<String>,
}

impl Column {
    pub fn new(id: &str, title: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            items: Vec::new(),
        }
    }

    pub fn contains(&self, person_id: &str) -> bool {
        self.items.iter().any(|id| id == person_id)
    }
}

/// An image in the infinite-scroll feed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedImage {
    pub id: String,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(first: &str, last: &str) -> User {
        User {
            id: None,
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: "jane@example.com".to_string(),
            token: "tok".to_string(),
        }
    }

    #[test]
    fn test_user_uses_camel_case_json() {
        let json = serde_json::to_string(&user("Jane", "Doe")).unwrap();
        assert_eq!(
            json,
            r#"{"firstName":"Jane","lastName":"Doe","email":"jane@example.com","token":"tok"}"#
        );
    }

    #[test]
    fn test_user_initials_and_name() {
        assert_eq!(user("jane", "doe").initials(), "JD");
        assert_eq!(user("", "").initials(), "U");
        assert_eq!(user("Jane", "").full_name(), "Jane");
        assert_eq!(
            user("Jane", "Doe").avatar_url(),
            "https://ui-avatars.com/api/?name=Jane+Doe&background=random"
        );
    }

    #[test]
    fn test_person_initials() {
        let p = Person::new("person-1", "Alex Johnson", "Frontend Developer", "");
        assert_eq!(p.initials(), "AJ");
    }
}
