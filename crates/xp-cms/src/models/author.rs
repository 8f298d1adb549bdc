//! Author and team records.

use serde::Deserialize;

use super::Image;

/// Article author / team member.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub firstname: String,
    pub lastname: String,
    #[serde(default)]
    pub email: Option<String>,
    /// GitHub handle.
    #[serde(default)]
    pub git_hub: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub avatar: Option<Image>,
    #[serde(default)]
    pub job_title: Option<String>,
}

impl Author {
    /// `"{firstname} {lastname}"`.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.firstname, self.lastname)
    }

    /// URL slug of the author's team page (`firstname-lastname`, lowercase).
    #[must_use]
    pub fn slug(&self) -> String {
        format!(
            "{}-{}",
            self.firstname.to_lowercase(),
            self.lastname.to_lowercase()
        )
    }
}

/// Team section: a title, description and members.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Team {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub members: Vec<Author>,
}
