//! Wire types and harness-owned entity references
//!
//! Request bodies are typed serde documents, never string templates. The
//! harness owns only references: ids plus the last-known field values used
//! to drive assertions and teardown — every entity's lifetime is bounded
//! by the service under test.

use serde::{Deserialize, Serialize};

use crate::auth::{AuthContext, Credentials};

/// Well-known catalog category every fixture uses
pub const ALL_CATEGORY_ID: i64 = 100;
pub const ALL_CATEGORY_NAME: &str = "All";

/// Authority an identity can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub fn authority(&self) -> &'static str {
        match self {
            Role::User => "ROLE_USER",
            Role::Admin => "ROLE_ADMIN",
        }
    }

    /// The authority set a registration with this role requests:
    /// plain users hold one authority, admins hold both.
    pub fn authorities(&self) -> Vec<String> {
        match self {
            Role::User => vec![Role::User.authority().to_string()],
            Role::Admin => vec![
                Role::User.authority().to_string(),
                Role::Admin.authority().to_string(),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

impl Category {
    /// The singleton "All"/100 category
    pub fn all() -> Self {
        Self {
            id: ALL_CATEGORY_ID,
            name: ALL_CATEGORY_NAME.to_string(),
        }
    }
}

/// Skill catalog entry
///
/// Also the element shape of an expertise profile's skill list, where only
/// the name is populated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skill_id: Option<i64>,
    pub skill: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

impl Skill {
    /// A bare skill name, as carried inside an expertise document
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            skill_id: None,
            skill: name.into(),
            category: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub city: City,
}

/// Personal profile document — mutation is always a full replace
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_year: Option<String>,
    #[serde(default)]
    pub location: Location,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personal_review: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture_privacy: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sex: Option<String>,
}

impl PersonalProfile {
    pub fn city(&self) -> Option<&str> {
        self.location.city.city.as_deref()
    }
}

/// Expertise profile — skills are a fixed-size ordered sequence of 5
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpertiseProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub availability: i64,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub skills: Vec<Skill>,
}

/// Registration document
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserRequest {
    pub authorities: Vec<String>,
    pub category: Category,
    pub confirm_password: String,
    pub email: String,
    pub password: String,
    pub username: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Authority {
    pub authority: String,
}

/// Direct-read projection of an identity (`GET /users/{id}`)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserById {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub authorities: Vec<Authority>,
    #[serde(default)]
    pub personal_profile: Option<PersonalProfile>,
}

/// Search-index projection of an identity (the second read path)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSearchHit {
    pub user_id: i64,
    pub username: String,
    #[serde(default)]
    pub expertise_profile: Option<ExpertiseProfile>,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub account_non_expired: bool,
    #[serde(default)]
    pub account_non_locked: bool,
    #[serde(default)]
    pub credentials_non_expired: bool,
}

/// Fully provisioned identity, as the harness holds it
///
/// Assembled client-side from the registration confirmation, the
/// direct-read projection and the search-index projection. The password is
/// held only client-side after creation.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password: String,
    pub email: String,
    pub personal_profile: PersonalProfile,
    pub expertise_profile: ExpertiseProfile,
    pub authorities: Vec<String>,
    pub enabled: bool,
    pub account_non_expired: bool,
    pub account_non_locked: bool,
    pub credentials_non_expired: bool,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.authorities.iter().any(|a| a == Role::Admin.authority())
    }

    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.username.clone(), self.password.clone())
    }

    /// Authenticated call descriptor for this identity
    pub fn context(&self) -> AuthContext {
        self.credentials().context()
    }

    pub fn first_name(&self) -> &str {
        self.personal_profile.first_name.as_deref().unwrap_or_default()
    }
}

/// New-post document; visibility is explicit and immutable after creation
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
    pub public: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub post_id: i64,
    pub content: String,
    pub public: bool,
    /// Liker projections; only the count is asserted
    #[serde(default)]
    pub likes: Vec<serde_json::Value>,
}

/// New-comment document
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewComment {
    pub comment_content: String,
    pub deleted_confirmed: bool,
    pub post_id: i64,
    pub user_id: i64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub comment_id: i64,
    pub content: String,
    #[serde(default)]
    pub likes: Vec<serde_json::Value>,
    /// Attached client-side after creation; not part of the wire document
    #[serde(skip)]
    pub author_id: i64,
    #[serde(skip)]
    pub post_id: i64,
}

/// Connection-request document sent to the receiver
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewConnectionRequest {
    pub id: i64,
    pub username: String,
}

/// Minimal actor reference inside listing projections
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActorRef {
    pub id: i64,
    #[serde(default)]
    pub username: Option<String>,
}

/// Pending-request listing projection
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestHit {
    pub id: i64,
    #[serde(default)]
    pub sender: Option<ActorRef>,
    #[serde(default)]
    pub time_stamp: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestState {
    Pending,
    Approved,
}

/// Harness-owned view of a connection request
#[derive(Debug, Clone)]
pub struct ConnectionRequest {
    pub id: i64,
    pub sender_id: i64,
    pub receiver_id: i64,
    pub time_stamp: Option<String>,
    pub state: RequestState,
}

/// Outcome of re-sending a request to an already-connected pair
///
/// The service exposes no distinct disconnect endpoint; the resulting
/// transition must be confirmed against the live service, so the probe
/// reports the raw observation instead of interpreting it.
#[derive(Debug, Clone)]
pub struct DisconnectProbe {
    pub status: u16,
    pub body: String,
}

/// New-skill document
#[derive(Debug, Clone, Serialize)]
pub struct NewSkill {
    pub category: Category,
    pub skill: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_role_holds_one_authority_admin_holds_two() {
        assert_eq!(Role::User.authorities(), vec!["ROLE_USER"]);
        assert_eq!(Role::Admin.authorities(), vec!["ROLE_USER", "ROLE_ADMIN"]);
    }

    #[test]
    fn register_request_serializes_camel_case() {
        let request = RegisterUserRequest {
            authorities: Role::User.authorities(),
            category: Category::all(),
            confirm_password: "pw".into(),
            email: "a@b.com".into(),
            password: "pw".into(),
            username: "user1".into(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["authorities"][0], "ROLE_USER");
        assert_eq!(json["category"]["id"], 100);
        assert_eq!(json["category"]["name"], "All");
        assert_eq!(json["confirmPassword"], "pw");
        assert_eq!(json["username"], "user1");
    }

    #[test]
    fn personal_profile_round_trips_nested_city() {
        let wire = r#"{
            "id": 7,
            "firstName": "Mira",
            "lastName": "Otero",
            "birthYear": "1987-03-14",
            "location": { "city": { "city": "Lisbon" } },
            "personalReview": "review",
            "picture": "https://img.example.com/p.png",
            "picturePrivacy": true,
            "sex": "FEMALE"
        }"#;
        let profile: PersonalProfile = serde_json::from_str(wire).unwrap();
        assert_eq!(profile.city(), Some("Lisbon"));
        assert_eq!(profile.first_name.as_deref(), Some("Mira"));

        let back = serde_json::to_value(&profile).unwrap();
        assert_eq!(back["location"]["city"]["city"], "Lisbon");
        assert_eq!(back["picturePrivacy"], true);
    }

    #[test]
    fn expertise_profile_carries_ordered_skills() {
        let wire = r#"{
            "availability": 8,
            "category": { "id": 100, "name": "All" },
            "skills": [
                { "skill": "a" }, { "skill": "b" }, { "skill": "c" },
                { "skill": "d" }, { "skill": "e" }
            ]
        }"#;
        let profile: ExpertiseProfile = serde_json::from_str(wire).unwrap();
        assert_eq!(profile.skills.len(), 5);
        let names: Vec<&str> = profile.skills.iter().map(|s| s.skill.as_str()).collect();
        assert_eq!(names, ["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn post_defaults_empty_likes() {
        let post: Post =
            serde_json::from_str(r#"{ "postId": 3, "content": "hi", "public": true }"#).unwrap();
        assert_eq!(post.post_id, 3);
        assert!(post.likes.is_empty());
    }

    #[test]
    fn comment_skips_client_side_fields() {
        let comment: Comment =
            serde_json::from_str(r#"{ "commentId": 9, "content": "nice" }"#).unwrap();
        assert_eq!(comment.comment_id, 9);
        assert_eq!(comment.author_id, 0);
        assert_eq!(comment.post_id, 0);
    }

    #[test]
    fn new_comment_serializes_camel_case() {
        let body = NewComment {
            comment_content: "hello".into(),
            deleted_confirmed: true,
            post_id: 12,
            user_id: 34,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["commentContent"], "hello");
        assert_eq!(json["deletedConfirmed"], true);
        assert_eq!(json["postId"], 12);
        assert_eq!(json["userId"], 34);
    }
}
