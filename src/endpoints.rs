//! Endpoint paths of the service under test
//!
//! Fixed paths are constants, parameterized paths are small builders.
//! `AUTHENTICATE` and `ADMIN_USER_STATUS` live directly under the base
//! URL; everything else is relative to the API root.

pub const AUTHENTICATE: &str = "/authenticate";
pub const ADMIN_USER_STATUS: &str = "/admin/users/status";

pub const REGISTER_USER: &str = "/users/";
pub const SEARCH_USERS: &str = "/users/search";

pub const POSTS: &str = "/posts";
pub const LIKE_POST: &str = "/posts/like";

pub const COMMENTS: &str = "/comments";
pub const ALL_COMMENTS: &str = "/comments/all";
pub const COMMENTS_BY_POST: &str = "/comments/byPost";
pub const COMMENT_SINGLE: &str = "/comments/single";
pub const LIKE_COMMENT: &str = "/comments/like";

pub const SEND_REQUEST: &str = "/requests";

pub const SKILLS: &str = "/skills";
pub const CREATE_SKILL: &str = "/skills/create";
pub const EDIT_SKILL: &str = "/skills/edit";
pub const DELETE_SKILL: &str = "/skills/delete";
pub const SKILL_BY_ID: &str = "/skills/one";

pub fn user_by_id(user_id: i64) -> String {
    format!("/users/{}", user_id)
}

pub fn personal_profile(user_id: i64) -> String {
    format!("/users/{}/personal", user_id)
}

pub fn expertise_profile(user_id: i64) -> String {
    format!("/users/{}/expertise", user_id)
}

pub fn profile_posts(user_id: i64) -> String {
    format!("/users/{}/posts", user_id)
}

pub fn user_requests(user_id: i64) -> String {
    format!("/users/{}/requests", user_id)
}

pub fn approve_request(user_id: i64) -> String {
    format!("/users/{}/requests/approve", user_id)
}
