//! Fixture tracking and constraint-safe teardown
//!
//! Scenarios register every resource they create; teardown removes them in
//! dependency order (comments, then posts, then skills, then identities)
//! so nothing is left dangling on the API path. Identity teardown is the
//! soft path — an admin disable — which keeps referential integrity
//! intact. The hard-delete escape hatch lives in [`crate::db`].

use tracing::info;

use crate::client::ApiClient;
use crate::error::Result;
use crate::types::{Comment, Post, Skill, User};

/// Registry of disposable resources created by one scenario
///
/// Each scenario owns its fixtures exclusively; trackers are never shared.
#[derive(Default)]
pub struct FixtureTracker {
    users: Vec<User>,
    posts: Vec<(Post, User)>,
    comments: Vec<(i64, User)>,
    skills: Vec<i64>,
}

impl FixtureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track a registered identity for disabling at teardown
    pub fn user(&mut self, user: &User) {
        self.users.push(user.clone());
    }

    /// Track a post together with the author able to delete it
    pub fn post(&mut self, author: &User, post: &Post) {
        self.posts.push((post.clone(), author.clone()));
    }

    /// Track a comment together with an actor able to delete it
    pub fn comment(&mut self, actor: &User, comment: &Comment) {
        self.comments.push((comment.comment_id, actor.clone()));
    }

    /// Track a catalog skill
    pub fn skill(&mut self, skill: &Skill) {
        if let Some(skill_id) = skill.skill_id {
            self.skills.push(skill_id);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
            && self.posts.is_empty()
            && self.comments.is_empty()
            && self.skills.is_empty()
    }

    /// Remove everything tracked, children before parents
    ///
    /// Identities are disabled, not deleted, so rows referencing them stay
    /// valid. Resources of the same kind go in reverse creation order. The
    /// admin fixture disables itself last, leaving no enabled identity
    /// behind.
    pub async fn teardown(&mut self, api: &ApiClient, admin: &User) -> Result<()> {
        let comments = std::mem::take(&mut self.comments);
        for (comment_id, actor) in comments.into_iter().rev() {
            api.delete_comment(&actor, comment_id).await?;
        }

        let posts = std::mem::take(&mut self.posts);
        for (post, author) in posts.into_iter().rev() {
            api.delete_post(&author, post.post_id).await?;
        }

        let skills = std::mem::take(&mut self.skills);
        for skill_id in skills.into_iter().rev() {
            api.delete_skill(skill_id).await?;
        }

        let users = std::mem::take(&mut self.users);
        for user in users.into_iter().rev() {
            api.disable_user(admin, user.id).await?;
        }

        // The admin account is still enabled for this final call
        api.disable_user(admin, admin.id).await?;

        info!("fixture teardown complete");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ExpertiseProfile, PersonalProfile};

    fn user(id: i64) -> User {
        User {
            id,
            username: format!("user{}", id),
            password: "pw".into(),
            email: "a@b.com".into(),
            personal_profile: PersonalProfile::default(),
            expertise_profile: ExpertiseProfile {
                id: None,
                availability: 8,
                category: None,
                skills: vec![],
            },
            authorities: vec!["ROLE_USER".into()],
            enabled: true,
            account_non_expired: true,
            account_non_locked: true,
            credentials_non_expired: true,
        }
    }

    #[test]
    fn tracker_starts_empty_and_records_fixtures() {
        let mut tracker = FixtureTracker::new();
        assert!(tracker.is_empty());

        let author = user(1);
        tracker.user(&author);
        tracker.post(
            &author,
            &Post {
                post_id: 10,
                content: "c".into(),
                public: true,
                likes: vec![],
            },
        );
        assert!(!tracker.is_empty());
    }

    #[test]
    fn skills_without_ids_are_not_tracked() {
        let mut tracker = FixtureTracker::new();
        tracker.skill(&Skill::named("orphan"));
        assert!(tracker.is_empty());
    }
}
