//! Skill catalog controller
//!
//! The skill catalog is global, not owned by a single identity. Creation
//! is authenticated; edit and delete are observed to require no
//! authentication and that asymmetry is preserved as-is rather than
//! hardened.

use reqwest::StatusCode;
use tracing::info;

use crate::client::ApiClient;
use crate::endpoints;
use crate::error::Result;
use crate::fixtures;
use crate::types::{Category, NewSkill, Skill, User};

impl ApiClient {
    /// The full skill catalog listing
    pub async fn all_skills(&self) -> Result<Vec<Skill>> {
        let response = self
            .anonymous()
            .get(self.api_url(endpoints::SKILLS))
            .send()
            .await?;
        self.decode("all skills", response).await
    }

    /// Create a catalog skill in the "All" category
    pub async fn create_skill(&self, actor: &User) -> Result<Skill> {
        let body = NewSkill {
            category: Category::all(),
            skill: fixtures::skill_name(),
        };

        let client = self.login(&actor.context()).await?;
        let response = client
            .post(self.api_url(endpoints::CREATE_SKILL))
            .json(&body)
            .send()
            .await?;
        let skill: Skill = self.decode("create skill", response).await?;

        info!(skill = %skill.skill, "created skill");
        Ok(skill)
    }

    /// Rename a catalog skill; unauthenticated, returns the raw status
    pub async fn edit_skill(&self, skill_id: i64, name: &str) -> Result<u16> {
        let url = format!(
            "{}?skill={}&skillId={}",
            self.api_url(endpoints::EDIT_SKILL),
            urlencoding::encode(name),
            skill_id
        );

        let response = self.anonymous().put(&url).send().await?;
        Ok(response.status().as_u16())
    }

    /// Delete a catalog skill; unauthenticated
    pub async fn delete_skill(&self, skill_id: i64) -> Result<()> {
        let url = format!(
            "{}?skillId={}",
            self.api_url(endpoints::DELETE_SKILL),
            skill_id
        );

        let response = self.anonymous().put(&url).send().await?;
        self.expect_status("delete skill", StatusCode::OK, &response)?;

        info!(skill_id, "deleted skill");
        Ok(())
    }

    /// Single catalog skill by id
    pub async fn get_skill_by_id(&self, skill_id: i64) -> Result<Skill> {
        let url = format!(
            "{}?skillId={}",
            self.api_url(endpoints::SKILL_BY_ID),
            skill_id
        );

        let response = self.anonymous().get(&url).send().await?;
        self.decode("get skill by id", response).await
    }

    /// Whether a skill is present in the catalog listing
    pub async fn skill_exists(&self, skill_id: i64) -> Result<bool> {
        let skills = self.all_skills().await?;
        Ok(skills.iter().any(|s| s.skill_id == Some(skill_id)))
    }
}
