//! Skill catalog scenarios

mod common;

use agora_harness::{FixtureTracker, Result, Role};

#[tokio::test]
async fn skill_lifecycle_is_visible_in_the_catalog() -> Result<()> {
    let Some(api) = common::live() else { return Ok(()) };
    let admin = common::register_admin(&api).await?;
    let mut fixtures = FixtureTracker::new();

    let user = api.register_user(Role::User).await?;
    fixtures.user(&user);

    let skill = api.create_skill(&user).await?;
    let skill_id = skill.skill_id.expect("created skill must carry an id");
    assert_eq!(skill.category.as_ref().map(|c| c.id), Some(100));

    assert!(api.skill_exists(skill_id).await?);
    let found = api.get_skill_by_id(skill_id).await?;
    assert_eq!(found.skill, skill.skill);

    api.delete_skill(skill_id).await?;
    assert!(!api.skill_exists(skill_id).await?);

    fixtures.teardown(&api, &admin).await
}

#[tokio::test]
async fn skill_edit_requires_no_credentials() -> Result<()> {
    let Some(api) = common::live() else { return Ok(()) };
    let admin = common::register_admin(&api).await?;
    let mut fixtures = FixtureTracker::new();

    let user = api.register_user(Role::User).await?;
    fixtures.user(&user);

    let skill = api.create_skill(&user).await?;
    let skill_id = skill.skill_id.expect("created skill must carry an id");
    fixtures.skill(&skill);

    // Observed behavior: the catalog accepts unauthenticated edits
    let status = api.edit_skill(skill_id, "renamed-skill").await?;
    assert_eq!(status, 200);

    let renamed = api.get_skill_by_id(skill_id).await?;
    assert_eq!(renamed.skill, "renamed-skill");

    fixtures.teardown(&api, &admin).await
}
