//! Cross-validation engine
//!
//! Compares two independently obtained views of the same entity field by
//! field. A divergence is reported as a `Mismatch` naming the field, kept
//! distinct from transport-level failures.

use std::fmt::Debug;

use crate::error::{HarnessError, Result};
use crate::types::{Category, Comment, ExpertiseProfile, PersonalProfile, Post};

pub(crate) fn check_field<T: PartialEq + Debug>(
    entity: &'static str,
    field: &'static str,
    expected: &T,
    actual: &T,
) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(HarnessError::Mismatch {
            entity,
            field,
            expected: format!("{:?}", expected),
            actual: format!("{:?}", actual),
        })
    }
}

/// Verify a re-read personal profile against the submitted document
///
/// Covers the replaced fields: first name, last name, birth year, city,
/// review and picture privacy.
pub fn verify_personal_profile(expected: &PersonalProfile, actual: &PersonalProfile) -> Result<()> {
    const ENTITY: &str = "PersonalProfile";
    check_field(ENTITY, "firstName", &expected.first_name, &actual.first_name)?;
    check_field(ENTITY, "lastName", &expected.last_name, &actual.last_name)?;
    check_field(ENTITY, "birthYear", &expected.birth_year, &actual.birth_year)?;
    check_field(ENTITY, "city", &expected.city(), &actual.city())?;
    check_field(
        ENTITY,
        "personalReview",
        &expected.personal_review,
        &actual.personal_review,
    )?;
    check_field(
        ENTITY,
        "picturePrivacy",
        &expected.picture_privacy,
        &actual.picture_privacy,
    )?;
    Ok(())
}

/// Verify an expertise profile from the search index against the submitted
/// document
///
/// The 5 skills are compared positionally: the service stores skills in
/// fixed slots, so order matters here, not set equality.
pub fn verify_expertise_profile(
    expected: &ExpertiseProfile,
    actual: &ExpertiseProfile,
) -> Result<()> {
    const ENTITY: &str = "ExpertiseProfile";
    let expected_category = expected.category.as_ref().map(category_key);
    let actual_category = actual.category.as_ref().map(category_key);
    check_field(ENTITY, "category", &expected_category, &actual_category)?;
    check_field(ENTITY, "availability", &expected.availability, &actual.availability)?;
    check_field(ENTITY, "skills.len", &expected.skills.len(), &actual.skills.len())?;
    for (index, (want, got)) in expected.skills.iter().zip(actual.skills.iter()).enumerate() {
        if want.skill != got.skill {
            return Err(HarnessError::Mismatch {
                entity: ENTITY,
                field: "skills",
                expected: format!("[{}] {:?}", index, want.skill),
                actual: format!("[{}] {:?}", index, got.skill),
            });
        }
    }
    Ok(())
}

fn category_key(category: &Category) -> (i64, String) {
    (category.id, category.name.clone())
}

/// Verify that a like grew the likes set by exactly one and preserved the id
pub fn verify_post_like(before: &Post, after: &Post) -> Result<()> {
    const ENTITY: &str = "Post";
    check_field(ENTITY, "postId", &before.post_id, &after.post_id)?;
    check_field(ENTITY, "likes.len", &(before.likes.len() + 1), &after.likes.len())
}

/// Same check for comments
pub fn verify_comment_like(before: &Comment, after: &Comment) -> Result<()> {
    const ENTITY: &str = "Comment";
    check_field(ENTITY, "commentId", &before.comment_id, &after.comment_id)?;
    check_field(ENTITY, "likes.len", &(before.likes.len() + 1), &after.likes.len())
}
