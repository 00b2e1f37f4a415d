//! Identity, profile and admin-status operations

use reqwest::StatusCode;
use tracing::info;

use crate::auth::Credentials;
use crate::client::ApiClient;
use crate::endpoints;
use crate::error::{HarnessError, Result};
use crate::fixtures;
use crate::types::{
    Category, City, ExpertiseProfile, Location, PersonalProfile, RegisterUserRequest, Role, Skill,
    User, UserById,
};
use crate::validate::{verify_expertise_profile, verify_personal_profile};

/// Recover the assigned id from the plain-text registration confirmation
///
/// The service confirms registration with a sentence, not structured JSON;
/// this is the one scraping adapter for it. Everything that is not a digit
/// is stripped and the remainder parsed; a sentence with no digits is a
/// contract violation.
fn scrape_user_id(confirmation: &str) -> Result<i64> {
    let digits: String = confirmation.chars().filter(char::is_ascii_digit).collect();
    digits
        .parse()
        .map_err(|_| HarnessError::Confirmation(format!("no user id in {:?}", confirmation)))
}

/// The exact confirmation sentence the service documents for registration
fn register_confirmation(username: &str, user_id: i64) -> String {
    format!("User with name {} and id {} was created", username, user_id)
}

impl ApiClient {
    /// Register a fully provisioned identity
    ///
    /// Synthesizes unique credentials, submits the registration document
    /// with the requested authority set and the "All" category, recovers
    /// the assigned id from the confirmation sentence, then provisions the
    /// identity: direct read for canonical fields, a generated first name
    /// via a profile edit, and a search-index resolve for the expertise
    /// profile and account flags. On success the returned identity is
    /// never partially constructed.
    pub async fn register_user(&self, role: Role) -> Result<User> {
        let email = fixtures::email();
        let password = fixtures::password();
        let username = fixtures::username(role);

        let request = RegisterUserRequest {
            authorities: role.authorities(),
            category: Category::all(),
            confirm_password: password.clone(),
            email: email.clone(),
            password: password.clone(),
            username: username.clone(),
        };

        let response = self
            .anonymous()
            .post(self.api_url(endpoints::REGISTER_USER))
            .json(&request)
            .send()
            .await?;
        self.expect_status("register user", StatusCode::OK, &response)?;

        let confirmation = response.text().await?;
        let user_id = scrape_user_id(&confirmation)?;
        let expected = register_confirmation(&username, user_id);
        if confirmation != expected {
            return Err(HarnessError::Confirmation(format!(
                "got {:?}, want {:?}",
                confirmation, expected
            )));
        }
        info!(username = %username, user_id, "registered user");

        let credentials = Credentials::new(username.clone(), password.clone());
        let by_id = self.get_user_by_id(&username, user_id).await?;

        let first_name = fixtures::first_name();
        let personal_profile = self.set_first_name(&credentials, user_id, &first_name).await?;

        let hit = self
            .oracle()
            .find_user(user_id, &first_name)
            .await?
            .ok_or_else(|| {
                HarnessError::NotFound(format!("user {} in the search index", user_id))
            })?;
        let expertise_profile = hit.expertise_profile.ok_or_else(|| {
            HarnessError::NotFound(format!("expertise profile of user {}", user_id))
        })?;
        if expertise_profile.category.is_none() {
            return Err(HarnessError::NotFound(format!(
                "professional category of user {}",
                user_id
            )));
        }

        Ok(User {
            id: user_id,
            username: by_id.username,
            password,
            email: by_id.email,
            personal_profile,
            expertise_profile,
            authorities: by_id.authorities.into_iter().map(|a| a.authority).collect(),
            enabled: hit.enabled,
            account_non_expired: hit.account_non_expired,
            account_non_locked: hit.account_non_locked,
            credentials_non_expired: hit.credentials_non_expired,
        })
    }

    /// Direct read of an identity by id
    pub async fn get_user_by_id(&self, principal: &str, user_id: i64) -> Result<UserById> {
        let url = format!(
            "{}?principal={}",
            self.api_url(&endpoints::user_by_id(user_id)),
            urlencoding::encode(principal)
        );

        let response = self.anonymous().get(&url).send().await?;
        self.decode("get user by id", response).await
    }

    /// Partial profile edit that only sets the first name
    ///
    /// Used during provisioning, before a full `User` exists.
    pub async fn set_first_name(
        &self,
        credentials: &Credentials,
        user_id: i64,
        first_name: &str,
    ) -> Result<PersonalProfile> {
        let body = PersonalProfile {
            first_name: Some(first_name.to_string()),
            ..PersonalProfile::default()
        };

        let client = self.login(&credentials.context()).await?;
        let response = client
            .post(self.api_url(&endpoints::personal_profile(user_id)))
            .json(&body)
            .send()
            .await?;
        let written: PersonalProfile = self.decode("set first name", response).await?;

        if written.first_name.as_deref() != Some(first_name) {
            return Err(HarnessError::Mismatch {
                entity: "PersonalProfile",
                field: "firstName",
                expected: format!("{:?}", first_name),
                actual: format!("{:?}", written.first_name),
            });
        }

        info!(user_id, first_name, "set first name");
        Ok(written)
    }

    /// Full-document personal profile replace
    ///
    /// Recomputes the expected document locally, performs the write, then
    /// re-reads by id and verifies the re-read document field for field.
    pub async fn edit_personal_profile(&self, user: &mut User) -> Result<PersonalProfile> {
        let expected = PersonalProfile {
            id: Some(user.id),
            first_name: user.personal_profile.first_name.clone(),
            last_name: Some(fixtures::last_name()),
            birth_year: Some(fixtures::birth_date()),
            location: Location {
                city: City {
                    id: None,
                    city: Some(fixtures::city()),
                },
            },
            personal_review: Some(fixtures::personal_review()),
            picture: Some(fixtures::picture_url()),
            picture_privacy: Some(true),
            sex: Some("MALE".to_string()),
        };

        let client = self.login(&user.context()).await?;
        let response = client
            .post(self.api_url(&endpoints::personal_profile(user.id)))
            .json(&expected)
            .send()
            .await?;
        let written: PersonalProfile = self.decode("edit personal profile", response).await?;

        // Second view: direct read by id, compared field for field
        let reread = self.get_user_by_id(&user.username, user.id).await?;
        let direct = reread.personal_profile.ok_or_else(|| {
            HarnessError::NotFound(format!("personal profile of user {}", user.id))
        })?;
        verify_personal_profile(&expected, &direct)?;

        info!(user_id = user.id, "edited personal profile");
        user.personal_profile = written;
        Ok(user.personal_profile.clone())
    }

    /// Expertise profile replace: exactly 5 generated skills, one
    /// availability value and the fixed "All" category
    ///
    /// Post-write validation goes through the search index, not the direct
    /// read — expertise data is only guaranteed discoverable there.
    pub async fn edit_expertise_profile(&self, user: &mut User) -> Result<ExpertiseProfile> {
        let expected = ExpertiseProfile {
            id: None,
            availability: 8,
            category: Some(Category::all()),
            skills: (0..5).map(|_| Skill::named(fixtures::skill_name())).collect(),
        };

        let client = self.login(&user.context()).await?;
        let response = client
            .post(self.api_url(&endpoints::expertise_profile(user.id)))
            .json(&expected)
            .send()
            .await?;
        let written: ExpertiseProfile = self.decode("edit expertise profile", response).await?;

        let hit = self
            .oracle()
            .find_user(user.id, user.first_name())
            .await?
            .ok_or_else(|| {
                HarnessError::NotFound(format!("user {} in the search index", user.id))
            })?;
        let indexed = hit.expertise_profile.ok_or_else(|| {
            HarnessError::NotFound(format!("expertise profile of user {}", user.id))
        })?;
        verify_expertise_profile(&expected, &indexed)?;

        info!(user_id = user.id, "edited expertise profile");
        user.expertise_profile = written.clone();
        Ok(written)
    }

    /// Disable an identity (the soft, preferred teardown path)
    pub async fn disable_user(&self, admin: &User, user_id: i64) -> Result<()> {
        self.set_user_enabled(admin, user_id, false).await
    }

    /// Re-enable a disabled identity
    pub async fn enable_user(&self, admin: &User, user_id: i64) -> Result<()> {
        self.set_user_enabled(admin, user_id, true).await
    }

    async fn set_user_enabled(&self, admin: &User, user_id: i64, enable: bool) -> Result<()> {
        let url = format!(
            "{}?userId={}",
            self.base_url(endpoints::ADMIN_USER_STATUS),
            user_id
        );

        let client = self.login(&admin.context()).await?;
        let response = client
            .post(&url)
            .form(&[("enable", if enable { "true" } else { "false" })])
            .send()
            .await?;
        // The admin endpoint answers with a redirect, not a plain 200
        self.expect_status("admin user status", StatusCode::FOUND, &response)?;

        info!(user_id, enable, "changed account enabled flag");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrapes_the_id_out_of_the_confirmation_sentence() {
        let confirmation = "User with name userAbCdEf and id 1367 was created";
        assert_eq!(scrape_user_id(confirmation).unwrap(), 1367);
    }

    #[test]
    fn scrape_concatenates_all_digits() {
        // Digits in the username are scraped too; the round-trip check
        // against the reconstructed sentence is what catches that case.
        assert_eq!(
            scrape_user_id("User with name user42 and id 7 was created").unwrap(),
            427
        );
    }

    #[test]
    fn digitless_confirmation_is_a_contract_violation() {
        let err = scrape_user_id("something went wrong").unwrap_err();
        assert!(matches!(err, HarnessError::Confirmation(_)));
    }

    #[test]
    fn confirmation_round_trip() {
        let sentence = register_confirmation("userXyz", 77);
        assert_eq!(sentence, "User with name userXyz and id 77 was created");
        assert_eq!(scrape_user_id(&sentence).unwrap(), 77);
    }
}
