//! Shared scenario plumbing
//!
//! Live scenarios need a reachable service; they skip cleanly when
//! `AGORA_BASE_URL` is unset so the suite stays runnable offline.

use std::sync::Once;

use agora_harness::{ApiClient, HarnessConfig, Result, Role, StoreHandle, User};

/// Client against the live service, or `None` to skip the scenario
pub fn live() -> Option<ApiClient> {
    if std::env::var("AGORA_BASE_URL").is_err() {
        eprintln!("skipping live scenario: AGORA_BASE_URL not set");
        return None;
    }
    init_tracing();
    Some(ApiClient::new(HarnessConfig::from_env()))
}

fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}

/// Global admin fixture for a scenario: registered up front, used to
/// disable the scenario's identities on the way out; teardown disables
/// the admin itself last
#[allow(dead_code)]
pub async fn register_admin(api: &ApiClient) -> Result<User> {
    api.register_user(Role::Admin).await
}

/// Backing-store handle, or `None` to skip the scenario
#[allow(dead_code)]
pub async fn live_store() -> Result<Option<StoreHandle>> {
    let database_url = match std::env::var("AGORA_DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            eprintln!("skipping store scenario: AGORA_DATABASE_URL not set");
            return Ok(None);
        }
    };
    init_tracing();
    Ok(Some(StoreHandle::connect(&database_url).await?))
}
