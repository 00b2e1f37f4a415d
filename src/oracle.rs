//! Search oracle
//!
//! The second, divergent read path: a paginated, filterable query against
//! the service's search index, used as an independent source of truth for
//! cross-validation. The harness always asks for all matches in one de
//! facto unpaginated page and linear-scans for a target id; absence of a
//! match is a normal `None`, not an error.

use serde::Serialize;
use tracing::debug;

use crate::client::ApiClient;
use crate::endpoints;
use crate::error::Result;
use crate::types::UserSearchHit;

/// Page size large enough to make a single page cover every match
pub const SINGLE_PAGE_SIZE: u32 = 1_000_000;

/// Typed search body sent to the index endpoint
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPage {
    pub index: u32,
    pub next: bool,
    pub search_param1: String,
    pub search_param2: String,
    pub size: u32,
}

impl SearchPage {
    /// A single page holding every match for one free-text filter term
    pub fn single(filter: &str) -> Self {
        Self {
            index: 0,
            next: true,
            search_param1: String::new(),
            search_param2: filter.to_string(),
            size: SINGLE_PAGE_SIZE,
        }
    }
}

/// Index-backed read path over an [`ApiClient`]
pub struct SearchOracle<'a> {
    api: &'a ApiClient,
}

impl<'a> SearchOracle<'a> {
    pub(crate) fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// All index hits for a free-text filter term
    pub async fn search_users(&self, filter: &str) -> Result<Vec<UserSearchHit>> {
        let response = self
            .api
            .anonymous()
            .post(self.api.api_url(endpoints::SEARCH_USERS))
            .json(&SearchPage::single(filter))
            .send()
            .await?;

        let hits: Vec<UserSearchHit> = self.api.decode("search users", response).await?;
        debug!(filter, hits = hits.len(), "searched user index");
        Ok(hits)
    }

    /// Linear-scan the single result page for a target id
    pub async fn find_user(&self, user_id: i64, filter: &str) -> Result<Option<UserSearchHit>> {
        let hits = self.search_users(filter).await?;
        Ok(hits.into_iter().find(|hit| hit.user_id == user_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_page_asks_for_everything_at_once() {
        let page = SearchPage::single("Mira");
        assert_eq!(page.index, 0);
        assert!(page.next);
        assert_eq!(page.size, SINGLE_PAGE_SIZE);
        assert_eq!(page.search_param2, "Mira");

        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["searchParam1"], "");
        assert_eq!(json["searchParam2"], "Mira");
        assert_eq!(json["size"], 1_000_000);
        assert_eq!(json["next"], true);
    }
}
