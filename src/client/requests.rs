//! Connection-request controller

use reqwest::StatusCode;
use tracing::info;

use crate::client::ApiClient;
use crate::endpoints;
use crate::error::{HarnessError, Result};
use crate::types::{
    ConnectionRequest, DisconnectProbe, NewConnectionRequest, RequestHit, RequestState, User,
};

/// The confirmation sentence documented for a sent request
fn send_confirmation(sender: &str, receiver: &str) -> String {
    format!("{} send friend request to {}", sender, receiver)
}

impl ApiClient {
    /// Send a connection request from `sender` to `receiver`
    ///
    /// The service confirms with a plain-text sentence; the new request's
    /// id and timestamp are then recovered from the receiver's
    /// pending-request listing.
    pub async fn send_request(&self, sender: &User, receiver: &User) -> Result<ConnectionRequest> {
        let body = NewConnectionRequest {
            id: receiver.id,
            username: receiver.username.clone(),
        };

        let client = self.login(&sender.context()).await?;
        let response = client
            .post(self.api_url(endpoints::SEND_REQUEST))
            .json(&body)
            .send()
            .await?;
        self.expect_status("send request", StatusCode::OK, &response)?;

        let confirmation = response.text().await?;
        let expected = send_confirmation(&sender.username, &receiver.username);
        if confirmation != expected {
            return Err(HarnessError::Confirmation(format!(
                "got {:?}, want {:?}",
                confirmation, expected
            )));
        }

        // Recover id and timestamp through the receiver's pending listing
        let hits = self.user_requests(receiver).await?;
        let hit = hits
            .into_iter()
            .filter(|hit| match &hit.sender {
                Some(actor) => actor.id == sender.id,
                // Projections without sender info can only be matched by
                // recency; keep them as candidates.
                None => true,
            })
            .max_by_key(|hit| hit.id)
            .ok_or_else(|| {
                HarnessError::NotFound(format!(
                    "request from {} in the pending listing of {}",
                    sender.username, receiver.username
                ))
            })?;

        info!(
            request_id = hit.id,
            sender = %sender.username,
            receiver = %receiver.username,
            "sent connection request"
        );

        Ok(ConnectionRequest {
            id: hit.id,
            sender_id: sender.id,
            receiver_id: receiver.id,
            time_stamp: hit.time_stamp,
            state: RequestState::Pending,
        })
    }

    /// The receiver's pending-request listing
    pub async fn user_requests(&self, receiver: &User) -> Result<Vec<RequestHit>> {
        let client = self.login(&receiver.context()).await?;
        let response = client
            .get(self.api_url(&endpoints::user_requests(receiver.id)))
            .send()
            .await?;
        self.decode("user requests", response).await
    }

    /// Approve a pending request; only the receiver can do this
    pub async fn approve_request(
        &self,
        receiver: &User,
        request: &mut ConnectionRequest,
    ) -> Result<()> {
        let url = format!(
            "{}?requestId={}",
            self.api_url(&endpoints::approve_request(receiver.id)),
            request.id
        );

        let client = self.login(&receiver.context()).await?;
        let response = client.post(&url).send().await?;
        self.expect_status("approve request", StatusCode::OK, &response)?;

        request.state = RequestState::Approved;
        info!(request_id = request.id, "approved connection request");
        Ok(())
    }

    /// Two-step connect: send, then immediately approve
    ///
    /// No retry on either step; a failure anywhere aborts.
    pub async fn connect(&self, sender: &User, receiver: &User) -> Result<ConnectionRequest> {
        let mut request = self.send_request(sender, receiver).await?;
        self.approve_request(receiver, &mut request).await?;
        Ok(request)
    }

    /// Probe disconnect behavior on an already-connected pair
    ///
    /// The service exposes no distinct disconnect endpoint; re-sending a
    /// request is the observed probe. The resulting transition is
    /// ambiguous, so the raw status and body are reported for the caller
    /// to record against the live service.
    pub async fn disconnect_probe(&self, sender: &User, receiver: &User) -> Result<DisconnectProbe> {
        let body = NewConnectionRequest {
            id: receiver.id,
            username: receiver.username.clone(),
        };

        let client = self.login(&sender.context()).await?;
        let response = client
            .post(self.api_url(endpoints::SEND_REQUEST))
            .json(&body)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        info!(status, "disconnect probe");
        Ok(DisconnectProbe { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn send_confirmation_matches_the_documented_sentence() {
        assert_eq!(
            send_confirmation("userAb", "userCd"),
            "userAb send friend request to userCd"
        );
    }
}
