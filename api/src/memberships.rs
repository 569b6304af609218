//! `/memberships` endpoints: joining clubs and listing members.

use store::TokenStore;

use crate::models::{JoinClubRequest, Membership};
use crate::{ApiClient, ApiError};

pub struct MembershipApi<S> {
    client: ApiClient<S>,
}

impl<S: TokenStore + Send + Sync> MembershipApi<S> {
    pub fn new(client: ApiClient<S>) -> Self {
        Self { client }
    }

    /// Join a club, optionally referencing the payment that covered the fee.
    pub async fn join(
        &self,
        club_id: &str,
        request: &JoinClubRequest,
    ) -> Result<Membership, ApiError> {
        self.client
            .post(&format!("/memberships/join/{club_id}"), request)
            .await
    }

    pub async fn my_memberships(&self) -> Result<Vec<Membership>, ApiError> {
        self.client.get("/memberships/my-memberships").await
    }

    /// Members of a club (club manager view).
    pub async fn club_members(&self, club_id: &str) -> Result<Vec<Membership>, ApiError> {
        self.client
            .get(&format!("/memberships/club/{club_id}"))
            .await
    }
}
