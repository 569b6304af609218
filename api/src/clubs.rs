//! `/clubs` endpoints: browsing, manager CRUD, and the admin approval flow.

use serde::Serialize;
use store::TokenStore;

use crate::models::{Club, ClubStatus, ClubUpdate, NewClub};
use crate::{ApiClient, ApiError};

/// Filters for the public club listing and the admin view.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ClubQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ClubStatus>,
}

#[derive(Serialize)]
struct StatusBody {
    status: ClubStatus,
}

pub struct ClubApi<S> {
    client: ApiClient<S>,
}

impl<S: TokenStore + Send + Sync> ClubApi<S> {
    pub fn new(client: ApiClient<S>) -> Self {
        Self { client }
    }

    pub async fn list(&self, query: &ClubQuery) -> Result<Vec<Club>, ApiError> {
        self.client.get_query("/clubs", query).await
    }

    pub async fn featured(&self) -> Result<Vec<Club>, ApiError> {
        self.client.get("/clubs/featured").await
    }

    pub async fn get(&self, id: &str) -> Result<Club, ApiError> {
        self.client.get(&format!("/clubs/{id}")).await
    }

    pub async fn create(&self, club: &NewClub) -> Result<Club, ApiError> {
        self.client.post("/clubs", club).await
    }

    pub async fn update(&self, id: &str, update: &ClubUpdate) -> Result<Club, ApiError> {
        self.client.put(&format!("/clubs/{id}"), update).await
    }

    /// Clubs managed by the signed-in club manager.
    pub async fn my_clubs(&self) -> Result<Vec<Club>, ApiError> {
        self.client.get("/clubs/manager/my-clubs").await
    }

    /// Every club regardless of approval status (admin only).
    pub async fn all_for_admin(&self, query: &ClubQuery) -> Result<Vec<Club>, ApiError> {
        self.client.get_query("/clubs/admin/all", query).await
    }

    /// Admin approval workflow: move a club to approved/rejected/pending.
    pub async fn update_status(&self, id: &str, status: ClubStatus) -> Result<Club, ApiError> {
        self.client
            .patch(&format!("/clubs/{id}/status"), &StatusBody { status })
            .await
    }
}
