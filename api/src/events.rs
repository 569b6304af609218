//! `/events` endpoints: browsing and manager CRUD.

use serde::Serialize;
use store::TokenStore;

use crate::models::{Event, EventUpdate, NewEvent};
use crate::{ApiClient, ApiError};

/// Filters for the public event listing.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub club_id: Option<String>,
}

pub struct EventApi<S> {
    client: ApiClient<S>,
}

impl<S: TokenStore + Send + Sync> EventApi<S> {
    pub fn new(client: ApiClient<S>) -> Self {
        Self { client }
    }

    pub async fn list(&self, query: &EventQuery) -> Result<Vec<Event>, ApiError> {
        self.client.get_query("/events", query).await
    }

    pub async fn upcoming(&self) -> Result<Vec<Event>, ApiError> {
        self.client.get("/events/upcoming").await
    }

    pub async fn get(&self, id: &str) -> Result<Event, ApiError> {
        self.client.get(&format!("/events/{id}")).await
    }

    pub async fn create(&self, event: &NewEvent) -> Result<Event, ApiError> {
        self.client.post("/events", event).await
    }

    pub async fn update(&self, id: &str, update: &EventUpdate) -> Result<Event, ApiError> {
        self.client.put(&format!("/events/{id}"), update).await
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let _: serde_json::Value = self.client.delete(&format!("/events/{id}")).await?;
        Ok(())
    }

    /// Events belonging to clubs the signed-in manager runs.
    pub async fn my_events(&self) -> Result<Vec<Event>, ApiError> {
        self.client.get("/events/manager/my-events").await
    }
}
