//! `/users` endpoints: the admin's user administration surface.

use serde::Serialize;
use store::TokenStore;

use crate::models::{Role, UserInfo};
use crate::{ApiClient, ApiError};

#[derive(Serialize)]
struct RoleBody {
    role: Role,
}

pub struct UserApi<S> {
    client: ApiClient<S>,
}

impl<S: TokenStore + Send + Sync> UserApi<S> {
    pub fn new(client: ApiClient<S>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<UserInfo>, ApiError> {
        self.client.get("/users").await
    }

    /// Promote or demote a user between member, club manager, and admin.
    pub async fn update_role(&self, id: &str, role: Role) -> Result<UserInfo, ApiError> {
        self.client
            .patch(&format!("/users/{id}/role"), &RoleBody { role })
            .await
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let _: serde_json::Value = self.client.delete(&format!("/users/{id}")).await?;
        Ok(())
    }
}
