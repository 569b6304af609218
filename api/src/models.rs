//! # Wire types for the ClubHub backend
//!
//! The backend speaks camelCase JSON with Mongo-style `_id` keys, so every
//! struct here carries the serde renames to match. Records owned by the
//! backend ([`Club`], [`Event`], [`Membership`], [`Payment`], [`UserInfo`])
//! are read-only on the client; the `New*`/`*Update` structs are request
//! bodies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Application-level role, as stored in the backend directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Role {
    Admin,
    ClubManager,
    Member,
}

/// The application-level user record from the backend directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(rename = "photoURL", default)]
    pub photo_url: Option<String>,
    pub role: Role,
}

impl UserInfo {
    /// Get display name, falling back to email if name is empty.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.email
        } else {
            &self.name
        }
    }
}

/// Approval state of a club, driven by the admin workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClubStatus {
    Pending,
    Approved,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Club {
    #[serde(rename = "_id")]
    pub id: String,
    pub club_name: String,
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub banner_image: Option<String>,
    #[serde(default)]
    pub membership_fee: f64,
    #[serde(default)]
    pub member_count: u32,
    pub status: ClubStatus,
    pub manager_email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(rename = "_id")]
    pub id: String,
    pub club_id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub location: Option<String>,
    pub event_date: DateTime<Utc>,
    #[serde(default)]
    pub is_paid: bool,
    #[serde(default)]
    pub event_fee: f64,
    #[serde(default)]
    pub max_attendees: Option<u32>,
    #[serde(default)]
    pub current_attendees: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Membership {
    #[serde(rename = "_id")]
    pub id: String,
    pub club_id: String,
    pub user_email: String,
    pub status: String,
    #[serde(default)]
    pub payment_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// What a payment record paid for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentKind {
    Membership,
    Event,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    #[serde(rename = "_id")]
    pub id: String,
    pub user_email: String,
    #[serde(default)]
    pub club_id: Option<String>,
    #[serde(default)]
    pub event_id: Option<String>,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: PaymentKind,
    pub status: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Body for `POST /auth/register` — creates the directory record matching a
/// freshly created identity, or no-ops if one already exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    #[serde(rename = "photoURL")]
    pub photo_url: String,
    #[serde(rename = "federatedId")]
    pub federated_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewClub {
    pub club_name: String,
    pub description: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner_image: Option<String>,
    pub membership_fee: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub club_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub membership_fee: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEvent {
    pub club_id: String,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_date: Option<DateTime<Utc>>,
    pub is_paid: bool,
    pub event_fee: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_attendees: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_fee: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_attendees: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinClubRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipPaymentRequest {
    pub club_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPaymentRequest {
    pub event_id: String,
}

/// Confirms a processor-side payment against the backend record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmPaymentRequest {
    pub payment_intent_id: String,
}

/// Response to a payment-creation call: the processor's client secret plus
/// the backend's pending payment record id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntent {
    pub client_secret: String,
    #[serde(default)]
    pub payment_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_wire_names() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        assert_eq!(
            serde_json::to_string(&Role::ClubManager).unwrap(),
            "\"clubManager\""
        );
        assert_eq!(serde_json::to_string(&Role::Member).unwrap(), "\"member\"");
    }

    #[test]
    fn test_user_info_from_backend_json() {
        let user: UserInfo = serde_json::from_str(
            r#"{
                "id": "u-1",
                "name": "Ada",
                "email": "ada@example.com",
                "photoURL": "https://img.example.com/ada.png",
                "role": "clubManager"
            }"#,
        )
        .unwrap();
        assert_eq!(user.role, Role::ClubManager);
        assert_eq!(user.photo_url.as_deref(), Some("https://img.example.com/ada.png"));
        assert_eq!(user.display_name(), "Ada");
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let user = UserInfo {
            id: "u-2".into(),
            name: String::new(),
            email: "no-name@example.com".into(),
            photo_url: None,
            role: Role::Member,
        };
        assert_eq!(user.display_name(), "no-name@example.com");
    }

    #[test]
    fn test_club_uses_mongo_id_and_camel_case() {
        let club: Club = serde_json::from_str(
            r#"{
                "_id": "c-1",
                "clubName": "Chess Society",
                "description": "Weekly blitz",
                "category": "games",
                "membershipFee": 15.0,
                "memberCount": 42,
                "status": "approved",
                "managerEmail": "mgr@example.com"
            }"#,
        )
        .unwrap();
        assert_eq!(club.id, "c-1");
        assert_eq!(club.club_name, "Chess Society");
        assert_eq!(club.status, ClubStatus::Approved);
        assert!(club.banner_image.is_none());
    }

    #[test]
    fn test_payment_kind_rename() {
        let payment: Payment = serde_json::from_str(
            r#"{
                "_id": "p-1",
                "userEmail": "ada@example.com",
                "clubId": "c-1",
                "amount": 15.0,
                "type": "membership",
                "status": "succeeded"
            }"#,
        )
        .unwrap();
        assert_eq!(payment.kind, PaymentKind::Membership);
        assert!(payment.event_id.is_none());
    }

    #[test]
    fn test_update_bodies_skip_unset_fields() {
        let body = ClubUpdate {
            description: Some("New blurb".into()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"description":"New blurb"}"#
        );
    }
}
