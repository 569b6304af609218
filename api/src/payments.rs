//! `/payments` endpoints: creating processor payment intents, confirming
//! them against the backend record, and payment history.

use store::TokenStore;

use crate::models::{
    ConfirmPaymentRequest, EventPaymentRequest, MembershipPaymentRequest, Payment, PaymentIntent,
};
use crate::{ApiClient, ApiError};

pub struct PaymentApi<S> {
    client: ApiClient<S>,
}

impl<S: TokenStore + Send + Sync> PaymentApi<S> {
    pub fn new(client: ApiClient<S>) -> Self {
        Self { client }
    }

    /// Start a membership-fee payment; the returned client secret is handed
    /// to the payment processor's capture flow.
    pub async fn create_membership_payment(
        &self,
        request: &MembershipPaymentRequest,
    ) -> Result<PaymentIntent, ApiError> {
        self.client
            .post("/payments/create-membership-payment", request)
            .await
    }

    /// Start an event-fee payment.
    pub async fn create_event_payment(
        &self,
        request: &EventPaymentRequest,
    ) -> Result<PaymentIntent, ApiError> {
        self.client
            .post("/payments/create-event-payment", request)
            .await
    }

    /// Tell the backend a processor-side capture succeeded.
    pub async fn confirm_payment(
        &self,
        request: &ConfirmPaymentRequest,
    ) -> Result<Payment, ApiError> {
        self.client.post("/payments/confirm-payment", request).await
    }

    pub async fn my_payments(&self) -> Result<Vec<Payment>, ApiError> {
        self.client.get("/payments/my-payments").await
    }

    /// Every payment record on the platform (admin only).
    pub async fn all_payments(&self) -> Result<Vec<Payment>, ApiError> {
        self.client.get("/payments/admin/all").await
    }
}
