//! Razorpay order-creation adapter. Only phase 1 of the payment contract
//! lives server-side; the charge itself runs in the gateway's own checkout
//! UI and reports back with a payment id.

use serde::Deserialize;
use serde_json::json;

use crate::domain::errors::DomainError;
use crate::domain::ports::{GatewayOrder, PaymentGateway};

const RAZORPAY_API_BASE: &str = "https://api.razorpay.com/v1";

/// Razorpay charges in paise.
pub fn to_minor_units(amount_rupees: i64) -> i64 {
    amount_rupees * 100
}

#[derive(Debug, Deserialize)]
struct RazorpayOrderResponse {
    id: String,
    amount: i64,
    currency: String,
}

pub struct RazorpayGateway {
    http: reqwest::Client,
    base_url: String,
    key_id: String,
    key_secret: String,
}

impl RazorpayGateway {
    pub fn new(key_id: String, key_secret: String) -> Self {
        Self::with_base_url(RAZORPAY_API_BASE.to_string(), key_id, key_secret)
    }

    /// Base URL override for tests.
    pub fn with_base_url(base_url: String, key_id: String, key_secret: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            key_id,
            key_secret,
        }
    }
}

impl PaymentGateway for RazorpayGateway {
    async fn create_order(
        &self,
        amount_rupees: i64,
        currency: &str,
        receipt: &str,
    ) -> Result<GatewayOrder, DomainError> {
        let resp = self
            .http
            .post(format!("{}/orders", self.base_url))
            .basic_auth(&self.key_id, Some(&self.key_secret))
            .json(&json!({
                "amount": to_minor_units(amount_rupees),
                "currency": currency,
                "receipt": receipt,
            }))
            .send()
            .await
            .map_err(|e| DomainError::Gateway(format!("razorpay unreachable: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(DomainError::Gateway(format!(
                "razorpay rejected order creation ({status}): {body}"
            )));
        }

        let order: RazorpayOrderResponse = resp
            .json()
            .await
            .map_err(|e| DomainError::Gateway(format!("invalid razorpay response: {e}")))?;

        Ok(GatewayOrder {
            gateway_order_id: order.id,
            amount: order.amount,
            currency: order.currency,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rupees_convert_to_paise() {
        assert_eq!(to_minor_units(0), 0);
        assert_eq!(to_minor_units(1), 100);
        assert_eq!(to_minor_units(468), 46_800);
    }

    #[tokio::test]
    async fn unreachable_gateway_is_a_gateway_error() {
        // Nothing listens on this port; the request must fail fast and map
        // to the retryable gateway error class.
        let gw = RazorpayGateway::with_base_url(
            "http://127.0.0.1:1".to_string(),
            "rzp_test_key".to_string(),
            "secret".to_string(),
        );
        let err = gw
            .create_order(468, "INR", "order_rcptid_1")
            .await
            .expect_err("request should fail");
        assert!(matches!(err, DomainError::Gateway(_)));
    }
}
