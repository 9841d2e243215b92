use tracing::{info, instrument};
use uuid::Uuid;

use mindmeter_core::Result;

use crate::client::ApiClient;

use super::model::{CreateOrderRequest, Order, PricingPlan};

pub struct PaymentService;

impl PaymentService {
    /// Lists pricing plans. Public; works without a session.
    #[instrument(skip(client))]
    pub async fn plans(client: &ApiClient) -> Result<Vec<PricingPlan>> {
        client.get_json("/api/payment/plans").await
    }

    #[instrument(skip(client))]
    pub async fn create_order(client: &ApiClient, plan_id: Uuid) -> Result<Order> {
        let order: Order = client
            .post_json("/api/payment/orders", &CreateOrderRequest { plan_id })
            .await?;
        info!(order_id = %order.id, "Created order");
        Ok(order)
    }

    /// Polls an order. Callers sequence their own polling; the client does
    /// not retry or wait.
    #[instrument(skip(client))]
    pub async fn order(client: &ApiClient, order_id: Uuid) -> Result<Order> {
        client
            .get_json(&format!("/api/payment/orders/{order_id}"))
            .await
    }
}
