//! Customer endpoints: purchases and own details

use coupon_core::{Category, Coupon, Customer};
use coupon_shared::EntityId;

use crate::error::Result;
use crate::http::{ApiClient, ApiRequest};

pub struct CustomerApi<'a> {
    client: &'a ApiClient,
}

impl<'a> CustomerApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn details(&self) -> Result<Customer> {
        self.client.fetch(ApiRequest::get("customer/details")).await
    }

    /// Stock and expiry are checked by the backend; a rejected purchase comes
    /// back as an API error.
    pub async fn purchase_coupon(&self, coupon_id: EntityId) -> Result<()> {
        let request = ApiRequest::post(format!("customer/coupons/{}/purchase", coupon_id));
        self.client.execute(request).await
    }

    pub async fn coupons(&self) -> Result<Vec<Coupon>> {
        self.client.fetch(ApiRequest::get("customer/coupons")).await
    }

    pub async fn coupons_by_category(&self, category: Category) -> Result<Vec<Coupon>> {
        let request = ApiRequest::get("customer/coupons").query("category", category);
        self.client.fetch(request).await
    }

    pub async fn coupons_by_max_price(&self, max_price: f64) -> Result<Vec<Coupon>> {
        let request = ApiRequest::get("customer/coupons").query("maxPrice", max_price);
        self.client.fetch(request).await
    }
}
