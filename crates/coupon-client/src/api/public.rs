//! Public browse endpoints, no login required

use coupon_core::{Category, Coupon};
use coupon_shared::EntityId;

use crate::error::Result;
use crate::http::{ApiClient, ApiRequest};

pub struct PublicApi<'a> {
    client: &'a ApiClient,
}

impl<'a> PublicApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn coupons(&self) -> Result<Vec<Coupon>> {
        self.client.fetch(ApiRequest::get("public/coupons")).await
    }

    pub async fn coupon(&self, id: EntityId) -> Result<Coupon> {
        self.client.fetch(ApiRequest::get(format!("public/coupons/{}", id))).await
    }

    pub async fn coupons_by_category(&self, category: Category) -> Result<Vec<Coupon>> {
        let request = ApiRequest::get("public/coupons").query("category", category);
        self.client.fetch(request).await
    }

    pub async fn coupons_by_max_price(&self, max_price: f64) -> Result<Vec<Coupon>> {
        let request = ApiRequest::get("public/coupons").query("maxPrice", max_price);
        self.client.fetch(request).await
    }

    pub async fn categories(&self) -> Result<Vec<Category>> {
        self.client.fetch(ApiRequest::get("public/categories")).await
    }
}
