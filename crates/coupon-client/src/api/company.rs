//! Company endpoints: own details and coupon catalogue

use validator::Validate;

use coupon_core::{Category, Company, Coupon, CouponPayload};
use coupon_shared::EntityId;

use crate::error::Result;
use crate::http::{ApiClient, ApiRequest};

pub struct CompanyApi<'a> {
    client: &'a ApiClient,
}

impl<'a> CompanyApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn details(&self) -> Result<Company> {
        self.client.fetch(ApiRequest::get("company/details")).await
    }

    pub async fn coupons(&self) -> Result<Vec<Coupon>> {
        self.client.fetch(ApiRequest::get("company/coupons")).await
    }

    pub async fn coupons_by_category(&self, category: Category) -> Result<Vec<Coupon>> {
        let request = ApiRequest::get("company/coupons").query("category", category);
        self.client.fetch(request).await
    }

    pub async fn coupons_by_max_price(&self, max_price: f64) -> Result<Vec<Coupon>> {
        let request = ApiRequest::get("company/coupons").query("maxPrice", max_price);
        self.client.fetch(request).await
    }

    pub async fn create_coupon(&self, payload: &CouponPayload) -> Result<Coupon> {
        payload.validate()?;
        let request = ApiRequest::post("company/coupons").json(payload)?;
        self.client.fetch(request).await
    }

    pub async fn update_coupon(&self, id: EntityId, payload: &CouponPayload) -> Result<Coupon> {
        payload.validate()?;
        let request = ApiRequest::put(format!("company/coupons/{}", id)).json(payload)?;
        self.client.fetch(request).await
    }

    pub async fn delete_coupon(&self, id: EntityId) -> Result<()> {
        self.client.execute(ApiRequest::delete(format!("company/coupons/{}", id))).await
    }
}
