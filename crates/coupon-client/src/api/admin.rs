//! Administrator endpoints: company and customer management

use validator::Validate;

use coupon_core::{Company, CompanyPayload, Customer, CustomerPayload};
use coupon_shared::EntityId;

use crate::error::Result;
use crate::http::{ApiClient, ApiRequest};

pub struct AdminApi<'a> {
    client: &'a ApiClient,
}

impl<'a> AdminApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn companies(&self) -> Result<Vec<Company>> {
        self.client.fetch(ApiRequest::get("admin/companies")).await
    }

    pub async fn company(&self, id: EntityId) -> Result<Company> {
        self.client.fetch(ApiRequest::get(format!("admin/companies/{}", id))).await
    }

    pub async fn create_company(&self, payload: &CompanyPayload) -> Result<Company> {
        payload.validate()?;
        let request = ApiRequest::post("admin/companies").json(payload)?;
        self.client.fetch(request).await
    }

    pub async fn update_company(&self, id: EntityId, payload: &CompanyPayload) -> Result<Company> {
        payload.validate()?;
        let request = ApiRequest::put(format!("admin/companies/{}", id)).json(payload)?;
        self.client.fetch(request).await
    }

    pub async fn delete_company(&self, id: EntityId) -> Result<()> {
        self.client.execute(ApiRequest::delete(format!("admin/companies/{}", id))).await
    }

    pub async fn customers(&self) -> Result<Vec<Customer>> {
        self.client.fetch(ApiRequest::get("admin/customers")).await
    }

    pub async fn customer(&self, id: EntityId) -> Result<Customer> {
        self.client.fetch(ApiRequest::get(format!("admin/customers/{}", id))).await
    }

    pub async fn create_customer(&self, payload: &CustomerPayload) -> Result<Customer> {
        payload.validate()?;
        let request = ApiRequest::post("admin/customers").json(payload)?;
        self.client.fetch(request).await
    }

    pub async fn update_customer(&self, id: EntityId, payload: &CustomerPayload) -> Result<Customer> {
        payload.validate()?;
        let request = ApiRequest::put(format!("admin/customers/{}", id)).json(payload)?;
        self.client.fetch(request).await
    }

    pub async fn delete_customer(&self, id: EntityId) -> Result<()> {
        self.client.execute(ApiRequest::delete(format!("admin/customers/{}", id))).await
    }
}
