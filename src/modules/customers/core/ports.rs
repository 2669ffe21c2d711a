use async_trait::async_trait;

use crate::modules::customers::core::customer::{Customer, NewCustomer};
use crate::shared::infrastructure::unit_of_work::StoreError;

#[async_trait]
pub trait CustomerRepository: Send + Sync {
    async fn find_customer(&self, id: i64) -> Result<Option<Customer>, StoreError>;
    async fn list_customers(&self) -> Result<Vec<Customer>, StoreError>;
    async fn insert_customer(&mut self, customer: NewCustomer) -> Result<Customer, StoreError>;
    async fn delete_customer(&mut self, id: i64) -> Result<(), StoreError>;
}
