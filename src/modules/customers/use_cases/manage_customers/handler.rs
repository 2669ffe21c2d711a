use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use crate::modules::customers::core::customer::{Customer, NewCustomer};
use crate::modules::customers::core::ports::CustomerRepository;
use crate::modules::customers::use_cases::manage_customers::command::CreateCustomer;
use crate::modules::projects::core::ports::ProjectRepository;
use crate::modules::time_entries::core::ports::TimeEntryRepository;
use crate::modules::time_entries::core::time_entry::TimeEntryFilter;
use crate::shared::application::errors::ApplicationError;
use crate::shared::infrastructure::unit_of_work::{Store, UnitOfWork};

pub struct ManageCustomersHandler<TStore>
where
    TStore: Store,
{
    store: Arc<TStore>,
}

impl<TStore> ManageCustomersHandler<TStore>
where
    TStore: Store,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn create(&self, command: CreateCustomer) -> Result<Customer, ApplicationError> {
        let mut uow = self.store.begin().await?;
        let customer = uow
            .insert_customer(NewCustomer {
                firm: command.firm,
                contact_person: command.contact_person,
                address: command.address,
                postal_code: command.postal_code,
                city: command.city,
                email: command.email,
                phone: command.phone,
                default_hourly_rate: command.default_hourly_rate,
                created_at: Utc::now(),
            })
            .await?;
        uow.commit().await?;

        info!(customer_id = customer.id, firm = %customer.firm, "customer created");
        Ok(customer)
    }

    pub async fn list(&self) -> Result<Vec<Customer>, ApplicationError> {
        let uow = self.store.begin().await?;
        let mut customers = uow.list_customers().await?;
        customers.sort_by_key(|customer| customer.id);
        Ok(customers)
    }

    /// Refuses while any project or time entry still points at the customer.
    pub async fn delete(&self, customer_id: i64) -> Result<(), ApplicationError> {
        let mut uow = self.store.begin().await?;
        if uow.find_customer(customer_id).await?.is_none() {
            return Err(ApplicationError::not_found("customer", customer_id));
        }

        let has_projects = uow
            .list_projects()
            .await?
            .iter()
            .any(|project| project.customer_id == customer_id);
        if has_projects {
            return Err(ApplicationError::InUse(format!(
                "customer {customer_id} still has projects"
            )));
        }
        let filter = TimeEntryFilter {
            customer_id: Some(customer_id),
            ..TimeEntryFilter::default()
        };
        if !uow.list_time_entries(&filter).await?.is_empty() {
            return Err(ApplicationError::InUse(format!(
                "customer {customer_id} still has time entries"
            )));
        }

        uow.delete_customer(customer_id).await?;
        uow.commit().await?;

        info!(customer_id, "customer deleted");
        Ok(())
    }
}

#[cfg(test)]
mod manage_customers_handler_tests {
    use super::*;
    use crate::modules::projects::core::project::{NewProject, ProjectStatus};
    use crate::shared::infrastructure::unit_of_work::in_memory::InMemoryStore;
    use crate::tests::fixtures::time_entries::make_new_time_entry;
    use rstest::{fixture, rstest};

    type BeforeEachReturn = (Arc<InMemoryStore>, ManageCustomersHandler<InMemoryStore>);

    #[fixture]
    fn before_each() -> BeforeEachReturn {
        let store = Arc::new(InMemoryStore::new());
        let handler = ManageCustomersHandler::new(store.clone());
        (store, handler)
    }

    fn create(firm: &str) -> CreateCustomer {
        serde_json::from_value(serde_json::json!({ "firm": firm })).unwrap()
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_create_and_list_customers(before_each: BeforeEachReturn) {
        let (_, handler) = before_each;
        handler.create(create("Acme AG")).await.expect("create failed");
        handler.create(create("Beta GmbH")).await.expect("create failed");

        let firms: Vec<String> = handler
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|customer| customer.firm)
            .collect();

        assert_eq!(firms, vec!["Acme AG", "Beta GmbH"]);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_delete_an_unreferenced_customer(before_each: BeforeEachReturn) {
        let (_, handler) = before_each;
        let customer = handler.create(create("Acme AG")).await.unwrap();

        handler.delete(customer.id).await.expect("delete failed");

        assert!(handler.list().await.unwrap().is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_to_delete_a_missing_customer(before_each: BeforeEachReturn) {
        let (_, handler) = before_each;
        assert_eq!(
            handler.delete(3).await,
            Err(ApplicationError::not_found("customer", 3))
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_refuse_to_delete_a_customer_with_projects(before_each: BeforeEachReturn) {
        let (store, handler) = before_each;
        let customer = handler.create(create("Acme AG")).await.unwrap();
        let mut uow = store.begin().await.unwrap();
        uow.insert_project(NewProject {
            customer_id: customer.id,
            title: "Steuerung".into(),
            description: None,
            is_quote: false,
            hourly_rate: None,
            status: ProjectStatus::Open,
        })
        .await
        .unwrap();
        uow.commit().await.unwrap();

        let result = handler.delete(customer.id).await;

        assert!(matches!(result, Err(ApplicationError::InUse(_))));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_refuse_to_delete_a_customer_with_time_entries(
        before_each: BeforeEachReturn,
    ) {
        let (store, handler) = before_each;
        let customer = handler.create(create("Acme AG")).await.unwrap();
        let mut entry = make_new_time_entry(1, None, None);
        entry.customer_id = Some(customer.id);
        let mut uow = store.begin().await.unwrap();
        uow.insert_time_entry(entry).await.unwrap();
        uow.commit().await.unwrap();

        let result = handler.delete(customer.id).await;

        assert_eq!(
            result,
            Err(ApplicationError::InUse(format!(
                "customer {} still has time entries",
                customer.id
            )))
        );
    }
}
