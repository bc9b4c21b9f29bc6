#[cfg(test)]
#[allow(clippy::module_inception)]
pub mod tests {
    use crate::config::{Config, Environment};
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use contactbook_api::data::{Contact, ContactRecord};
    use contactbook_api::service::{
        Result, ServiceContext,
        contact_service::{ContactListQuery, ContactPage, ContactServiceApi},
        import::ImportSource,
    };
    use rocket::local::asynchronous::Client;
    use std::sync::Arc;

    // Need to wrap mocks, because traits are in a different crate
    mockall::mock! {
        pub ContactServiceApiMock {}

        #[async_trait]
        impl ContactServiceApi for ContactServiceApiMock {
            async fn import_contacts(&self, source: ImportSource) -> Result<Vec<Contact>>;
            async fn create_contact(&self, record: ContactRecord) -> Result<Contact>;
            async fn list_contacts(&self, query: ContactListQuery) -> Result<ContactPage>;
            async fn get_contact(&self, id: &str) -> Result<Contact>;
            async fn update_contact(&self, id: &str, record: ContactRecord) -> Result<Contact>;
            async fn delete_contact(&self, id: &str) -> Result<()>;
        }
    }

    pub fn test_config(environment: Environment) -> Config {
        Config {
            http_port: 8000,
            http_address: "127.0.0.1".to_string(),
            surreal_db_connection: "mem://".to_string(),
            surreal_db_namespace: "contacts".to_string(),
            surreal_db_database: "contacts".to_string(),
            environment,
        }
    }

    pub fn get_baseline_contact() -> Contact {
        let created_at = Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap();
        Contact {
            id: 1,
            name: "Ann".to_string(),
            email: "ann@x.com".to_string(),
            phone: "5551234".to_string(),
            created_at,
            updated_at: created_at,
        }
    }

    pub async fn get_client_for_env(
        service: MockContactServiceApiMock,
        environment: Environment,
    ) -> Client {
        let conf = test_config(environment);
        let context = ServiceContext {
            config: conf.api_config(),
            contact_service: Arc::new(service),
        };
        let rocket = crate::router::rocket_main(conf, context).unwrap();
        Client::tracked(rocket).await.unwrap()
    }

    pub async fn get_client(service: MockContactServiceApiMock) -> Client {
        get_client_for_env(service, Environment::Development).await
    }

    pub fn multipart_body(boundary: &str, field: &str, file_name: &str, bytes: &[u8]) -> Vec<u8> {
        let mut body = format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"{field}\"; filename=\"{file_name}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
        )
        .into_bytes();
        body.extend_from_slice(bytes);
        body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());
        body
    }
}
