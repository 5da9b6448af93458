//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::lead::Lead;
use crate::repository::LeadReader;
use crate::repository::errors::RepositoryResult;

mock! {
    pub LeadRepository {}

    impl LeadReader for LeadRepository {
        fn list_leads(&self) -> RepositoryResult<Vec<Lead>>;
    }
}
