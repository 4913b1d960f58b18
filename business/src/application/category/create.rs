use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::model::{Category, NewCategory};
use crate::domain::category::repository::CategoryRepository;
use crate::domain::category::use_cases::create::{CreateCategoryParams, CreateCategoryUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct CreateCategoryUseCaseImpl {
    pub repository: Arc<dyn CategoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateCategoryUseCase for CreateCategoryUseCaseImpl {
    async fn execute(&self, params: CreateCategoryParams) -> Result<Category, CategoryError> {
        self.logger
            .info(&format!("Creating category: {}", params.name));

        let category = NewCategory::new(params.name, params.description)?;

        let created = self
            .repository
            .create(&category)
            .await
            .map_err(|e| match e {
                RepositoryError::Duplicated => CategoryError::AlreadyExists,
                other => CategoryError::Repository(other),
            })?;

        self.logger
            .info(&format!("Category created with id: {}", created.id));
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{MockCategoryRepo, mock_logger};

    #[tokio::test]
    async fn should_create_category_when_valid_name() {
        let mut mock_repo = MockCategoryRepo::new();
        mock_repo
            .expect_create()
            .withf(|c| c.name == "Tools" && c.description.is_none())
            .returning(|c| Ok(Category::from_repository(1, c.name.clone(), None)));

        let use_case = CreateCategoryUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let category = use_case
            .execute(CreateCategoryParams {
                name: "Tools".to_string(),
                description: None,
            })
            .await
            .unwrap();

        assert_eq!(category.id, 1);
        assert_eq!(category.name, "Tools");
    }

    #[tokio::test]
    async fn should_reject_category_when_name_is_empty() {
        let mock_repo = MockCategoryRepo::new();

        let use_case = CreateCategoryUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateCategoryParams {
                name: "".to_string(),
                description: None,
            })
            .await;

        assert!(matches!(result.unwrap_err(), CategoryError::NameEmpty));
    }

    #[tokio::test]
    async fn should_return_conflict_when_name_already_taken() {
        let mut mock_repo = MockCategoryRepo::new();
        mock_repo
            .expect_create()
            .returning(|_| Err(RepositoryError::Duplicated));

        let use_case = CreateCategoryUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateCategoryParams {
                name: "Tools".to_string(),
                description: None,
            })
            .await;

        assert!(matches!(result.unwrap_err(), CategoryError::AlreadyExists));
    }
}
