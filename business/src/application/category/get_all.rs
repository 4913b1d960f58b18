use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::model::Category;
use crate::domain::category::repository::CategoryRepository;
use crate::domain::category::use_cases::get_all::GetAllCategoriesUseCase;
use crate::domain::logger::Logger;

pub struct GetAllCategoriesUseCaseImpl {
    pub repository: Arc<dyn CategoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllCategoriesUseCase for GetAllCategoriesUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Category>, CategoryError> {
        self.logger.info("Fetching all categories");
        let categories = self.repository.get_all().await?;
        self.logger
            .info(&format!("Found {} categories", categories.len()));
        Ok(categories)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{MockCategoryRepo, mock_logger};

    #[tokio::test]
    async fn should_return_all_categories() {
        let mut mock_repo = MockCategoryRepo::new();
        mock_repo.expect_get_all().returning(|| {
            Ok(vec![
                Category::from_repository(1, "Tools".to_string(), None),
                Category::from_repository(2, "Garden".to_string(), Some("Outdoor".to_string())),
            ])
        });

        let use_case = GetAllCategoriesUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let categories = use_case.execute().await.unwrap();

        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].name, "Tools");
    }

    #[tokio::test]
    async fn should_return_empty_list_when_no_categories() {
        let mut mock_repo = MockCategoryRepo::new();
        mock_repo.expect_get_all().returning(|| Ok(vec![]));

        let use_case = GetAllCategoriesUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        assert!(use_case.execute().await.unwrap().is_empty());
    }
}
