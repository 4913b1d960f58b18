use std::sync::Arc;

use logger::TracingLogger;
use persistence::category::repository::CategoryRepositoryPostgres;
use persistence::product::repository::ProductRepositoryPostgres;
use storage::LocalImageStorage;

use business::application::category::create::CreateCategoryUseCaseImpl;
use business::application::category::delete::DeleteCategoryUseCaseImpl;
use business::application::category::get_all::GetAllCategoriesUseCaseImpl;
use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::disable::DisableProductUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_category::GetProductsByCategoryUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::replace_image::ReplaceProductImageUseCaseImpl;
use business::application::product::toggle_like::ToggleLikeUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;

use crate::api::category::routes::CategoryApi;
use crate::api::health::routes::HealthApi;
use crate::api::product::routes::ProductApi;
use crate::api::security::JwtVerifier;
use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub category_api: CategoryApi,
    pub product_api: ProductApi,
    pub jwt_verifier: Arc<JwtVerifier>,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool, config: &AppConfig) -> Self {
        let logger = Arc::new(TracingLogger);
        let health_api = HealthApi::new(pool.clone());

        // Infrastructure adapters
        let category_repository = Arc::new(CategoryRepositoryPostgres::new(pool.clone()));
        let product_repository = Arc::new(ProductRepositoryPostgres::new(pool));
        let image_storage = Arc::new(LocalImageStorage::new(&config.storage.upload_dir));
        let jwt_verifier = Arc::new(JwtVerifier::new(&config.jwt.secret));

        // Category use cases
        let get_all_categories_use_case = Arc::new(GetAllCategoriesUseCaseImpl {
            repository: category_repository.clone(),
            logger: logger.clone(),
        });
        let create_category_use_case = Arc::new(CreateCategoryUseCaseImpl {
            repository: category_repository.clone(),
            logger: logger.clone(),
        });
        let delete_category_use_case = Arc::new(DeleteCategoryUseCaseImpl {
            repository: category_repository,
            logger: logger.clone(),
        });

        // Product use cases
        let get_all_use_case = Arc::new(GetAllProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_by_category_use_case = Arc::new(GetProductsByCategoryUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let create_use_case = Arc::new(CreateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let update_use_case = Arc::new(UpdateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let delete_use_case = Arc::new(DeleteProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let disable_use_case = Arc::new(DisableProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let toggle_like_use_case = Arc::new(ToggleLikeUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let replace_image_use_case = Arc::new(ReplaceProductImageUseCaseImpl {
            repository: product_repository,
            logger,
        });

        let category_api = CategoryApi::new(
            get_all_categories_use_case,
            create_category_use_case,
            delete_category_use_case,
        );

        let product_api = ProductApi::new(
            get_all_use_case,
            get_by_id_use_case,
            get_by_category_use_case,
            create_use_case,
            update_use_case,
            delete_use_case,
            disable_use_case,
            toggle_like_use_case,
            replace_image_use_case,
            image_storage,
        );

        Self {
            health_api,
            category_api,
            product_api,
            jwt_verifier,
        }
    }
}
