use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
    types::multipart::Upload,
};

use business::domain::auth::model::Role;
use business::domain::product::errors::ProductError;
use business::domain::product::model::Product;
use business::domain::product::services::ImageStorageService;
use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::disable::{DisableProductParams, DisableProductUseCase};
use business::domain::product::use_cases::get_all::GetAllProductsUseCase;
use business::domain::product::use_cases::get_by_category::{
    GetProductsByCategoryParams, GetProductsByCategoryUseCase,
};
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::replace_image::{
    ReplaceProductImageParams, ReplaceProductImageUseCase,
};
use business::domain::product::use_cases::toggle_like::{ToggleLikeParams, ToggleLikeUseCase};
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use business::domain::shared::value_objects::PageRequest;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::{
    CreateProductForm, ProductResponse, ProductSummaryResponse, ReplaceImageForm,
    UpdateProductRequest, into_image_upload, parse_price,
};
use crate::api::security::{JwtBearer, require_role};
use crate::api::tags::ApiTags;

pub struct ProductApi {
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    get_by_category_use_case: Arc<dyn GetProductsByCategoryUseCase>,
    create_use_case: Arc<dyn CreateProductUseCase>,
    update_use_case: Arc<dyn UpdateProductUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
    disable_use_case: Arc<dyn DisableProductUseCase>,
    toggle_like_use_case: Arc<dyn ToggleLikeUseCase>,
    replace_image_use_case: Arc<dyn ReplaceProductImageUseCase>,
    image_storage: Arc<dyn ImageStorageService>,
}

impl ProductApi {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        get_all_use_case: Arc<dyn GetAllProductsUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        get_by_category_use_case: Arc<dyn GetProductsByCategoryUseCase>,
        create_use_case: Arc<dyn CreateProductUseCase>,
        update_use_case: Arc<dyn UpdateProductUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
        disable_use_case: Arc<dyn DisableProductUseCase>,
        toggle_like_use_case: Arc<dyn ToggleLikeUseCase>,
        replace_image_use_case: Arc<dyn ReplaceProductImageUseCase>,
        image_storage: Arc<dyn ImageStorageService>,
    ) -> Self {
        Self {
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
        }
    }

    async fn store_image(&self, upload: Upload) -> Result<String, ProductError> {
        let image = into_image_upload(upload).await.map_err(|e| {
            tracing::warn!("Could not read uploaded image: {e}");
            ProductError::InvalidImage
        })?;
        self.image_storage.store(image).await
    }
}

/// Product catalog API
///
/// Reads are public and only ever return enabled products. Writes require
/// the MANAGER role, except likes which need any authenticated user.
#[OpenApi]
impl ProductApi {
    /// List all active products
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn get_all_products(&self) -> ListProductsResponse {
        let result = self.get_all_use_case.execute().await;
        ListProductsResponse::from_result(result)
    }

    /// List active products page by page
    ///
    /// `skip` and `take` must be non-negative integers.
    #[oai(path = "/products/offset", method = "get", tag = "ApiTags::Products")]
    async fn get_products_paginated(
        &self,
        skip: Query<u32>,
        take: Query<u32>,
    ) -> ListProductsResponse {
        let result = self
            .get_all_use_case
            .execute_paginated(PageRequest::new(skip.0, take.0))
            .await;
        ListProductsResponse::from_result(result)
    }

    /// List active products of a category
    ///
    /// An unknown category yields an empty list.
    #[oai(
        path = "/products/category/:id",
        method = "get",
        tag = "ApiTags::Products"
    )]
    async fn get_products_by_category(&self, id: Path<i32>) -> ListProductsResponse {
        let result = self
            .get_by_category_use_case
            .execute(GetProductsByCategoryParams { category_id: id.0 })
            .await;
        ListProductsResponse::from_result(result)
    }

    /// Get a product by ID
    ///
    /// Disabled products are reported as not found.
    #[oai(path = "/products/:id", method = "get", tag = "ApiTags::Products")]
    async fn get_product_by_id(&self, id: Path<i32>) -> GetProductByIdResponse {
        match self
            .get_by_id_use_case
            .execute(GetProductByIdParams { id: id.0 })
            .await
        {
            Ok(product) => GetProductByIdResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProductByIdResponse::NotFound(json),
                    _ => GetProductByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Create a product
    ///
    /// Multipart form with the product fields and an `image` file.
    #[oai(path = "/products", method = "post", tag = "ApiTags::Products")]
    async fn create_product(
        &self,
        auth: JwtBearer,
        form: CreateProductForm,
    ) -> CreateProductResponse {
        if let Err(err) = require_role(&auth, Role::Manager) {
            let (_status, json) = err.into_error_response();
            return CreateProductResponse::Forbidden(json);
        }

        let Some(price) = parse_price(form.price) else {
            return CreateProductResponse::BadRequest(ErrorResponse::validation(
                "product.invalid_price",
            ));
        };

        let result = match self.store_image(form.image).await {
            Ok(image_name) => {
                let params = CreateProductParams {
                    name: form.name,
                    description: form.description,
                    price,
                    stock: form.stock,
                    category_id: form.category_id,
                    image_name,
                };
                self.create_use_case.execute(params).await
            }
            Err(err) => Err(err),
        };

        match result {
            Ok(product) => CreateProductResponse::Created(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateProductResponse::BadRequest(json),
                    404 => CreateProductResponse::NotFound(json),
                    422 => CreateProductResponse::UnprocessableContent(json),
                    _ => CreateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a product
    ///
    /// Partial update; a missing product and a missing category both yield 404.
    #[oai(path = "/products/:id", method = "patch", tag = "ApiTags::Products")]
    async fn update_product(
        &self,
        auth: JwtBearer,
        id: Path<i32>,
        body: Json<UpdateProductRequest>,
    ) -> UpdateProductResponse {
        if let Err(err) = require_role(&auth, Role::Manager) {
            let (_status, json) = err.into_error_response();
            return UpdateProductResponse::Forbidden(json);
        }

        let price = match body.0.price {
            Some(raw) => match parse_price(raw) {
                Some(price) => Some(price),
                None => {
                    return UpdateProductResponse::BadRequest(ErrorResponse::validation(
                        "product.invalid_price",
                    ));
                }
            },
            None => None,
        };

        let params = UpdateProductParams {
            id: id.0,
            name: body.0.name,
            description: body.0.description,
            price,
            stock: body.0.stock,
            category_id: body.0.category_id,
        };

        match self.update_use_case.execute(params).await {
            Ok(product) => UpdateProductResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateProductResponse::BadRequest(json),
                    404 => UpdateProductResponse::NotFound(json),
                    _ => UpdateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a product
    ///
    /// Disabled products can still be deleted.
    #[oai(path = "/products/:id", method = "delete", tag = "ApiTags::Products")]
    async fn delete_product(&self, auth: JwtBearer, id: Path<i32>) -> NoContentResponse {
        if let Err(err) = require_role(&auth, Role::Manager) {
            let (_status, json) = err.into_error_response();
            return NoContentResponse::Forbidden(json);
        }

        let result = self
            .delete_use_case
            .execute(DeleteProductParams { id: id.0 })
            .await;
        NoContentResponse::from_result(result)
    }

    /// Disable a product
    ///
    /// Hides the product from every public read. Idempotent.
    #[oai(
        path = "/products/disable/:id",
        method = "patch",
        tag = "ApiTags::Products"
    )]
    async fn disable_product(&self, auth: JwtBearer, id: Path<i32>) -> NoContentResponse {
        if let Err(err) = require_role(&auth, Role::Manager) {
            let (_status, json) = err.into_error_response();
            return NoContentResponse::Forbidden(json);
        }

        let result = self
            .disable_use_case
            .execute(DisableProductParams { id: id.0 })
            .await;
        NoContentResponse::from_result(result)
    }

    /// Like or unlike a product
    ///
    /// Flips the caller's like on the product. Any authenticated user may call it.
    #[oai(
        path = "/products/like/:id",
        method = "patch",
        tag = "ApiTags::Products"
    )]
    async fn toggle_like(&self, auth: JwtBearer, id: Path<i32>) -> NoContentResponse {
        let params = ToggleLikeParams {
            product_id: id.0,
            user_id: auth.0.user_id,
        };

        let result = self.toggle_like_use_case.execute(params).await.map(|_| ());
        NoContentResponse::from_result(result)
    }

    /// Replace a product image
    ///
    /// Multipart form with a single `image` file.
    #[oai(
        path = "/products/image/:id",
        method = "patch",
        tag = "ApiTags::Products"
    )]
    async fn replace_image(
        &self,
        auth: JwtBearer,
        id: Path<i32>,
        form: ReplaceImageForm,
    ) -> ReplaceImageResponse {
        if let Err(err) = require_role(&auth, Role::Manager) {
            let (_status, json) = err.into_error_response();
            return ReplaceImageResponse::Forbidden(json);
        }

        let result = match self.store_image(form.image).await {
            Ok(image_name) => {
                self.replace_image_use_case
                    .execute(ReplaceProductImageParams {
                        id: id.0,
                        image_name,
                    })
                    .await
            }
            Err(err) => Err(err),
        };

        match result {
            Ok(product) => ReplaceImageResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => ReplaceImageResponse::NotFound(json),
                    422 => ReplaceImageResponse::UnprocessableContent(json),
                    _ => ReplaceImageResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ListProductsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductSummaryResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl ListProductsResponse {
    fn from_result(result: Result<Vec<Product>, ProductError>) -> Self {
        match result {
            Ok(products) => ListProductsResponse::Ok(Json(
                products.into_iter().map(ProductSummaryResponse::from).collect(),
            )),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ListProductsResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductByIdResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateProductResponse {
    #[oai(status = 201)]
    Created(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 422)]
    UnprocessableContent(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ReplaceImageResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 422)]
    UnprocessableContent(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

/// Shared by delete, disable and like, which return no body on success.
#[derive(poem_openapi::ApiResponse)]
pub enum NoContentResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl NoContentResponse {
    fn from_result(result: Result<(), ProductError>) -> Self {
        match result {
            Ok(()) => NoContentResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => NoContentResponse::NotFound(json),
                    _ => NoContentResponse::InternalError(json),
                }
            }
        }
    }
}
