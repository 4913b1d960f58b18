use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::auth::model::Role;
use business::domain::category::use_cases::create::{CreateCategoryParams, CreateCategoryUseCase};
use business::domain::category::use_cases::delete::{DeleteCategoryParams, DeleteCategoryUseCase};
use business::domain::category::use_cases::get_all::GetAllCategoriesUseCase;

use crate::api::category::dto::{CategoryResponse, CreateCategoryRequest};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::security::{JwtBearer, require_role};
use crate::api::tags::ApiTags;

pub struct CategoryApi {
    get_all_use_case: Arc<dyn GetAllCategoriesUseCase>,
    create_use_case: Arc<dyn CreateCategoryUseCase>,
    delete_use_case: Arc<dyn DeleteCategoryUseCase>,
}

impl CategoryApi {
    pub fn new(
        get_all_use_case: Arc<dyn GetAllCategoriesUseCase>,
        create_use_case: Arc<dyn CreateCategoryUseCase>,
        delete_use_case: Arc<dyn DeleteCategoryUseCase>,
    ) -> Self {
        Self {
            get_all_use_case,
            create_use_case,
            delete_use_case,
        }
    }
}

/// Category management API
#[OpenApi]
impl CategoryApi {
    /// List all categories
    #[oai(path = "/categories", method = "get", tag = "ApiTags::Categories")]
    async fn get_all_categories(&self) -> GetAllCategoriesResponse {
        match self.get_all_use_case.execute().await {
            Ok(categories) => GetAllCategoriesResponse::Ok(Json(
                categories.into_iter().map(CategoryResponse::from).collect(),
            )),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllCategoriesResponse::InternalError(json)
            }
        }
    }

    /// Create a category
    ///
    /// Requires the MANAGER role.
    #[oai(path = "/categories", method = "post", tag = "ApiTags::Categories")]
    async fn create_category(
        &self,
        auth: JwtBearer,
        body: Json<CreateCategoryRequest>,
    ) -> CreateCategoryResponse {
        if let Err(err) = require_role(&auth, Role::Manager) {
            let (_status, json) = err.into_error_response();
            return CreateCategoryResponse::Forbidden(json);
        }

        let params = CreateCategoryParams {
            name: body.0.name,
            description: body.0.description,
        };

        match self.create_use_case.execute(params).await {
            Ok(category) => CreateCategoryResponse::Created(Json(category.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateCategoryResponse::BadRequest(json),
                    409 => CreateCategoryResponse::Conflict(json),
                    _ => CreateCategoryResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a category
    ///
    /// Fails with 409 while any product still references the category.
    /// Requires the MANAGER role.
    #[oai(path = "/categories/:id", method = "delete", tag = "ApiTags::Categories")]
    async fn delete_category(&self, auth: JwtBearer, id: Path<i32>) -> DeleteCategoryResponse {
        if let Err(err) = require_role(&auth, Role::Manager) {
            let (_status, json) = err.into_error_response();
            return DeleteCategoryResponse::Forbidden(json);
        }

        match self
            .delete_use_case
            .execute(DeleteCategoryParams { id: id.0 })
            .await
        {
            Ok(()) => DeleteCategoryResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteCategoryResponse::NotFound(json),
                    409 => DeleteCategoryResponse::Conflict(json),
                    _ => DeleteCategoryResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllCategoriesResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<CategoryResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateCategoryResponse {
    #[oai(status = 201)]
    Created(Json<CategoryResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteCategoryResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
