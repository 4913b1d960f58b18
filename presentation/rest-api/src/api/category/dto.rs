use poem_openapi::Object;

use business::domain::category::model::Category;

#[derive(Debug, Clone, Object)]
pub struct CreateCategoryRequest {
    /// Category name (cannot be empty, must be unique)
    pub name: String,
    /// Optional free-text description
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct CategoryResponse {
    pub id: i32,
    pub name: String,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
            description: category.description,
        }
    }
}
