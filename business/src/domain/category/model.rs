use super::errors::CategoryError;

#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
}

impl Category {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(id: i32, name: String, description: Option<String>) -> Self {
        Self {
            id,
            name,
            description,
        }
    }
}

/// A validated category that has not been stored yet; the store assigns the id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCategory {
    pub name: String,
    pub description: Option<String>,
}

impl NewCategory {
    pub fn new(name: String, description: Option<String>) -> Result<Self, CategoryError> {
        if name.trim().is_empty() {
            return Err(CategoryError::NameEmpty);
        }

        Ok(Self {
            name,
            description: description.filter(|d| !d.trim().is_empty()),
        })
    }
}
