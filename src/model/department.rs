use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Department {
    #[schema(example = "3")]
    pub id: String,
    #[schema(example = "Information Technology")]
    pub name: String,
    #[serde(default)]
    #[schema(example = "IT department")]
    pub description: String,
}

impl Department {
    fn seed(id: &str, name: &str, description: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
        }
    }

    /// Departments written on first read of an empty store.
    pub fn defaults() -> Vec<Department> {
        vec![
            Self::seed("1", "Management", "Management department"),
            Self::seed("2", "Human Resources", "HR department"),
            Self::seed("3", "Information Technology", "IT department"),
            Self::seed("4", "Sales", "Sales department"),
            Self::seed("5", "Marketing", "Marketing department"),
        ]
    }
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct NewDepartment {
    #[serde(default)]
    #[schema(example = "Finance")]
    pub name: String,
    #[serde(default)]
    #[schema(example = "Finance department")]
    pub description: String,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct DepartmentUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl NewDepartment {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::validation("department name is required"));
        }
        Ok(())
    }
}

impl DepartmentUpdate {
    pub fn apply(self, department: &mut Department) -> Result<()> {
        if let Some(name) = self.name {
            let name = name.trim();
            if name.is_empty() {
                return Err(Error::validation("department name is required"));
            }
            department.name = name.to_string();
        }
        if let Some(description) = self.description {
            department.description = description;
        }
        Ok(())
    }
}
