use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CoffeeDto {
    pub id: i32,
    pub name: String,
    pub brand: String,
    pub recommendations: i32,
    pub flavors: Vec<FlavorDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct FlavorDto {
    pub id: i32,
    pub name: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateCoffeeDto {
    pub name: String,
    pub brand: String,
    /// Flavor names; existing flavors are reused, unknown names are created.
    #[serde(default)]
    pub flavors: Vec<String>,
}

/// Sparse update: only the fields present in the body are changed.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct UpdateCoffeeDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    /// Replaces the whole flavor set when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flavors: Option<Vec<String>>,
}
