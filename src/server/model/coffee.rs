//! Coffee and flavor domain models and parameters.

use crate::{
    model::coffee::{CoffeeDto, CreateCoffeeDto, FlavorDto, UpdateCoffeeDto},
    server::{
        error::validation::ValidationError,
        middleware::validation::{FieldKind, FieldRule, RequestShape},
    },
};

/// A coffee with its resolved flavor set.
#[derive(Debug, Clone, PartialEq)]
pub struct Coffee {
    pub id: i32,
    pub name: String,
    pub brand: String,
    /// Only ever incremented, starting at 0.
    pub recommendations: i32,
    pub flavors: Vec<Flavor>,
}

impl Coffee {
    /// Converts entity models to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The coffee row
    /// - `flavors` - Flavor rows linked to the coffee through the join table
    pub fn from_entity(entity: entity::coffee::Model, flavors: Vec<entity::flavor::Model>) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            brand: entity.brand,
            recommendations: entity.recommendations,
            flavors: flavors.into_iter().map(Flavor::from_entity).collect(),
        }
    }

    pub fn into_dto(self) -> CoffeeDto {
        CoffeeDto {
            id: self.id,
            name: self.name,
            brand: self.brand,
            recommendations: self.recommendations,
            flavors: self.flavors.into_iter().map(Flavor::into_dto).collect(),
        }
    }

    /// Names of the attached flavors, sorted, for order-insensitive comparison.
    #[cfg(test)]
    pub fn flavor_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.flavors.iter().map(|f| f.name.clone()).collect();
        names.sort();
        names
    }
}

/// A flavor, identified for association purposes by its name.
#[derive(Debug, Clone, PartialEq)]
pub struct Flavor {
    pub id: i32,
    pub name: String,
}

impl Flavor {
    pub fn from_entity(entity: entity::flavor::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }

    pub fn into_dto(self) -> FlavorDto {
        FlavorDto {
            id: self.id,
            name: self.name,
        }
    }
}

/// Parameters for creating a coffee.
#[derive(Debug, Clone)]
pub struct CreateCoffeeParam {
    pub name: String,
    pub brand: String,
    /// Flavor names, resolved by name to existing or new flavors.
    pub flavors: Vec<String>,
}

impl CreateCoffeeParam {
    pub fn from_dto(dto: CreateCoffeeDto) -> Self {
        Self {
            name: dto.name,
            brand: dto.brand,
            flavors: dto.flavors,
        }
    }

    /// Checks that name and brand are not blank and no flavor name is blank.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = ValidationError::new();
        check_not_blank(&mut errors, "name", &self.name);
        check_not_blank(&mut errors, "brand", &self.brand);
        check_flavor_names(&mut errors, &self.flavors);
        errors.into_result()
    }
}

/// Parameters for a partial coffee update.
///
/// `None` leaves the stored value untouched. `Some(flavors)` replaces the whole
/// association set, so `Some(vec![])` detaches every flavor.
#[derive(Debug, Clone)]
pub struct UpdateCoffeeParam {
    pub id: i32,
    pub name: Option<String>,
    pub brand: Option<String>,
    pub flavors: Option<Vec<String>>,
}

impl UpdateCoffeeParam {
    pub fn from_dto(id: i32, dto: UpdateCoffeeDto) -> Self {
        Self {
            id,
            name: dto.name,
            brand: dto.brand,
            flavors: dto.flavors,
        }
    }

    /// Applies the create rules to whichever fields are present.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = ValidationError::new();
        if let Some(name) = &self.name {
            check_not_blank(&mut errors, "name", name);
        }
        if let Some(brand) = &self.brand {
            check_not_blank(&mut errors, "brand", brand);
        }
        if let Some(flavors) = &self.flavors {
            check_flavor_names(&mut errors, flavors);
        }
        errors.into_result()
    }
}

fn check_not_blank(errors: &mut ValidationError, field: &str, value: &str) {
    if value.trim().is_empty() {
        errors.push(field, format!("{} should not be empty", field));
    }
}

fn check_flavor_names(errors: &mut ValidationError, flavors: &[String]) {
    if flavors.iter().any(|f| f.trim().is_empty()) {
        errors.push("flavors", "each value in flavors should not be empty");
    }
}

impl RequestShape for CreateCoffeeDto {
    const FIELDS: &'static [FieldRule] = &[
        FieldRule::required("name", FieldKind::String),
        FieldRule::required("brand", FieldKind::String),
        FieldRule::optional("flavors", FieldKind::StringArray),
    ];
}

impl RequestShape for UpdateCoffeeDto {
    const FIELDS: &'static [FieldRule] = &[
        FieldRule::optional("name", FieldKind::String),
        FieldRule::optional("brand", FieldKind::String),
        FieldRule::optional("flavors", FieldKind::StringArray),
    ];
}
