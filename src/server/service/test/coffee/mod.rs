use crate::server::{
    error::AppError,
    model::{
        coffee::{CreateCoffeeParam, UpdateCoffeeParam},
        pagination::Pagination,
    },
    service::coffee::{CoffeeService, RECOMMEND_EVENT_NAME, RECOMMEND_EVENT_TYPE},
};
use sea_orm::{EntityTrait, PaginatorTrait};
use serde_json::json;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get;

fn create_param(name: &str, brand: &str, flavors: &[&str]) -> CreateCoffeeParam {
    CreateCoffeeParam {
        name: name.to_string(),
        brand: brand.to_string(),
        flavors: flavors.iter().map(|f| f.to_string()).collect(),
    }
}
