use crate::server::{
    data::coffee::{CoffeeChanges, CoffeeRepository, NewCoffee},
    model::pagination::Pagination,
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_paginated;
mod set_flavors;
