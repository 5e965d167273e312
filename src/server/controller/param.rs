use serde::Deserialize;
use utoipa::IntoParams;

use crate::server::model::pagination::Pagination;

/// Query parameters for list endpoints.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationParam {
    /// Maximum number of records to return (default: 10, max: 100)
    pub limit: Option<u64>,
    /// Number of records to skip (default: 0)
    pub offset: Option<u64>,
}

impl PaginationParam {
    pub fn into_pagination(self) -> Pagination {
        Pagination::new(self.limit, self.offset)
    }
}
