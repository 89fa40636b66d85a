//! Pagination query parameters and list envelope.

use serde::{Deserialize, Serialize};
use serde_json::json;
use serde_with::{DisplayFromStr, serde_as};
use utoipa::{IntoParams, ToSchema};

use crate::error::AppError;

const DEFAULT_PAGE_SIZE: u32 = 25;
const MAX_PAGE_SIZE: u32 = 100;

/// `?page=&page_size=` query parameters.
#[serde_as]
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationParams {
    /// Page number, starting at 1.
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page: Option<u32>,

    /// Items per page, 1 to 100 (default 25).
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page_size: Option<u32>,
}

impl PaginationParams {
    /// Validates the parameters and converts them to `(offset, limit)`.
    ///
    /// Defaults: `page` 1, `page_size` 25. `page` must be positive and
    /// `page_size` between 1 and 100.
    pub fn offset_limit(&self) -> Result<(i64, i64), AppError> {
        let page = self.page.unwrap_or(1);
        let page_size = self.page_size.unwrap_or(DEFAULT_PAGE_SIZE);

        if page == 0 {
            return Err(AppError::bad_request(
                "Page must be greater than 0",
                json!({ "page": page }),
            ));
        }

        if !(1..=MAX_PAGE_SIZE).contains(&page_size) {
            return Err(AppError::bad_request(
                format!("Page size must be between 1 and {MAX_PAGE_SIZE}"),
                json!({ "page_size": page_size }),
            ));
        }

        let offset = (page as i64 - 1) * page_size as i64;
        Ok((offset, page_size as i64))
    }
}

/// `{"items": [...]}` envelope for list endpoints.
#[derive(Debug, Serialize, ToSchema)]
pub struct ListResponse<T> {
    pub items: Vec<T>,
}

impl<T> ListResponse<T> {
    pub fn from_entities<E>(entities: Vec<E>) -> Self
    where
        T: From<E>,
    {
        Self {
            items: entities.into_iter().map(T::from).collect(),
        }
    }
}
