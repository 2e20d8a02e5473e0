//! Shared response envelope types for API handlers.
//!
//! All API responses use a `{ "data": ... }` envelope. Paginated lists go
//! through [`PageResponse`], which also carries the pagination headers.

use axum::http::{HeaderMap, HeaderValue};
use axum::response::{IntoResponse, Response};
use axum::Json;
use harmonia_core::pagination::Pagination;
use harmonia_db::paging::Page;
use serde::Serialize;

/// Next page number; absent on the last page.
pub const NEXT_PAGE: &str = "x-next-page";
pub const TOTAL_PAGES: &str = "x-total-pages";
pub const TOTAL_ITEMS: &str = "x-total-items";

/// Standard `{ "data": T }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(DataResponse { data: pitch }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// One page of a list endpoint.
///
/// The body is `{ "data": [...] }`. The `x-next-page`, `x-total-pages` and
/// `x-total-items` headers are set only when pagination metadata is present
/// and a further page exists.
#[derive(Debug)]
pub struct PageResponse<T> {
    pub data: Vec<T>,
    pub pagination: Option<Pagination>,
}

impl<T> From<Page<T>> for PageResponse<T> {
    fn from(page: Page<T>) -> Self {
        Self {
            data: page.items,
            pagination: page.pagination,
        }
    }
}

impl<T: Serialize> IntoResponse for PageResponse<T> {
    fn into_response(self) -> Response {
        let mut response = Json(DataResponse { data: self.data }).into_response();
        if let Some(pagination) = self.pagination {
            insert_pagination_headers(response.headers_mut(), &pagination);
        }
        response
    }
}

fn insert_pagination_headers(headers: &mut HeaderMap, pagination: &Pagination) {
    if !pagination.has_next_page() {
        return;
    }
    headers.insert(NEXT_PAGE, HeaderValue::from(pagination.next_page));
    headers.insert(TOTAL_PAGES, HeaderValue::from(pagination.total_pages));
    headers.insert(TOTAL_ITEMS, HeaderValue::from(pagination.total_items));
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use http_body_util::BodyExt;

    use super::*;

    fn populated(page: i64, per_page: i64, total: i64) -> Pagination {
        let mut pagination = Pagination::new(Some(page), Some(per_page));
        pagination.populate(total);
        pagination
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn headers_present_when_a_next_page_exists() {
        let response = PageResponse {
            data: vec![10, 11],
            pagination: Some(populated(1, 2, 5)),
        }
        .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        let headers = response.headers();
        assert_eq!(headers[NEXT_PAGE], "2");
        assert_eq!(headers[TOTAL_PAGES], "3");
        assert_eq!(headers[TOTAL_ITEMS], "5");

        let json = body_json(response).await;
        assert_eq!(json, serde_json::json!({ "data": [10, 11] }));
    }

    #[test]
    fn headers_suppressed_on_the_last_page() {
        let response = PageResponse {
            data: vec![14],
            pagination: Some(populated(3, 2, 5)),
        }
        .into_response();

        assert!(response.headers().get(NEXT_PAGE).is_none());
        assert!(response.headers().get(TOTAL_PAGES).is_none());
        assert!(response.headers().get(TOTAL_ITEMS).is_none());
    }

    #[tokio::test]
    async fn beyond_range_page_is_an_empty_list_without_headers() {
        let response = PageResponse::<i64> {
            data: Vec::new(),
            pagination: None,
        }
        .into_response();

        assert!(response.headers().get(NEXT_PAGE).is_none());
        assert_eq!(body_json(response).await["data"], serde_json::json!([]));
    }

    #[test]
    fn page_converts_into_response_parts() {
        let page = Page {
            items: vec!["C", "D"],
            pagination: Some(populated(1, 50, 2)),
        };
        let response = PageResponse::from(page);

        assert_eq!(response.data, ["C", "D"]);
        assert_eq!(response.pagination.map(|p| p.next_page), Some(0));
    }
}
