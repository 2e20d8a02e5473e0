//! Request extractors shared by the list and detail handlers.
//!
//! Axum's own `Query` and `Path` rejections answer with plain-text bodies.
//! These wrappers turn them into [`AppError::BadRequest`] so every failure
//! uses the same JSON error body.

use axum::extract::{FromRequestParts, Path, Query};
use axum::http::request::Parts;
use harmonia_core::pagination::Pagination;
use harmonia_core::types::DbId;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::AppError;

/// Query-string filter object (`?cardinality=4&balanced=false`).
///
/// Unknown keys are ignored; a key whose value does not parse into the
/// field type is rejected with 400.
#[derive(Debug)]
pub struct FilterQuery<F>(pub F);

impl<F, S> FromRequestParts<S> for FilterQuery<F>
where
    F: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<F>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        Ok(Self(value))
    }
}

/// Raw `?page=&per_page=` parameters, sanitized on conversion.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

impl From<PageParams> for Pagination {
    fn from(params: PageParams) -> Self {
        Pagination::new(params.page, params.per_page)
    }
}

/// Sanitized pagination request taken from the query string.
#[derive(Debug)]
pub struct PageQuery(pub Pagination);

impl<S> FromRequestParts<S> for PageQuery
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let FilterQuery(params) = FilterQuery::<PageParams>::from_request_parts(parts, state).await?;
        Ok(Self(params.into()))
    }
}

/// The `{id}` path segment of a resource route.
#[derive(Debug)]
pub struct IdPath(pub DbId);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<DbId>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        Ok(Self(id))
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use axum::http::Request;
    use harmonia_core::pagination::DEFAULT_PER_PAGE;
    use harmonia_db::models::scale::ScaleFilter;

    use super::*;

    fn parts(uri: &str) -> Parts {
        let (parts, ()) = Request::builder().uri(uri).body(()).unwrap().into_parts();
        parts
    }

    #[tokio::test]
    async fn filter_keeps_explicit_zero_and_false() {
        let mut parts = parts("/scales?perfection=0&palindromic=false&number=2741");
        let FilterQuery(filter) = FilterQuery::<ScaleFilter>::from_request_parts(&mut parts, &())
            .await
            .unwrap();

        assert_eq!(filter.perfection, Some(0));
        assert_eq!(filter.palindromic, Some(false));
        assert_eq!(filter.number, 2741);
        assert_eq!(filter.imperfection, None);
        assert_eq!(filter.cardinality, 0);
    }

    #[tokio::test]
    async fn unknown_keys_are_ignored() {
        let mut parts = parts("/scales?colour=blue&cardinality=7");
        let FilterQuery(filter) = FilterQuery::<ScaleFilter>::from_request_parts(&mut parts, &())
            .await
            .unwrap();

        assert_eq!(filter.cardinality, 7);
    }

    #[tokio::test]
    async fn unparsable_value_is_bad_request() {
        let mut parts = parts("/scales?balanced=maybe");
        let result = FilterQuery::<ScaleFilter>::from_request_parts(&mut parts, &()).await;

        assert_matches!(result, Err(AppError::BadRequest(_)));
    }

    #[tokio::test]
    async fn page_defaults_without_parameters() {
        let mut parts = parts("/chords");
        let PageQuery(pagination) = PageQuery::from_request_parts(&mut parts, &())
            .await
            .unwrap();

        assert_eq!(pagination.page, 1);
        assert_eq!(pagination.per_page, DEFAULT_PER_PAGE);
    }

    #[tokio::test]
    async fn page_parameters_are_sanitized() {
        let mut parts = parts("/chords?page=-4&per_page=1000");
        let PageQuery(pagination) = PageQuery::from_request_parts(&mut parts, &())
            .await
            .unwrap();

        assert_eq!(pagination.page, 1);
        assert_eq!(pagination.per_page, 100);
    }

    #[tokio::test]
    async fn non_numeric_page_is_bad_request() {
        let mut parts = parts("/chords?page=two");
        let result = PageQuery::from_request_parts(&mut parts, &()).await;

        assert_matches!(result, Err(AppError::BadRequest(_)));
    }
}
