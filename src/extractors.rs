use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;
use tracing::debug;
use validator::Validate;

use crate::error::ApiError;

/// JSON body that has been deserialized and validated.
///
/// Both a body that does not parse (missing field, unknown enum value) and
/// one that fails validation are rejected with [`ApiError::Validation`], so
/// the handler only ever sees a well-formed payload.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            debug!("Rejected request body: {}", rejection.body_text());
            ApiError::Validation(rejection.body_text())
        })?;

        if let Err(errors) = value.validate() {
            debug!("Payload failed validation: {}", errors);
            return Err(errors.into());
        }

        Ok(ValidatedJson(value))
    }
}

/// Path parameters whose parse failures come back as [`ApiError::Validation`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiPath<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for ApiPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                debug!("Rejected path: {}", rejection.body_text());
                ApiError::Validation(rejection.body_text())
            })?;
        Ok(ApiPath(value))
    }
}

/// Query string whose parse failures come back as [`ApiError::Validation`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiQuery<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                debug!("Rejected query string: {}", rejection.body_text());
                ApiError::Validation(rejection.body_text())
            })?;
        Ok(ApiQuery(value))
    }
}
