/**
 * Validated JSON Extractor
 *
 * `ValidatedJson<T>` deserializes the request body like `axum::Json` and then
 * runs `validator::Validate` on it. Both kinds of failure come back as
 * `ApiError::Validation`, so clients always get the same JSON error shape.
 */

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::backend::error::ApiError;
use crate::shared::SharedError;

/// JSON body that has passed its validation rules
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| {
                tracing::debug!("Rejected request body: {}", rejection.body_text());
                SharedError::serialization(rejection.body_text())
            })?;

        value.validate().map_err(SharedError::from)?;
        Ok(ValidatedJson(value))
    }
}
