use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("malformed player document: {0}")]
    Decode(#[from] mongodb::bson::de::Error),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("User not found")]
    UserNotFound,

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("password hashing failed: {0}")]
    Hashing(#[from] bcrypt::BcryptError),

    #[error("template rendering failed: {0}")]
    Render(#[from] askama::Error),

    #[error("blocking task was cancelled")]
    Blocking(#[from] actix_web::error::BlockingError),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::UserNotFound => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::UserNotFound => HttpResponse::NotFound()
                .content_type("text/plain; charset=utf-8")
                .body("User not found"),
            other => {
                error!(error = %other, "request failed");
                HttpResponse::InternalServerError()
                    .content_type("text/plain; charset=utf-8")
                    .body("Internal Server Error")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[actix_web::test]
    async fn not_found_is_plain_text_404() {
        let response = AppError::UserNotFound.error_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = to_bytes(response.into_body()).await.unwrap();
        assert_eq!(body, "User not found");
    }

    #[actix_web::test]
    async fn infrastructure_failures_hide_details() {
        // `BlockingError` is `#[non_exhaustive]`; obtain one from a panicking blocking task.
        let blocking = actix_web::web::block(|| -> () { panic!("cancelled") })
            .await
            .unwrap_err();
        let err = AppError::Blocking(blocking);
        let response = err.error_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(response.into_body()).await.unwrap();
        assert_eq!(body, "Internal Server Error");
    }
}
