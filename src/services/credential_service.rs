use actix_web::web;

use crate::constants::BCRYPT_COST;
use crate::error::AppError;

/// Salted bcrypt hash at the configured cost, computed off the async workers.
pub async fn hash_password(password: String) -> Result<String, AppError> {
    let hashed = web::block(move || bcrypt::hash(password, BCRYPT_COST)).await??;
    Ok(hashed)
}

pub async fn verify_password(password: String, hash: String) -> Result<bool, AppError> {
    let valid = web::block(move || bcrypt::verify(password, &hash)).await??;
    Ok(valid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn hash_is_salted_and_verifies() {
        let first = hash_password("hunter2".to_string()).await.unwrap();
        let second = hash_password("hunter2".to_string()).await.unwrap();

        assert_ne!(first, "hunter2");
        assert_ne!(first, second);
        assert!(first.starts_with("$2b$10$"));
        assert!(verify_password("hunter2".to_string(), first).await.unwrap());
    }

    #[actix_web::test]
    async fn wrong_password_does_not_verify() {
        let hash = hash_password("correct".to_string()).await.unwrap();
        assert!(!verify_password("incorrect".to_string(), hash).await.unwrap());
    }

    #[actix_web::test]
    async fn malformed_hash_is_an_error() {
        let result = verify_password("anything".to_string(), "not-a-hash".to_string()).await;
        assert!(matches!(result, Err(AppError::Hashing(_))));
    }

    #[actix_web::test]
    async fn empty_password_is_accepted() {
        let hash = hash_password(String::new()).await.unwrap();
        assert!(verify_password(String::new(), hash).await.unwrap());
    }
}
