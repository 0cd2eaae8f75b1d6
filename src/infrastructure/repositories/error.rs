// src/infrastructure/repositories/error.rs
use crate::domain::errors::DomainError;

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::RowNotFound => DomainError::NotFound("record not found".into()),
        sqlx::Error::PoolTimedOut => {
            DomainError::Persistence("timed out waiting for a database connection".into())
        }
        sqlx::Error::Database(db_err) => {
            if let Some(code) = db_err.code() {
                // undefined_function: the sport procedure has not been migrated in
                if code.as_ref() == "42883" {
                    return DomainError::Persistence(format!(
                        "missing database function: {}",
                        db_err.message()
                    ));
                }
            }
            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
