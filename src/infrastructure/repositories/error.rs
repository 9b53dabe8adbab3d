use crate::domain::errors::DomainError;

const CNT_CATEGORY_SLUG: &str = "categories_slug_key";
const CNT_CATEGORY_NAME: &str = "categories_name_key";
const CNT_PRODUCT_SLUG: &str = "products_slug_key";
const CNT_PRODUCT_CATEGORY: &str = "products_category_id_fkey";
const CNT_PRODUCT_PRICE_CHECK: &str = "products_price_non_negative_chk";

#[must_use]
#[allow(clippy::needless_pass_by_value)]
pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_CATEGORY_SLUG | CNT_PRODUCT_SLUG => {
                        DomainError::Conflict("slug already exists".into())
                    }
                    CNT_CATEGORY_NAME => {
                        DomainError::Conflict("category name already exists".into())
                    }
                    CNT_PRODUCT_CATEGORY => DomainError::NotFound("category not found".into()),
                    CNT_PRODUCT_PRICE_CHECK => {
                        DomainError::Validation("price must not be negative".into())
                    }
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
