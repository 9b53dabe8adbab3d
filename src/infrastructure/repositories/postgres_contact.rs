// src/infrastructure/repositories/postgres_contact.rs
use super::map_sqlx;
use crate::domain::contact::{Contact, ContactDetails, ContactId, ContactRepository, NewContact};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::pagination::{Page, PageRequest};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const CONTACT_COLUMNS: &str = "id, title, name, email, phone, content, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresContactRepository {
    pool: PgPool,
}

impl PostgresContactRepository {
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ContactRow {
    id: i64,
    title: String,
    name: String,
    email: String,
    phone: String,
    content: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ContactRow> for Contact {
    type Error = DomainError;

    fn try_from(row: ContactRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ContactId::new(row.id)?,
            details: ContactDetails {
                title: row.title,
                name: row.name,
                email: row.email,
                phone: row.phone,
                content: row.content,
            },
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl ContactRepository for PostgresContactRepository {
    async fn find_by_id(&self, id: ContactId) -> DomainResult<Option<Contact>> {
        let row = sqlx::query_as::<_, ContactRow>(&format!(
            "SELECT {CONTACT_COLUMNS} FROM contacts WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Contact::try_from).transpose()
    }

    async fn list_page(&self, request: &PageRequest) -> DomainResult<Page<Contact>> {
        let pattern = request.search_pattern();

        let mut count: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT COUNT(*) FROM contacts");
        if let Some(pattern) = pattern.clone() {
            count.push(" WHERE title ILIKE ");
            count.push_bind(pattern);
            count.push(" ESCAPE '\\'");
        }
        let total = count
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {CONTACT_COLUMNS} FROM contacts"));
        if let Some(pattern) = pattern {
            builder.push(" WHERE title ILIKE ");
            builder.push_bind(pattern);
            builder.push(" ESCAPE '\\'");
        }
        builder.push(" ORDER BY created_at DESC, id DESC LIMIT ");
        builder.push_bind(i64::from(request.limit));
        builder.push(" OFFSET ");
        builder.push_bind(request.offset());

        let rows = builder
            .build_query_as::<ContactRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let items = rows
            .into_iter()
            .map(Contact::try_from)
            .collect::<DomainResult<Vec<_>>>()?;
        Ok(Page::new(items, u64::try_from(total).unwrap_or(0)))
    }

    async fn insert(&self, contact: NewContact) -> DomainResult<Contact> {
        let NewContact {
            details,
            created_at,
            updated_at,
        } = contact;

        let row = sqlx::query_as::<_, ContactRow>(&format!(
            "INSERT INTO contacts (title, name, email, phone, content, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {CONTACT_COLUMNS}"
        ))
        .bind(details.title)
        .bind(details.name)
        .bind(details.email)
        .bind(details.phone)
        .bind(details.content)
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Contact::try_from(row)
    }

    async fn update(&self, contact: &Contact) -> DomainResult<Contact> {
        let details = &contact.details;
        let row = sqlx::query_as::<_, ContactRow>(&format!(
            "UPDATE contacts
             SET title = $1, name = $2, email = $3, phone = $4, content = $5, updated_at = $6
             WHERE id = $7
             RETURNING {CONTACT_COLUMNS}"
        ))
        .bind(details.title.as_str())
        .bind(details.name.as_str())
        .bind(details.email.as_str())
        .bind(details.phone.as_str())
        .bind(details.content.as_str())
        .bind(contact.updated_at)
        .bind(i64::from(contact.id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("contact not found".into()))?;

        Contact::try_from(row)
    }

    async fn delete(&self, id: ContactId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM contacts WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("contact not found".into()));
        }
        Ok(())
    }
}
