// src/infrastructure/repositories/postgres_product.rs
use super::map_sqlx;
use crate::domain::asset::AssetList;
use crate::domain::category::CategoryId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::pagination::{Page, PageRequest};
use crate::domain::product::{
    NewProduct, Price, Product, ProductCode, ProductId, ProductName, ProductRepository,
};
use crate::domain::slug::{Slug, SlugIndex};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder, types::Json};

const PRODUCT_COLUMNS: &str =
    "id, name, slug, price, code, category_id, images, content, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresProductRepository {
    pool: PgPool,
}

impl PostgresProductRepository {
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn push_search<'a>(builder: &mut QueryBuilder<'a, Postgres>, pattern: Option<String>) {
        if let Some(pattern) = pattern {
            builder.push(" WHERE name ILIKE ");
            builder.push_bind(pattern);
            builder.push(" ESCAPE '\\'");
        }
    }
}

#[derive(Debug, FromRow)]
struct ProductRow {
    id: i64,
    name: String,
    slug: String,
    price: i64,
    code: String,
    category_id: i64,
    images: Json<AssetList>,
    content: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ProductRow> for Product {
    type Error = DomainError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ProductId::new(row.id)?,
            name: ProductName::new(row.name)?,
            slug: Slug::new(row.slug)?,
            price: Price::new(row.price)?,
            code: ProductCode::new(row.code)?,
            category_id: CategoryId::new(row.category_id)?,
            images: row.images.0,
            content: row.content,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl SlugIndex<ProductId> for PostgresProductRepository {
    async fn slug_exists(&self, slug: &Slug, exclude: Option<ProductId>) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM products WHERE slug = $1 AND ($2::BIGINT IS NULL OR id <> $2))",
        )
        .bind(slug.as_str())
        .bind(exclude.map(i64::from))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)
    }
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn find_by_id(&self, id: ProductId) -> DomainResult<Option<Product>> {
        let row = sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Product::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Product>> {
        let row = sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE slug = $1"
        ))
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Product::try_from).transpose()
    }

    async fn list_page(&self, request: &PageRequest) -> DomainResult<Page<Product>> {
        let mut count: QueryBuilder<Postgres> = QueryBuilder::new("SELECT COUNT(*) FROM products");
        Self::push_search(&mut count, request.search_pattern());
        let total = count
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {PRODUCT_COLUMNS} FROM products"));
        Self::push_search(&mut builder, request.search_pattern());
        builder.push(" ORDER BY created_at DESC, id DESC LIMIT ");
        builder.push_bind(i64::from(request.limit));
        builder.push(" OFFSET ");
        builder.push_bind(request.offset());

        let rows = builder
            .build_query_as::<ProductRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let items = rows
            .into_iter()
            .map(Product::try_from)
            .collect::<DomainResult<Vec<_>>>()?;
        Ok(Page::new(items, u64::try_from(total).unwrap_or(0)))
    }

    async fn insert(&self, product: NewProduct) -> DomainResult<Product> {
        let NewProduct {
            name,
            slug,
            price,
            code,
            category_id,
            images,
            content,
            created_at,
            updated_at,
        } = product;

        let row = sqlx::query_as::<_, ProductRow>(&format!(
            "INSERT INTO products (name, slug, price, code, category_id, images, content, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {PRODUCT_COLUMNS}"
        ))
        .bind(name.as_str())
        .bind(slug.as_str())
        .bind(price.amount())
        .bind(code.as_str())
        .bind(i64::from(category_id))
        .bind(Json(images))
        .bind(content)
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Product::try_from(row)
    }

    async fn update(&self, product: &Product) -> DomainResult<Product> {
        let row = sqlx::query_as::<_, ProductRow>(&format!(
            "UPDATE products
             SET name = $1, slug = $2, price = $3, code = $4, category_id = $5,
                 images = $6, content = $7, updated_at = $8
             WHERE id = $9
             RETURNING {PRODUCT_COLUMNS}"
        ))
        .bind(product.name.as_str())
        .bind(product.slug.as_str())
        .bind(product.price.amount())
        .bind(product.code.as_str())
        .bind(i64::from(product.category_id))
        .bind(Json(&product.images))
        .bind(product.content.as_str())
        .bind(product.updated_at)
        .bind(i64::from(product.id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("product not found".into()))?;

        Product::try_from(row)
    }

    async fn delete(&self, id: ProductId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("product not found".into()));
        }
        Ok(())
    }
}
