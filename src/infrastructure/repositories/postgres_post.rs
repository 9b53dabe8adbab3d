// src/infrastructure/repositories/postgres_post.rs
use super::map_sqlx;
use crate::domain::asset::AssetReference;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::pagination::{Page, PageRequest};
use crate::domain::post::{NewPost, Post, PostExcerpt, PostId, PostRepository, PostTitle};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder, types::Json};

const POST_COLUMNS: &str = "id, title, excerpt, image, content, created_by, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresPostRepository {
    pool: PgPool,
}

impl PostgresPostRepository {
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PostRow {
    id: i64,
    title: String,
    excerpt: Option<String>,
    image: Json<AssetReference>,
    content: String,
    created_by: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<PostRow> for Post {
    type Error = DomainError;

    fn try_from(row: PostRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: PostId::new(row.id)?,
            title: PostTitle::new(row.title)?,
            excerpt: PostExcerpt::parse(row.excerpt),
            image: row.image.0,
            content: row.content,
            created_by: row.created_by,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(&format!(
            "SELECT {POST_COLUMNS} FROM posts WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Post::try_from).transpose()
    }

    async fn list_page(&self, request: &PageRequest) -> DomainResult<Page<Post>> {
        let pattern = request.search_pattern();

        let mut count: QueryBuilder<Postgres> = QueryBuilder::new("SELECT COUNT(*) FROM posts");
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
            QueryBuilder::new(format!("SELECT {POST_COLUMNS} FROM posts"));
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
            .build_query_as::<PostRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let items = rows
            .into_iter()
            .map(Post::try_from)
            .collect::<DomainResult<Vec<_>>>()?;
        Ok(Page::new(items, u64::try_from(total).unwrap_or(0)))
    }

    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let NewPost {
            title,
            excerpt,
            image,
            content,
            created_by,
            created_at,
            updated_at,
        } = post;

        let row = sqlx::query_as::<_, PostRow>(&format!(
            "INSERT INTO posts (title, excerpt, image, content, created_by, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {POST_COLUMNS}"
        ))
        .bind(title.as_str())
        .bind(excerpt.map(PostExcerpt::into_inner))
        .bind(Json(image))
        .bind(content)
        .bind(created_by)
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Post::try_from(row)
    }

    async fn update(&self, post: &Post) -> DomainResult<Post> {
        let row = sqlx::query_as::<_, PostRow>(&format!(
            "UPDATE posts SET title = $1, excerpt = $2, image = $3, content = $4, updated_at = $5
             WHERE id = $6
             RETURNING {POST_COLUMNS}"
        ))
        .bind(post.title.as_str())
        .bind(post.excerpt.as_ref().map(PostExcerpt::as_str))
        .bind(Json(&post.image))
        .bind(post.content.as_str())
        .bind(post.updated_at)
        .bind(i64::from(post.id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("post not found".into()))?;

        Post::try_from(row)
    }

    async fn delete(&self, id: PostId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("post not found".into()));
        }
        Ok(())
    }
}
