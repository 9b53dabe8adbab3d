// tests/support/mocks/repos.rs
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use beeshop_core::domain::{
    category::{Category, CategoryId, CategoryName, CategoryRepository, NewCategory},
    contact::{Contact, ContactId, ContactRepository, NewContact},
    errors::{DomainError, DomainResult},
    pagination::{Page, PageRequest},
    post::{NewPost, Post, PostId, PostRepository},
    product::{NewProduct, Product, ProductId, ProductRepository},
    slug::{Slug, SlugIndex},
};

#[derive(Default)]
struct Tables {
    next_id: i64,
    categories: Vec<Category>,
    products: Vec<Product>,
    posts: Vec<Post>,
    contacts: Vec<Contact>,
}

impl Tables {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

/// One in-memory database backing every repository trait, so cross-table
/// checks such as "category still has products" behave like Postgres.
#[derive(Default)]
pub struct InMemoryDb {
    tables: Mutex<Tables>,
}

fn page_of<T: Clone>(
    rows: &[T],
    request: &PageRequest,
    matches: impl Fn(&T) -> bool,
) -> Page<T> {
    let mut filtered: Vec<T> = rows.iter().filter(|row| matches(row)).cloned().collect();
    // newest first: rows are appended in creation order
    filtered.reverse();
    let total = filtered.len() as u64;
    let items = filtered
        .into_iter()
        .skip(request.offset() as usize)
        .take(request.limit as usize)
        .collect();
    Page::new(items, total)
}

fn contains_ci(haystack: &str, needle: Option<&String>) -> bool {
    match needle {
        Some(needle) => haystack.to_lowercase().contains(&needle.to_lowercase()),
        None => true,
    }
}

impl InMemoryDb {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn categories(&self) -> Vec<Category> {
        self.tables.lock().unwrap().categories.clone()
    }

    pub fn products(&self) -> Vec<Product> {
        self.tables.lock().unwrap().products.clone()
    }

    pub fn posts(&self) -> Vec<Post> {
        self.tables.lock().unwrap().posts.clone()
    }

    pub fn contacts(&self) -> Vec<Contact> {
        self.tables.lock().unwrap().contacts.clone()
    }
}

#[async_trait]
impl SlugIndex<CategoryId> for InMemoryDb {
    async fn slug_exists(&self, slug: &Slug, exclude: Option<CategoryId>) -> DomainResult<bool> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .categories
            .iter()
            .any(|c| c.slug == *slug && Some(c.id) != exclude))
    }
}

#[async_trait]
impl CategoryRepository for InMemoryDb {
    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.categories.iter().find(|c| c.id == id).cloned())
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Category>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.categories.iter().find(|c| c.slug == *slug).cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Category>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.categories.iter().rev().cloned().collect())
    }

    async fn name_exists(
        &self,
        name: &CategoryName,
        exclude: Option<CategoryId>,
    ) -> DomainResult<bool> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .categories
            .iter()
            .any(|c| c.name == *name && Some(c.id) != exclude))
    }

    async fn insert(&self, category: NewCategory) -> DomainResult<Category> {
        let mut tables = self.tables.lock().unwrap();
        if tables.categories.iter().any(|c| c.slug == category.slug) {
            return Err(DomainError::Conflict("slug already exists".into()));
        }
        if tables
            .categories
            .iter()
            .any(|c| c.name.as_str() == category.name.as_str())
        {
            return Err(DomainError::Conflict("category name already exists".into()));
        }
        let created = Category {
            id: CategoryId(tables.next_id()),
            name: category.name,
            slug: category.slug,
            image: category.image,
            created_at: category.created_at,
            updated_at: category.updated_at,
        };
        tables.categories.push(created.clone());
        Ok(created)
    }

    async fn update(&self, category: &Category) -> DomainResult<Category> {
        let mut tables = self.tables.lock().unwrap();
        if tables
            .categories
            .iter()
            .any(|c| c.slug == category.slug && c.id != category.id)
        {
            return Err(DomainError::Conflict("slug already exists".into()));
        }
        if tables
            .categories
            .iter()
            .any(|c| c.name == category.name && c.id != category.id)
        {
            return Err(DomainError::Conflict("category name already exists".into()));
        }
        let row = tables
            .categories
            .iter_mut()
            .find(|c| c.id == category.id)
            .ok_or_else(|| DomainError::NotFound("category not found".into()))?;
        *row = category.clone();
        Ok(category.clone())
    }

    async fn delete(&self, id: CategoryId) -> DomainResult<()> {
        let mut tables = self.tables.lock().unwrap();
        let before = tables.categories.len();
        tables.categories.retain(|c| c.id != id);
        if tables.categories.len() == before {
            return Err(DomainError::NotFound("category not found".into()));
        }
        Ok(())
    }

    async fn count_products(&self, id: CategoryId) -> DomainResult<u64> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.products.iter().filter(|p| p.category_id == id).count() as u64)
    }
}

#[async_trait]
impl SlugIndex<ProductId> for InMemoryDb {
    async fn slug_exists(&self, slug: &Slug, exclude: Option<ProductId>) -> DomainResult<bool> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .products
            .iter()
            .any(|p| p.slug == *slug && Some(p.id) != exclude))
    }
}

#[async_trait]
impl ProductRepository for InMemoryDb {
    async fn find_by_id(&self, id: ProductId) -> DomainResult<Option<Product>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.products.iter().find(|p| p.id == id).cloned())
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Product>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.products.iter().find(|p| p.slug == *slug).cloned())
    }

    async fn list_page(&self, request: &PageRequest) -> DomainResult<Page<Product>> {
        let tables = self.tables.lock().unwrap();
        Ok(page_of(&tables.products, request, |p| {
            contains_ci(p.name.as_str(), request.search.as_ref())
        }))
    }

    async fn insert(&self, product: NewProduct) -> DomainResult<Product> {
        let mut tables = self.tables.lock().unwrap();
        if tables.products.iter().any(|p| p.slug == product.slug) {
            return Err(DomainError::Conflict("slug already exists".into()));
        }
        if !tables.categories.iter().any(|c| c.id == product.category_id) {
            return Err(DomainError::NotFound("category not found".into()));
        }
        let created = Product {
            id: ProductId(tables.next_id()),
            name: product.name,
            slug: product.slug,
            price: product.price,
            code: product.code,
            category_id: product.category_id,
            images: product.images,
            content: product.content,
            created_at: product.created_at,
            updated_at: product.updated_at,
        };
        tables.products.push(created.clone());
        Ok(created)
    }

    async fn update(&self, product: &Product) -> DomainResult<Product> {
        let mut tables = self.tables.lock().unwrap();
        if tables
            .products
            .iter()
            .any(|p| p.slug == product.slug && p.id != product.id)
        {
            return Err(DomainError::Conflict("slug already exists".into()));
        }
        let row = tables
            .products
            .iter_mut()
            .find(|p| p.id == product.id)
            .ok_or_else(|| DomainError::NotFound("product not found".into()))?;
        *row = product.clone();
        Ok(product.clone())
    }

    async fn delete(&self, id: ProductId) -> DomainResult<()> {
        let mut tables = self.tables.lock().unwrap();
        let before = tables.products.len();
        tables.products.retain(|p| p.id != id);
        if tables.products.len() == before {
            return Err(DomainError::NotFound("product not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl PostRepository for InMemoryDb {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.posts.iter().find(|p| p.id == id).cloned())
    }

    async fn list_page(&self, request: &PageRequest) -> DomainResult<Page<Post>> {
        let tables = self.tables.lock().unwrap();
        Ok(page_of(&tables.posts, request, |p| {
            contains_ci(p.title.as_str(), request.search.as_ref())
        }))
    }

    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let mut tables = self.tables.lock().unwrap();
        let created = Post {
            id: PostId(tables.next_id()),
            title: post.title,
            excerpt: post.excerpt,
            image: post.image,
            content: post.content,
            created_by: post.created_by,
            created_at: post.created_at,
            updated_at: post.updated_at,
        };
        tables.posts.push(created.clone());
        Ok(created)
    }

    async fn update(&self, post: &Post) -> DomainResult<Post> {
        let mut tables = self.tables.lock().unwrap();
        let row = tables
            .posts
            .iter_mut()
            .find(|p| p.id == post.id)
            .ok_or_else(|| DomainError::NotFound("post not found".into()))?;
        *row = post.clone();
        Ok(post.clone())
    }

    async fn delete(&self, id: PostId) -> DomainResult<()> {
        let mut tables = self.tables.lock().unwrap();
        let before = tables.posts.len();
        tables.posts.retain(|p| p.id != id);
        if tables.posts.len() == before {
            return Err(DomainError::NotFound("post not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ContactRepository for InMemoryDb {
    async fn find_by_id(&self, id: ContactId) -> DomainResult<Option<Contact>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.contacts.iter().find(|c| c.id == id).cloned())
    }

    async fn list_page(&self, request: &PageRequest) -> DomainResult<Page<Contact>> {
        let tables = self.tables.lock().unwrap();
        Ok(page_of(&tables.contacts, request, |c| {
            contains_ci(&c.details.title, request.search.as_ref())
        }))
    }

    async fn insert(&self, contact: NewContact) -> DomainResult<Contact> {
        let mut tables = self.tables.lock().unwrap();
        let created = Contact {
            id: ContactId(tables.next_id()),
            details: contact.details,
            created_at: contact.created_at,
            updated_at: contact.updated_at,
        };
        tables.contacts.push(created.clone());
        Ok(created)
    }

    async fn update(&self, contact: &Contact) -> DomainResult<Contact> {
        let mut tables = self.tables.lock().unwrap();
        let row = tables
            .contacts
            .iter_mut()
            .find(|c| c.id == contact.id)
            .ok_or_else(|| DomainError::NotFound("contact not found".into()))?;
        *row = contact.clone();
        Ok(contact.clone())
    }

    async fn delete(&self, id: ContactId) -> DomainResult<()> {
        let mut tables = self.tables.lock().unwrap();
        let before = tables.contacts.len();
        tables.contacts.retain(|c| c.id != id);
        if tables.contacts.len() == before {
            return Err(DomainError::NotFound("contact not found".into()));
        }
        Ok(())
    }
}

/// Wraps [`InMemoryDb`] but reports every slug and category name as free,
/// so a concurrent writer that claimed the slug first is only noticed when
/// the unique index rejects the insert.
pub struct StaleSlugIndex {
    db: Arc<InMemoryDb>,
}

impl StaleSlugIndex {
    pub fn new(db: Arc<InMemoryDb>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SlugIndex<CategoryId> for StaleSlugIndex {
    async fn slug_exists(&self, _slug: &Slug, _exclude: Option<CategoryId>) -> DomainResult<bool> {
        Ok(false)
    }
}

#[async_trait]
impl CategoryRepository for StaleSlugIndex {
    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        CategoryRepository::find_by_id(self.db.as_ref(), id).await
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Category>> {
        CategoryRepository::find_by_slug(self.db.as_ref(), slug).await
    }

    async fn list(&self) -> DomainResult<Vec<Category>> {
        self.db.list().await
    }

    async fn name_exists(
        &self,
        _name: &CategoryName,
        _exclude: Option<CategoryId>,
    ) -> DomainResult<bool> {
        Ok(false)
    }

    async fn insert(&self, category: NewCategory) -> DomainResult<Category> {
        CategoryRepository::insert(self.db.as_ref(), category).await
    }

    async fn update(&self, category: &Category) -> DomainResult<Category> {
        CategoryRepository::update(self.db.as_ref(), category).await
    }

    async fn delete(&self, id: CategoryId) -> DomainResult<()> {
        CategoryRepository::delete(self.db.as_ref(), id).await
    }

    async fn count_products(&self, id: CategoryId) -> DomainResult<u64> {
        self.db.count_products(id).await
    }
}

#[async_trait]
impl SlugIndex<ProductId> for StaleSlugIndex {
    async fn slug_exists(&self, _slug: &Slug, _exclude: Option<ProductId>) -> DomainResult<bool> {
        Ok(false)
    }
}

#[async_trait]
impl ProductRepository for StaleSlugIndex {
    async fn find_by_id(&self, id: ProductId) -> DomainResult<Option<Product>> {
        ProductRepository::find_by_id(self.db.as_ref(), id).await
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Product>> {
        ProductRepository::find_by_slug(self.db.as_ref(), slug).await
    }

    async fn list_page(&self, request: &PageRequest) -> DomainResult<Page<Product>> {
        ProductRepository::list_page(self.db.as_ref(), request).await
    }

    async fn insert(&self, product: NewProduct) -> DomainResult<Product> {
        ProductRepository::insert(self.db.as_ref(), product).await
    }

    async fn update(&self, product: &Product) -> DomainResult<Product> {
        ProductRepository::update(self.db.as_ref(), product).await
    }

    async fn delete(&self, id: ProductId) -> DomainResult<()> {
        ProductRepository::delete(self.db.as_ref(), id).await
    }
}
