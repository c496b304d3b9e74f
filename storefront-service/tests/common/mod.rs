#![allow(dead_code)]

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::OnceLock;

use async_trait::async_trait;
use auth::Authenticator;
use auth::Role;
use chrono::Utc;
use storefront_service::domain::carousel::errors::CarouselError;
use storefront_service::domain::carousel::models::CarouselSlide;
use storefront_service::domain::carousel::models::SlideDraft;
use storefront_service::domain::carousel::models::SlideId;
use storefront_service::domain::carousel::ports::CarouselRepository;
use storefront_service::domain::carousel::service::CarouselService;
use storefront_service::domain::category::errors::CategoryError;
use storefront_service::domain::category::models::Category;
use storefront_service::domain::category::models::CategoryDraft;
use storefront_service::domain::category::models::CategoryId;
use storefront_service::domain::category::ports::CategoryRepository;
use storefront_service::domain::category::service::CategoryService;
use storefront_service::domain::enquiry::errors::EnquiryError;
use storefront_service::domain::enquiry::models::Enquiry;
use storefront_service::domain::enquiry::models::EnquiryId;
use storefront_service::domain::enquiry::models::EnquiryStatus;
use storefront_service::domain::enquiry::models::NewEnquiry;
use storefront_service::domain::enquiry::ports::EnquiryRepository;
use storefront_service::domain::enquiry::service::EnquiryService;
use storefront_service::domain::page::errors::PageError;
use storefront_service::domain::page::models::Page;
use storefront_service::domain::page::models::PageDraft;
use storefront_service::domain::page::models::PageId;
use storefront_service::domain::page::models::Visibility;
use storefront_service::domain::page::ports::PageRepository;
use storefront_service::domain::page::service::PageService;
use storefront_service::domain::product::errors::ProductError;
use storefront_service::domain::product::models::Product;
use storefront_service::domain::product::models::ProductDraft;
use storefront_service::domain::product::models::ProductId;
use storefront_service::domain::product::ports::ProductRepository;
use storefront_service::domain::product::service::ProductService;
use storefront_service::domain::user::errors::UserError;
use storefront_service::domain::user::models::EmailAddress;
use storefront_service::domain::user::models::User;
use storefront_service::domain::user::models::UserId;
use storefront_service::domain::user::ports::UserRepository;
use storefront_service::domain::user::service::AuthService;
use storefront_service::domain::values::Slug;
use storefront_service::inbound::http::router::create_router;
use storefront_service::inbound::http::router::AppState;

pub const JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

pub const ADMIN_EMAIL: &str = "admin@example.com";
pub const ADMIN_PASSWORD: &str = "admin123";
pub const EDITOR_EMAIL: &str = "editor@example.com";
pub const EDITOR_PASSWORD: &str = "editor123";
pub const USER_EMAIL: &str = "user@example.com";
pub const USER_PASSWORD: &str = "user123";

/// Test application that spawns the real router over in-memory storage
pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub store: Arc<InMemoryStore>,
    pub authenticator: Arc<Authenticator>,
    pub api_client: reqwest::Client,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let store = Arc::new(InMemoryStore::default());
        store.users.lock().unwrap().extend(seeded_users().iter().cloned());

        let authenticator = Arc::new(Authenticator::new(JWT_SECRET, 24));

        let state = AppState {
            auth_service: Arc::new(AuthService::new(
                Arc::clone(&store),
                Arc::clone(&authenticator),
            )),
            category_service: Arc::new(CategoryService::new(Arc::clone(&store))),
            product_service: Arc::new(ProductService::new(Arc::clone(&store))),
            page_service: Arc::new(PageService::new(Arc::clone(&store))),
            carousel_service: Arc::new(CarouselService::new(Arc::clone(&store))),
            enquiry_service: Arc::new(EnquiryService::new(Arc::clone(&store))),
            authenticator: Arc::clone(&authenticator),
        };

        let router = create_router(state);

        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            port,
            store,
            authenticator,
            api_client: reqwest::Client::new(),
        }
    }

    /// Issue a valid token for the seeded account with the given role
    pub fn token_for(&self, role: Role) -> String {
        let user = seeded_users()
            .iter()
            .find(|user| user.role == role)
            .expect("No seeded user with role");

        self.authenticator
            .issue_token(user.id, role)
            .expect("Failed to issue token")
            .access_token
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Helper to make POST request with Bearer token
    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }

    /// Helper to make PUT request with Bearer token
    pub fn put_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .put(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    /// Helper to make DELETE request with Bearer token
    pub fn delete_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .delete(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }
}

/// One account per role, hashed once per test binary.
fn seeded_users() -> &'static [User] {
    static USERS: OnceLock<Vec<User>> = OnceLock::new();

    USERS.get_or_init(|| {
        let authenticator = Authenticator::new(JWT_SECRET, 24);
        [
            ("Admin User", ADMIN_EMAIL, ADMIN_PASSWORD, Role::Admin),
            ("Editor User", EDITOR_EMAIL, EDITOR_PASSWORD, Role::Editor),
            ("Regular User", USER_EMAIL, USER_PASSWORD, Role::User),
        ]
        .into_iter()
        .map(|(name, email, password, role)| User {
            id: UserId::new(),
            name: name.to_string(),
            email: EmailAddress::new(email.to_string()).unwrap(),
            password_hash: authenticator.hash_password(password).unwrap(),
            role,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        })
        .collect()
    })
}

/// In-memory stand-in for every repository port, enforcing the same
/// uniqueness, reference and ordering rules as the Postgres schema.
#[derive(Default)]
pub struct InMemoryStore {
    pub users: Mutex<Vec<User>>,
    pub categories: Mutex<Vec<Category>>,
    pub products: Mutex<Vec<Product>>,
    pub pages: Mutex<Vec<Page>>,
    pub slides: Mutex<Vec<CarouselSlide>>,
    pub enquiries: Mutex<Vec<Enquiry>>,
    next_id: Mutex<i32>,
}

impl InMemoryStore {
    fn next_id(&self) -> i32 {
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        *next_id
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.email.as_str() == email).cloned())
    }

    async fn create(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == user.email) {
            return Err(UserError::EmailAlreadyExists(user.email.to_string()));
        }
        users.push(user.clone());
        Ok(user)
    }
}

#[async_trait]
impl CategoryRepository for InMemoryStore {
    async fn list_all(&self) -> Result<Vec<Category>, CategoryError> {
        let mut categories = self.categories.lock().unwrap().clone();
        categories.sort_by_key(|c| (c.sort_order, c.id.0));
        Ok(categories)
    }

    async fn create(&self, draft: CategoryDraft) -> Result<Category, CategoryError> {
        let id = self.next_id();
        let mut categories = self.categories.lock().unwrap();
        if categories.iter().any(|c| c.slug == draft.slug) {
            return Err(CategoryError::SlugAlreadyExists(draft.slug.to_string()));
        }
        let category = Category {
            id: CategoryId(id),
            name: draft.name,
            slug: draft.slug,
            sort_order: draft.sort_order,
        };
        categories.push(category.clone());
        Ok(category)
    }

    async fn update(
        &self,
        id: CategoryId,
        draft: CategoryDraft,
    ) -> Result<Category, CategoryError> {
        let mut categories = self.categories.lock().unwrap();
        if categories.iter().any(|c| c.slug == draft.slug && c.id != id) {
            return Err(CategoryError::SlugAlreadyExists(draft.slug.to_string()));
        }
        let category = categories
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| CategoryError::NotFound(id.to_string()))?;
        category.name = draft.name;
        category.slug = draft.slug;
        category.sort_order = draft.sort_order;
        Ok(category.clone())
    }

    async fn delete(&self, id: CategoryId) -> Result<(), CategoryError> {
        if self.products.lock().unwrap().iter().any(|p| p.category_id == id) {
            return Err(CategoryError::InUse(id.to_string()));
        }
        let mut categories = self.categories.lock().unwrap();
        let before = categories.len();
        categories.retain(|c| c.id != id);
        if categories.len() == before {
            return Err(CategoryError::NotFound(id.to_string()));
        }
        Ok(())
    }
}

impl InMemoryStore {
    fn category_name(&self, id: CategoryId) -> Option<String> {
        let categories = self.categories.lock().unwrap();
        categories
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.name.as_str().to_string())
    }
}

#[async_trait]
impl ProductRepository for InMemoryStore {
    async fn list(&self, category: Option<Slug>) -> Result<Vec<Product>, ProductError> {
        let category_id = match category {
            Some(slug) => {
                let categories = self.categories.lock().unwrap();
                match categories.iter().find(|c| c.slug == slug) {
                    Some(c) => Some(c.id),
                    None => return Ok(Vec::new()),
                }
            }
            None => None,
        };

        let mut products: Vec<Product> = self
            .products
            .lock()
            .unwrap()
            .iter()
            .filter(|p| category_id.map_or(true, |id| p.category_id == id))
            .cloned()
            .collect();
        products.sort_by(|a, b| (b.created_at, b.id.0).cmp(&(a.created_at, a.id.0)));
        Ok(products)
    }

    async fn find_by_slug(&self, slug: &Slug) -> Result<Option<Product>, ProductError> {
        let products = self.products.lock().unwrap();
        Ok(products.iter().find(|p| &p.slug == slug).cloned())
    }

    async fn create(&self, draft: ProductDraft) -> Result<Product, ProductError> {
        let category_name = self
            .category_name(draft.category_id)
            .ok_or_else(|| ProductError::UnknownCategory(draft.category_id.to_string()))?;
        let id = self.next_id();
        let mut products = self.products.lock().unwrap();
        if products.iter().any(|p| p.sku == draft.sku) {
            return Err(ProductError::SkuAlreadyExists(draft.sku.to_string()));
        }
        if products.iter().any(|p| p.slug == draft.slug) {
            return Err(ProductError::SlugAlreadyExists(draft.slug.to_string()));
        }
        let now = Utc::now();
        let product = Product {
            id: ProductId(id),
            sku: draft.sku,
            name: draft.name,
            slug: draft.slug,
            description_html: draft.description_html,
            price: draft.price,
            main_image_url: draft.main_image_url,
            images: draft.images,
            metadata: draft.metadata,
            category_id: draft.category_id,
            category_name,
            created_at: now,
            updated_at: now,
        };
        products.push(product.clone());
        Ok(product)
    }

    async fn update(&self, id: ProductId, draft: ProductDraft) -> Result<Product, ProductError> {
        let category_name = self
            .category_name(draft.category_id)
            .ok_or_else(|| ProductError::UnknownCategory(draft.category_id.to_string()))?;
        let mut products = self.products.lock().unwrap();
        let product = products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| ProductError::NotFound(id.to_string()))?;
        product.sku = draft.sku;
        product.name = draft.name;
        product.slug = draft.slug;
        product.description_html = draft.description_html;
        product.price = draft.price;
        product.main_image_url = draft.main_image_url;
        product.images = draft.images;
        product.metadata = draft.metadata;
        product.category_id = draft.category_id;
        product.category_name = category_name;
        product.updated_at = Utc::now();
        Ok(product.clone())
    }

    async fn delete(&self, id: ProductId) -> Result<(), ProductError> {
        let mut products = self.products.lock().unwrap();
        let before = products.len();
        products.retain(|p| p.id != id);
        if products.len() == before {
            return Err(ProductError::NotFound(id.to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl PageRepository for InMemoryStore {
    async fn list(&self, visibility: Visibility) -> Result<Vec<Page>, PageError> {
        let mut pages = self.pages.lock().unwrap().clone();
        match visibility {
            Visibility::PublishedOnly => {
                pages.retain(|p| p.published);
                pages.sort_by(|a, b| a.title.as_str().cmp(b.title.as_str()));
            }
            Visibility::All => pages.sort_by(|a, b| b.updated_at.cmp(&a.updated_at)),
        }
        Ok(pages)
    }

    async fn find_by_slug(
        &self,
        slug: &Slug,
        visibility: Visibility,
    ) -> Result<Option<Page>, PageError> {
        let pages = self.pages.lock().unwrap();
        Ok(pages
            .iter()
            .find(|p| &p.slug == slug && (p.published || visibility == Visibility::All))
            .cloned())
    }

    async fn create(&self, draft: PageDraft) -> Result<Page, PageError> {
        let id = self.next_id();
        let mut pages = self.pages.lock().unwrap();
        if pages.iter().any(|p| p.slug == draft.slug) {
            return Err(PageError::SlugAlreadyExists(draft.slug.to_string()));
        }
        let now = Utc::now();
        let page = Page {
            id: PageId(id),
            title: draft.title,
            slug: draft.slug,
            content_html: draft.content_html,
            published: draft.published,
            created_at: now,
            updated_at: now,
        };
        pages.push(page.clone());
        Ok(page)
    }

    async fn update(&self, id: PageId, draft: PageDraft) -> Result<Page, PageError> {
        let mut pages = self.pages.lock().unwrap();
        let page = pages
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| PageError::NotFound(id.to_string()))?;
        page.title = draft.title;
        page.slug = draft.slug;
        page.content_html = draft.content_html;
        page.published = draft.published;
        page.updated_at = Utc::now();
        Ok(page.clone())
    }

    async fn delete(&self, id: PageId) -> Result<(), PageError> {
        let mut pages = self.pages.lock().unwrap();
        let before = pages.len();
        pages.retain(|p| p.id != id);
        if pages.len() == before {
            return Err(PageError::NotFound(id.to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl CarouselRepository for InMemoryStore {
    async fn list_all(&self) -> Result<Vec<CarouselSlide>, CarouselError> {
        let mut slides = self.slides.lock().unwrap().clone();
        slides.sort_by_key(|s| (s.order, s.id.0));
        Ok(slides)
    }

    async fn create(&self, draft: SlideDraft) -> Result<CarouselSlide, CarouselError> {
        let now = Utc::now();
        let slide = CarouselSlide {
            id: SlideId(self.next_id()),
            title: draft.title,
            subtitle: draft.subtitle,
            image_url: draft.image_url,
            link_type: draft.link_type,
            link_target: draft.link_target,
            button_text: draft.button_text,
            order: draft.order,
            effect: draft.effect,
            created_at: now,
            updated_at: now,
        };
        self.slides.lock().unwrap().push(slide.clone());
        Ok(slide)
    }

    async fn update(
        &self,
        id: SlideId,
        draft: SlideDraft,
    ) -> Result<CarouselSlide, CarouselError> {
        let mut slides = self.slides.lock().unwrap();
        let slide = slides
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| CarouselError::NotFound(id.to_string()))?;
        slide.title = draft.title;
        slide.subtitle = draft.subtitle;
        slide.image_url = draft.image_url;
        slide.link_type = draft.link_type;
        slide.link_target = draft.link_target;
        slide.button_text = draft.button_text;
        slide.order = draft.order;
        slide.effect = draft.effect;
        slide.updated_at = Utc::now();
        Ok(slide.clone())
    }

    async fn delete(&self, id: SlideId) -> Result<(), CarouselError> {
        let mut slides = self.slides.lock().unwrap();
        let before = slides.len();
        slides.retain(|s| s.id != id);
        if slides.len() == before {
            return Err(CarouselError::NotFound(id.to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl EnquiryRepository for InMemoryStore {
    async fn create(&self, enquiry: NewEnquiry) -> Result<Enquiry, EnquiryError> {
        let now = Utc::now();
        let enquiry = Enquiry {
            id: EnquiryId(self.next_id()),
            user_info: enquiry.user_info().clone(),
            items: enquiry.items().to_vec(),
            total: enquiry.total(),
            status: EnquiryStatus::New,
            created_at: now,
            updated_at: now,
        };
        self.enquiries.lock().unwrap().push(enquiry.clone());
        Ok(enquiry)
    }

    async fn list_all(&self) -> Result<Vec<Enquiry>, EnquiryError> {
        let mut enquiries = self.enquiries.lock().unwrap().clone();
        enquiries.sort_by(|a, b| (b.created_at, b.id.0).cmp(&(a.created_at, a.id.0)));
        Ok(enquiries)
    }
}
