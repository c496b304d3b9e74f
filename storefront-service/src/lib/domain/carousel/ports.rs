use async_trait::async_trait;

use super::errors::CarouselError;
use super::models::CarouselSlide;
use super::models::SlideDraft;
use super::models::SlideId;

/// Port for carousel operations.
#[async_trait]
pub trait CarouselServicePort: Send + Sync + 'static {
    /// All slides in display order.
    async fn list_slides(&self) -> Result<Vec<CarouselSlide>, CarouselError>;

    async fn create_slide(&self, draft: SlideDraft) -> Result<CarouselSlide, CarouselError>;

    /// # Errors
    /// * `NotFound` - Slide does not exist
    async fn update_slide(
        &self,
        id: SlideId,
        draft: SlideDraft,
    ) -> Result<CarouselSlide, CarouselError>;

    /// # Errors
    /// * `NotFound` - Slide does not exist
    async fn delete_slide(&self, id: SlideId) -> Result<(), CarouselError>;
}

/// Persistence operations for carousel slides.
#[async_trait]
pub trait CarouselRepository: Send + Sync + 'static {
    /// Slides ordered by `order` ascending.
    async fn list_all(&self) -> Result<Vec<CarouselSlide>, CarouselError>;

    async fn create(&self, draft: SlideDraft) -> Result<CarouselSlide, CarouselError>;

    async fn update(&self, id: SlideId, draft: SlideDraft)
        -> Result<CarouselSlide, CarouselError>;

    async fn delete(&self, id: SlideId) -> Result<(), CarouselError>;
}
