use std::sync::Arc;

use async_trait::async_trait;

use super::errors::CarouselError;
use super::models::CarouselSlide;
use super::models::SlideDraft;
use super::models::SlideId;
use super::ports::CarouselRepository;
use super::ports::CarouselServicePort;

/// Concrete implementation of CarouselServicePort.
pub struct CarouselService<CR>
where
    CR: CarouselRepository,
{
    repository: Arc<CR>,
}

impl<CR> CarouselService<CR>
where
    CR: CarouselRepository,
{
    pub fn new(repository: Arc<CR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<CR> CarouselServicePort for CarouselService<CR>
where
    CR: CarouselRepository,
{
    async fn list_slides(&self) -> Result<Vec<CarouselSlide>, CarouselError> {
        self.repository.list_all().await
    }

    async fn create_slide(&self, draft: SlideDraft) -> Result<CarouselSlide, CarouselError> {
        let slide = self.repository.create(draft).await?;
        tracing::info!(slide_id = %slide.id, order = slide.order, "Carousel slide created");
        Ok(slide)
    }

    async fn update_slide(
        &self,
        id: SlideId,
        draft: SlideDraft,
    ) -> Result<CarouselSlide, CarouselError> {
        let slide = self.repository.update(id, draft).await?;
        tracing::info!(slide_id = %slide.id, "Carousel slide updated");
        Ok(slide)
    }

    async fn delete_slide(&self, id: SlideId) -> Result<(), CarouselError> {
        self.repository.delete(id).await?;
        tracing::info!(slide_id = %id, "Carousel slide deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use mockall::mock;

    use super::*;
    use crate::domain::carousel::models::LinkType;
    use crate::domain::carousel::models::SlideEffect;
    use crate::domain::values::Label;

    mock! {
        pub TestCarouselRepository {}

        #[async_trait]
        impl CarouselRepository for TestCarouselRepository {
            async fn list_all(&self) -> Result<Vec<CarouselSlide>, CarouselError>;
            async fn create(&self, draft: SlideDraft) -> Result<CarouselSlide, CarouselError>;
            async fn update(&self, id: SlideId, draft: SlideDraft) -> Result<CarouselSlide, CarouselError>;
            async fn delete(&self, id: SlideId) -> Result<(), CarouselError>;
        }
    }

    fn draft() -> SlideDraft {
        SlideDraft {
            title: Label::new("title", "Summer sale".to_string()).unwrap(),
            subtitle: None,
            image_url: Label::new("image_url", "/uploads/summer.jpg".to_string()).unwrap(),
            link_type: LinkType::External,
            link_target: Label::new("link_target", "https://example.com".to_string()).unwrap(),
            button_text: Some("Shop now".to_string()),
            order: 3,
            effect: SlideEffect::Fade,
        }
    }

    #[tokio::test]
    async fn test_update_slide_replaces_all_fields() {
        let mut repository = MockTestCarouselRepository::new();
        repository
            .expect_update()
            .withf(|id, draft| *id == SlideId(5) && *draft == self::draft())
            .times(1)
            .returning(|id, draft| {
                Ok(CarouselSlide {
                    id,
                    title: draft.title,
                    subtitle: draft.subtitle,
                    image_url: draft.image_url,
                    link_type: draft.link_type,
                    link_target: draft.link_target,
                    button_text: draft.button_text,
                    order: draft.order,
                    effect: draft.effect,
                    created_at: Utc::now(),
                    updated_at: Utc::now(),
                })
            });

        let service = CarouselService::new(Arc::new(repository));
        let slide = service.update_slide(SlideId(5), draft()).await.unwrap();

        assert_eq!(slide.effect, SlideEffect::Fade);
        assert_eq!(slide.order, 3);
    }

    #[tokio::test]
    async fn test_update_missing_slide_is_not_found() {
        let mut repository = MockTestCarouselRepository::new();
        repository
            .expect_update()
            .returning(|id, _| Err(CarouselError::NotFound(id.to_string())));

        let service = CarouselService::new(Arc::new(repository));
        let result = service.update_slide(SlideId(9), draft()).await;

        assert!(matches!(result, Err(CarouselError::NotFound(_))));
    }
}
