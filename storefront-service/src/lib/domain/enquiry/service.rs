use std::sync::Arc;

use async_trait::async_trait;

use super::errors::EnquiryError;
use super::models::Enquiry;
use super::models::NewEnquiry;
use super::ports::EnquiryRepository;
use super::ports::EnquiryServicePort;

/// Concrete implementation of EnquiryServicePort.
pub struct EnquiryService<ER>
where
    ER: EnquiryRepository,
{
    repository: Arc<ER>,
}

impl<ER> EnquiryService<ER>
where
    ER: EnquiryRepository,
{
    pub fn new(repository: Arc<ER>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<ER> EnquiryServicePort for EnquiryService<ER>
where
    ER: EnquiryRepository,
{
    async fn submit_enquiry(&self, enquiry: NewEnquiry) -> Result<Enquiry, EnquiryError> {
        let enquiry = self.repository.create(enquiry).await?;
        tracing::info!(
            enquiry_id = %enquiry.id,
            items = enquiry.items.len(),
            total_cents = enquiry.total.value(),
            "Enquiry received"
        );
        Ok(enquiry)
    }

    async fn list_enquiries(&self) -> Result<Vec<Enquiry>, EnquiryError> {
        self.repository.list_all().await
    }
}
