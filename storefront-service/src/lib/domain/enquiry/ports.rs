use async_trait::async_trait;

use super::errors::EnquiryError;
use super::models::Enquiry;
use super::models::NewEnquiry;

/// Port for enquiry operations.
#[async_trait]
pub trait EnquiryServicePort: Send + Sync + 'static {
    /// Store a validated submission with status `NEW`.
    async fn submit_enquiry(&self, enquiry: NewEnquiry) -> Result<Enquiry, EnquiryError>;

    /// All enquiries, newest first.
    async fn list_enquiries(&self) -> Result<Vec<Enquiry>, EnquiryError>;
}

/// Persistence operations for enquiries.
#[async_trait]
pub trait EnquiryRepository: Send + Sync + 'static {
    async fn create(&self, enquiry: NewEnquiry) -> Result<Enquiry, EnquiryError>;

    /// Enquiries ordered by `created_at` descending.
    async fn list_all(&self) -> Result<Vec<Enquiry>, EnquiryError>;
}
