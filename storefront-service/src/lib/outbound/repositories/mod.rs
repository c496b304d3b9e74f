pub mod carousel;
pub mod category;
pub mod enquiry;
pub mod page;
pub mod product;
pub mod user;

pub use carousel::PostgresCarouselRepository;
pub use category::PostgresCategoryRepository;
pub use enquiry::PostgresEnquiryRepository;
pub use page::PostgresPageRepository;
pub use product::PostgresProductRepository;
pub use user::PostgresUserRepository;

/// Name of the unique constraint a failed statement violated, if any.
fn unique_violation(error: &sqlx::Error) -> Option<String> {
    let db_err = error.as_database_error()?;
    if db_err.is_unique_violation() {
        db_err.constraint().map(str::to_string)
    } else {
        None
    }
}

fn is_foreign_key_violation(error: &sqlx::Error) -> bool {
    error
        .as_database_error()
        .is_some_and(|db_err| db_err.is_foreign_key_violation())
}
