pub mod carousel;
pub mod category;
pub mod enquiry;
pub mod page;
pub mod product;
pub mod user;
pub mod values;
