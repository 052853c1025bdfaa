pub mod footer;
pub mod header;

pub use footer::PageFooter;
pub use header::PageHeader;
