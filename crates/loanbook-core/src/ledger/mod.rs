pub mod book;
pub mod projection;

pub use book::{project_book, summarize_book, BookSummary};
pub use projection::{project_loan, LoanProjection, ProjectionConfig};
