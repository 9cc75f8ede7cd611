//! Layout of cleaned paragraphs into display pages.

mod paginate;

pub use paginate::{Pagination, PaginationOptions, Paginator};
