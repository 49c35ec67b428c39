//! # Classtree Core
//!
//! Foundational types shared by every classtree crate:
//!
//! - [`errors`]: Application error type with a coarse [`ErrorKind`]
//! - [`pagination`]: Page addressing and slicing for listings
//!
//! # Example
//!
//! ```ignore
//! use classtree_core::errors::AppError;
//! use classtree_core::pagination::{paginate, PaginationParams};
//!
//! let error = AppError::not_found(anyhow::anyhow!("Level not found"));
//! let (page, meta) = paginate(classes, &PaginationParams::default());
//! ```

pub mod errors;
pub mod pagination;

// Re-export commonly used types at crate root
pub use errors::{AppError, ErrorKind};
pub use pagination::{PaginationMeta, PaginationParams, paginate};
