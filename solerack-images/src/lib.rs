//! Photo indexing and resolution for the catalog.
//!
//! One bounded recursive walk per catalog load builds an [`ImageIndex`];
//! the [`ImageResolver`] then maps image-cell tokens or SKUs to actual
//! file paths, falling back to a placeholder so resolution is total.

pub mod index;
pub mod resolve;

pub use index::{IMAGE_EXTENSIONS, ImageIndex};
pub use resolve::ImageResolver;
