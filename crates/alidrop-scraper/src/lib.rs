pub mod client;
pub mod error;
pub mod extract;
pub mod hosting;
mod lenient;
pub mod links;
pub mod normalize;
pub mod price;
pub mod project;
pub mod sanitize;
pub mod types;

#[cfg(test)]
mod fixtures;

pub use client::{AliExpressClient, ItemSource};
pub use error::ScraperError;
pub use hosting::{CloudinaryHost, PhotoHost, SourceUrlHost, CLOUDINARY_API_BASE};
pub use links::{item_id_from_link, query_from_link};
pub use normalize::{build_product_record, photo_folders};
pub use price::{compare_at_price, representative_price, PriceError};
pub use project::project;
pub use types::{RawItemDocument, RawReviewsDocument, RawSearchDocument};
