//! JSON and CSV persistence for product records and commerce rows.
//!
//! Every file is written through a sibling `*.tmp` file and renamed into
//! place, so a failed run never leaves a partial file under a final name.

mod atomic;
pub mod commerce_csv;
pub mod error;
pub mod json;
pub mod layout;
pub mod native_csv;

pub use commerce_csv::{write_commerce_batch, write_commerce_single};
pub use error::ExportError;
pub use json::{load_json_snapshot, save_json_snapshot};
pub use layout::{OutputLayout, LINKS_BATCH_LABEL, QUERY_BATCH_LABEL};
pub use native_csv::write_native_csv;
