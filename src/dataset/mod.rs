//! @ai:module:intent Survey dataset loading and flattening
//! @ai:module:layer domain
//! @ai:module:public_api AggregateRow, Dataset, DatasetLoader

pub mod loader;
pub mod row;

pub use loader::{DatasetLoader, DatasetLoaderTrait};
pub use row::{AggregateRow, Dataset};
