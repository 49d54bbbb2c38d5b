//! Infrastructure layer - catalog loaders, file repositories, CSV input

pub mod catalog_loader;
pub mod persistence;
pub mod shipment_csv;
