//! Port interfaces for the application layer
//!
//! Ports define the contract between the catalog controller and whatever
//! supplies records to it or renders its output.

pub mod catalog_source;
pub mod errors;
pub mod view_observer;

pub use catalog_source::CatalogSourcePort;
pub use errors::CatalogSourceError;
pub use view_observer::ViewObserverPort;
