//! Project records: store ports and the service that drives them

pub mod ports;
pub mod service;

pub use service::ProjectService;
