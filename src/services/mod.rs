//! Application service layer.
//!
//! Services turn address book operations into user-facing messages. They
//! provide a clean boundary between the command shell and the data model.

mod contact_service;

pub use contact_service::{ContactService, ServiceOptions};
