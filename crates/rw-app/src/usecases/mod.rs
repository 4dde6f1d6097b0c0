//! Business logic use cases

pub mod registration;
