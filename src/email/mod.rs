pub mod address_validator;
pub mod config;
pub mod message;
pub mod sender;
