pub mod email;
pub mod error;
pub mod tools;
pub mod transport;
