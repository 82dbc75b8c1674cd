pub mod adaptors;
pub mod auth;
pub mod contact;
pub mod error;
pub mod forms;
pub mod policy;
pub mod seed;
pub mod session;
