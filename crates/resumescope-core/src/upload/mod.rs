pub mod read;
pub mod session;
pub mod validate;
