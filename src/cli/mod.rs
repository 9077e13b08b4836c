pub mod args;
pub mod session;
