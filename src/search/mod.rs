pub mod prefix;
pub mod results;
pub mod executor;
