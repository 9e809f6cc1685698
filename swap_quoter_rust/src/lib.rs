pub mod credentials;
pub mod error;
pub mod routers;
#[cfg(test)]
pub mod tests;
pub mod throttle;
pub mod utils;
