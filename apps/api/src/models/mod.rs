pub mod profile;
pub mod request;

#[cfg(test)]
pub mod fixtures;
