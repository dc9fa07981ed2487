pub mod client;

pub use client::{credentials_from, AccessCredentials, StorageClient};
