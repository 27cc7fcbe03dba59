mod client;

pub use client::AppwriteClient;
