mod appwrite_bucket_store;
mod temp_file_store;

pub use appwrite_bucket_store::AppwriteBucketStore;
pub use temp_file_store::TempFileStore;
