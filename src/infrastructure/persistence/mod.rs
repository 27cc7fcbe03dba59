mod appwrite_history_repository;

pub use appwrite_history_repository::AppwriteHistoryRepository;
