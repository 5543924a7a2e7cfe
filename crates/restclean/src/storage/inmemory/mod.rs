mod repository;

pub use repository::InMemoryRepository;
