pub mod azure_speech_repository;
pub mod language_catalog_repository;
pub mod speech_repository;

pub use azure_speech_repository::{AzureSpeechRepository, SpeechEndpoints};
pub use language_catalog_repository::HardcodedLanguageCatalogRepository;
pub use speech_repository::SpeechRepository;
