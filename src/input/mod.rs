//! Input processing module
//! Handles file detection, text extraction, and loading the postings corpus

pub mod corpus;
pub mod file_detector;
pub mod manager;
pub mod text_extractor;

pub use manager::InputManager;
