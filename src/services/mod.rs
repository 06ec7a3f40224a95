pub mod completion;
pub mod fallback;
pub mod profile_generator;
pub mod prompt;
pub mod response_parser;
