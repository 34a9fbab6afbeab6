// Text preprocessing: PII redaction for extracted documents, then
// normalization into the token stream the classifier was trained on.

pub mod indonesian;
pub mod normalizer;
pub mod porter;
pub mod redaction;
pub mod stopwords;

pub use normalizer::{Language, TextNormalizer};
pub use redaction::redact_personal_info;
