//! Gemini protocol layer (wire types and header construction).

pub mod headers;
pub mod types;

pub use headers::build_gemini_headers;
pub use types::{
    ApiErrorBody, ApiErrorDetail, Candidate, Content, GenerateContentRequest,
    GenerateContentResponse, GenerationConfig, Part,
};
