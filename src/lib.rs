pub mod codegen;

// Re-export commonly used types
pub use codegen::GenerationRequest;
