//! 外部API連携

pub mod gemini;

pub use gemini::FetchGenerator;
