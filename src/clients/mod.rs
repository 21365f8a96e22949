pub mod amazon;
pub mod gemini;
