// promptlens - image analysis to prompt-engineering API backed by Google Gemini

pub mod cli;
pub mod config;
pub mod error;
pub mod gemini;
pub mod models;
pub mod server;
pub mod translation;
pub mod utils;
