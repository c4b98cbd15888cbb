//! Pipeline stages

pub mod acquire;
pub mod objects;
pub mod recognition;
pub mod report;
pub mod translation;
