//! Data shaped for the templates, one module per feature area.

pub mod calculator;
pub mod enrollment;
pub mod grades;
pub mod main;
pub mod profile;
pub mod schedule;
pub mod status;
pub mod transcripts;
