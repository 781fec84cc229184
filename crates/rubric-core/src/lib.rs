//! Rubric Core Library
//!
//! Scoring pipeline for the multilingual open content rubric: raw Likert
//! scores are normalized against each subfactor's scale, averaged per
//! factor, and reshaped into chart datasets and comparison table rows.

pub mod aggregate;
pub mod config;
pub mod dataset;
pub mod entity;
pub mod error;
pub mod html;
pub mod language;
pub mod logging;
pub mod missing;
pub mod normalize;
pub mod pipeline;
pub mod readme;
pub mod rubric;
pub mod schema;
pub mod table;
