//! CLI commands for rubric

pub mod chart;
pub mod dispatch;
pub mod languages;
pub mod readme;
pub mod scores;
pub mod table;
