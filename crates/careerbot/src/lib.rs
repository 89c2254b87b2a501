//! Career guidance quiz: a guided chat that scores 25 scenario answers into skill levels,
//! matches career fields, and renders a downloadable PDF report.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
