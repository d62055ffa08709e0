// Resume screening engine.
// Implements: skill extraction, template gating, ATS scoring, role recommendation.
// Everything except `handlers` and `pdf` is pure and synchronous.

pub mod analysis;
pub mod catalog;
pub mod extractor;
pub mod handlers;
pub mod pdf;
pub mod roles;
pub mod score;
pub mod template;
