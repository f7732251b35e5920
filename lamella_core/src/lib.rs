//! # lamella_core - CLT Beam Response Engine
//!
//! `lamella_core` computes structural response quantities (deflection,
//! bending moment, shear force) for simply-supported and two-span continuous
//! CLT beam strips using closed-form beam equations, and samples them into
//! plot-ready series. Chart rendering and layer-diagram drawing are left to
//! consumers; this crate produces data only.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: pure functions over immutable beam/material snapshots
//! - **JSON-First**: all inputs and results implement Serialize/Deserialize
//! - **Rich Errors**: structured error types, not just strings
//! - **Solved once**: per-analysis constants (two-span reactions) are
//!   computed at equation construction and reused for every position query
//!
//! ## Quick Start
//!
//! ```rust
//! use lamella_core::analysis::{BeamAnalysis, Condition};
//! use lamella_core::beam::Beam;
//! use lamella_core::materials::Material;
//!
//! // Two-span floor strip: 4.5 m + 3.0 m, 6 kN/m
//! let beam = Beam::two_span("B-1", 4.5, 3.0, Material::default());
//! let analysis = BeamAnalysis::new(beam, 6.0, Condition::TwoSpanUnequal);
//!
//! let moment = analysis.bending_moment().unwrap();
//! let at_support = moment.at(4.5).unwrap();
//!
//! // Serialize the full bundle for storage or transmission
//! let json = serde_json::to_string_pretty(&moment).unwrap();
//! # let _ = (at_support, json);
//! ```
//!
//! ## Modules
//!
//! - [`analysis`] - condition dispatch, response equations, evaluation
//! - [`equations`] - the closed-form beam formulas
//! - [`diagram`] - sampling equations into labelled plot series
//! - [`beam`] - beam geometry
//! - [`materials`] - material properties and CLT layups
//! - [`units`] - type-safe unit wrappers
//! - [`errors`] - structured error types

pub mod analysis;
pub mod beam;
pub mod diagram;
pub mod equations;
pub mod errors;
pub mod materials;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use analysis::{Analysis, BeamAnalysis, Condition, Eval, Point, Quantity};
pub use beam::Beam;
pub use errors::{CalcError, CalcResult};
pub use materials::Material;
