//! Built-in pipeline phases.
//!
//! - [`ComponentsPhase`] - translates `components.schemas` into interfaces
//! - [`EndpointsPhase`] - translates `paths` into endpoints

mod components;
mod endpoints;

pub use components::ComponentsPhase;
pub use endpoints::EndpointsPhase;
