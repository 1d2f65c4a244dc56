//! The individual scene renderers.

pub mod convergence;
pub mod fluid;
pub mod orbit;
