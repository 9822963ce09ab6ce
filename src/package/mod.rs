//! Package data model
//!
//! This module provides the in-memory representation of an RPM archive:
//! its name, version identifier, declared requirements, and the path of
//! the backing archive file.

mod constraint;
mod discovery;
mod evr;
mod model;

pub use constraint::{Constraint, Operator};
pub use discovery::find_archives;
pub use evr::Evr;
pub use model::Package;
