//! Participant roster handling.
//!
//! `draft` and `wizard` model the operator's form session before submission;
//! `reconcile` computes the writes that bring a stored roster in line with a
//! submitted one.

mod draft;
mod reconcile;
mod wizard;

pub use draft::*;
pub use reconcile::*;
pub use wizard::*;
