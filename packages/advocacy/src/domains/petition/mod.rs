//! Petition domain - signature intake and the running signature count.

pub mod counter;
pub mod signature;

pub use counter::Petition;
pub use signature::{PetitionError, Signature, SignatureInput};
