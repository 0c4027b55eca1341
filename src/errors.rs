//! User-error messages signalled by the contract.

/// A candidate-dependent call reached an empty registry.
pub const ERR_NO_CANDIDATE: &str = "no candidate";

/// `addCandidate` was called on a registry that already holds a candidate.
pub const ERR_ALREADY_EXISTS: &str = "candidate already exists";

pub const ERR_EMPTY_NAME: &str = "candidate name cannot be empty";
