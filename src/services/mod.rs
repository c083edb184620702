//! External collaborators

pub mod advisory;
