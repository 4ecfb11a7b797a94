//! Systems - the solver passes that advance the fields

pub mod fluid;
