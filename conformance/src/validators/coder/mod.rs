//! Known-vocabulary dictionary validators.

pub mod ids;
