//! Garbage Can - batch simulation of organizational choice processes
//!
//! Problems and decision-maker energy flow through choice opportunities
//! over 20 time periods, under 81 structural variants of load, access,
//! decision structure, and energy distribution. One input vector in, one
//! report out; every scenario is deterministic and self-contained.

pub mod core;
pub mod input;
pub mod model;
pub mod report;
