//! Feature-Handler: dünne Dispatch-Schicht zwischen Controller und Use-Cases.

pub mod curves;
pub mod gesture;
pub mod view;
