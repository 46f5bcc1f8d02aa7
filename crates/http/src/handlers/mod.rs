#![allow(clippy::single_call_fn, reason = "HTTP handlers are called once from router")]

pub mod admin;
pub mod enroll;
pub mod identify;
pub mod records;
