//! Application services coordinating domain logic with outbound ports.

pub mod sync;
