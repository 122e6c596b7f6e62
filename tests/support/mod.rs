#![allow(dead_code)]

pub mod deals;
pub mod env;
