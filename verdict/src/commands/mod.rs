// verdict/src/commands/mod.rs

pub mod bindings;
pub mod check;
