//! Built-in cases shared by the tests and the demo binary.

pub mod cases;

#[cfg(test)]
mod agree;
