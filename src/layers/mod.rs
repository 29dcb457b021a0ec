//! Layer abstractions
//!
//! The `Layer` trait and the dense layer both network layers are built from.

mod r#trait;
pub mod dense;

pub use dense::DenseLayer;
pub use r#trait::Layer;
