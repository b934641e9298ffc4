//! # Scalar Operations Module (`ops`)
//!
//! This module serves as the central hub for the differentiable operations
//! of the engine. Operations are categorized into submodules based on their
//! functionality.
//!
//! ## Structure:
//!
//! - **Submodules:** Operations are grouped logically (`arithmetic`,
//!   `activation`, `math_elem`).
//! - **`_op` Functions:** Each primitive operation has a core function
//!   (named `xxx_op`) that computes the forward value and attaches the
//!   backward record to the new node. Derived operations (`neg_op`,
//!   `sub_op`, `div_op`) are composed from the primitives and introduce no
//!   graph-construction logic of their own.
//! - **`Backward` Structs:** Each primitive operation has a corresponding
//!   struct (e.g. `AddBackward`, `PowBackward`) implementing the
//!   [`BackwardOp`](crate::autograd::BackwardOp) trait. The struct stores
//!   the input handles (the graph edges) and any scalar parameter the
//!   derivative rule needs.
//!
//! Operator overloads on [`Scalar`](crate::scalar::Scalar) and the
//! convenience methods (`powf`, `relu`, `tanh`, `exp`, `ln`) forward to
//! these functions.

pub mod activation;
pub mod arithmetic;
pub mod math_elem;
