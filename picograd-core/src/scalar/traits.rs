// src/scalar/traits.rs

use crate::ops::arithmetic::{add_op, div_op, mul_op, neg_op, sub_op};
use crate::scalar::Scalar;
use std::cmp::Ordering;
use std::fmt::{self, Debug};
use std::sync::Arc;

// --- Trait Implementations ---

impl Clone for Scalar {
    /// Clones the handle. This is a shallow clone that increases the
    /// reference count of the underlying node; both handles see the same
    /// value and gradient.
    fn clone(&self) -> Self {
        Scalar {
            data: Arc::clone(&self.data),
        }
    }
}

impl Debug for Scalar {
    /// Shows the node's value, gradient, and producing operation. The
    /// predecessor chain is deliberately not printed.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.read_data();
        if guard.op.is_empty() {
            write!(f, "Scalar(value={}, grad={})", guard.value, guard.grad)
        } else {
            write!(
                f,
                "Scalar(value={}, grad={}, op={:?})",
                guard.value, guard.grad, guard.op
            )
        }
    }
}

impl From<f64> for Scalar {
    /// Promotes a plain number to a constant leaf node.
    fn from(value: f64) -> Self {
        Scalar::new(value)
    }
}

// Comparisons look at forward values only (never gradients) and create no
// graph edges.

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.data, &other.data) || self.value() == other.value()
    }
}

impl PartialOrd for Scalar {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value().partial_cmp(&other.value())
    }
}

impl PartialEq<f64> for Scalar {
    fn eq(&self, other: &f64) -> bool {
        self.value() == *other
    }
}

impl PartialOrd<f64> for Scalar {
    fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
        self.value().partial_cmp(other)
    }
}

// --- Arithmetic operator overloads ---
//
// Every combination of `Scalar`, `&Scalar` and `f64` operands is accepted;
// plain numbers are promoted to constant leaf nodes first. The overloads
// only forward to the `ops::arithmetic` functions.

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $op_fn:ident) => {
        impl std::ops::$trait<&Scalar> for &Scalar {
            type Output = Scalar;
            fn $method(self, rhs: &Scalar) -> Scalar {
                $op_fn(self, rhs)
            }
        }

        impl std::ops::$trait<Scalar> for &Scalar {
            type Output = Scalar;
            fn $method(self, rhs: Scalar) -> Scalar {
                $op_fn(self, &rhs)
            }
        }

        impl std::ops::$trait<&Scalar> for Scalar {
            type Output = Scalar;
            fn $method(self, rhs: &Scalar) -> Scalar {
                $op_fn(&self, rhs)
            }
        }

        impl std::ops::$trait<Scalar> for Scalar {
            type Output = Scalar;
            fn $method(self, rhs: Scalar) -> Scalar {
                $op_fn(&self, &rhs)
            }
        }

        impl std::ops::$trait<f64> for &Scalar {
            type Output = Scalar;
            fn $method(self, rhs: f64) -> Scalar {
                $op_fn(self, &Scalar::new(rhs))
            }
        }

        impl std::ops::$trait<f64> for Scalar {
            type Output = Scalar;
            fn $method(self, rhs: f64) -> Scalar {
                $op_fn(&self, &Scalar::new(rhs))
            }
        }

        impl std::ops::$trait<&Scalar> for f64 {
            type Output = Scalar;
            fn $method(self, rhs: &Scalar) -> Scalar {
                $op_fn(&Scalar::new(self), rhs)
            }
        }

        impl std::ops::$trait<Scalar> for f64 {
            type Output = Scalar;
            fn $method(self, rhs: Scalar) -> Scalar {
                $op_fn(&Scalar::new(self), &rhs)
            }
        }
    };
}

impl_binary_op!(Add, add, add_op);
impl_binary_op!(Sub, sub, sub_op);
impl_binary_op!(Mul, mul, mul_op);
impl_binary_op!(Div, div, div_op);

impl std::ops::Neg for &Scalar {
    type Output = Scalar;
    fn neg(self) -> Scalar {
        neg_op(self)
    }
}

impl std::ops::Neg for Scalar {
    type Output = Scalar;
    fn neg(self) -> Scalar {
        neg_op(&self)
    }
}
