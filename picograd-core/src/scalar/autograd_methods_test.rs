// src/scalar/autograd_methods_test.rs

#[cfg(test)]
mod tests {
    use crate::error::PicoGradError;
    use crate::scalar::Scalar;

    #[test]
    fn test_backward_on_leaf_seeds_itself() -> Result<(), PicoGradError> {
        let x = Scalar::new(5.0);
        x.backward()?;
        assert_eq!(x.grad(), 1.0);
        Ok(())
    }

    #[test]
    fn test_shared_subgraph_accumulates_both_paths() -> Result<(), PicoGradError> {
        // z = (x*x) + (x*x): two distinct multiply nodes sharing leaf x.
        // Each path contributes 2x, so dz/dx = 4x.
        let x = Scalar::new(3.0);
        let z = &(&x * &x) + &(&x * &x);
        assert_eq!(z.value(), 18.0);

        z.backward()?;
        assert_eq!(x.grad(), 12.0);
        Ok(())
    }

    #[test]
    fn test_diamond_graph() -> Result<(), PicoGradError> {
        // z = (x + y) * (x - y) = x^2 - y^2 => dz/dx = 2x, dz/dy = -2y
        let x = Scalar::new(3.0);
        let y = Scalar::new(2.0);
        let a = &x + &y;
        let b = &x - &y;
        let z = &a * &b;

        z.backward()?;
        assert_eq!(x.grad(), 6.0);
        assert_eq!(y.grad(), -4.0);
        Ok(())
    }

    #[test]
    fn test_repeated_backward_accumulates() -> Result<(), PicoGradError> {
        // Without a reset in between, a second pass adds the same
        // contributions again: the leaf gradients exactly double.
        let x = Scalar::new(3.0);
        let y = Scalar::new(4.0);
        let z = &x * &y;

        z.backward()?;
        assert_eq!(x.grad(), 4.0);
        assert_eq!(y.grad(), 3.0);

        z.backward()?;
        assert_eq!(x.grad(), 8.0);
        assert_eq!(y.grad(), 6.0);
        // The root itself is re-seeded, not accumulated.
        assert_eq!(z.grad(), 1.0);
        Ok(())
    }

    #[test]
    fn test_repeated_backward_doubles_through_addition() -> Result<(), PicoGradError> {
        let x = Scalar::new(7.0);
        let y = &x + &x;

        y.backward()?;
        assert_eq!(x.grad(), 2.0);

        y.backward()?;
        assert_eq!(x.grad(), 4.0);
        Ok(())
    }

    #[test]
    fn test_zero_grad_between_passes() -> Result<(), PicoGradError> {
        let x = Scalar::new(3.0);
        let z = &x * &x;

        z.backward()?;
        assert_eq!(x.grad(), 6.0);

        x.zero_grad();
        z.zero_grad();
        z.backward()?;
        assert_eq!(x.grad(), 6.0);
        Ok(())
    }

    #[test]
    fn test_node_without_path_to_root_is_untouched() -> Result<(), PicoGradError> {
        let x = Scalar::new(2.0);
        let y = &x * 3.0;
        // w depends on x but y does not depend on w.
        let w = &x + 1.0;

        y.backward()?;
        assert_eq!(x.grad(), 3.0);
        assert_eq!(w.grad(), 0.0);
        Ok(())
    }

    #[test]
    fn test_gradient_flows_into_promoted_constants() -> Result<(), PicoGradError> {
        // Implicit constants are ordinary leaves; their gradient is
        // computed even though nothing reads it.
        let x = Scalar::new(2.0);
        let y = &x * 3.0;
        let c = &y.predecessors()[1];
        assert_eq!(c.value(), 3.0);

        y.backward()?;
        assert_eq!(c.grad(), 2.0);
        Ok(())
    }

    #[test]
    fn test_long_chain_backward_and_teardown() -> Result<(), PicoGradError> {
        // One node per operation; a chain this deep would overflow the
        // stack with recursive traversal or recursive drop.
        const DEPTH: usize = 50_000;
        let x = Scalar::new(1.0);
        let mut y = x.clone();
        for _ in 0..DEPTH {
            y = &y + 1.0;
        }
        assert_eq!(y.value(), 1.0 + DEPTH as f64);

        y.backward()?;
        assert_eq!(x.grad(), 1.0);

        drop(y);
        assert!(x.is_leaf());
        Ok(())
    }

    #[test]
    fn test_predecessors_of_leaf_are_empty() {
        let x = Scalar::new(1.0);
        assert!(x.predecessors().is_empty());
        assert!(x.grad_fn().is_none());
    }
}
