// picograd-core/src/ops/activation/tanh_test.rs

#[cfg(test)]
mod tests {
    use crate::autograd::check_grad;
    use crate::ops::activation::tanh_op;
    use crate::scalar::Scalar;
    use approx::assert_relative_eq;

    #[test]
    fn test_tanh_forward() {
        let x = Scalar::new(0.8);
        assert_relative_eq!(tanh_op(&x).value(), 0.8_f64.tanh());
        assert_eq!(tanh_op(&Scalar::new(0.0)).value(), 0.0);
    }

    #[test]
    fn test_tanh_backward() {
        // z = tanh(x) => dz/dx = 1 - tanh(x)^2
        let x = Scalar::new(0.5);
        let z = x.tanh();
        z.backward().unwrap();

        let t = 0.5_f64.tanh();
        assert_relative_eq!(x.grad(), 1.0 - t * t, epsilon = 1e-12);
    }

    #[test]
    fn test_tanh_saturates_with_small_gradient() {
        let x = Scalar::new(20.0);
        let z = x.tanh();
        assert_relative_eq!(z.value(), 1.0, epsilon = 1e-12);

        z.backward().unwrap();
        assert!(x.grad().abs() < 1e-12);
    }

    #[test]
    fn test_tanh_chain_matches_finite_differences() {
        // y = tanh(x * 2 + 1), checked against central differences for
        // representative points across [-3, 3].
        for i in -3..=3 {
            let x = f64::from(i);
            check_grad(
                |leaves| Ok((&leaves[0] * 2.0 + 1.0).tanh()),
                &[x],
                1e-5,
                1e-4,
            )
            .unwrap_or_else(|e| panic!("gradient check failed at x = {}: {}", x, e));
        }
    }
}
