#[cfg(test)]
mod tests {
    use crate::datasets::synthetic::gaussian_blobs;
    use crate::datasets::Dataset;
    use picograd_core::PicoGradError;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const CENTERS: [(f64, f64); 3] = [(0.0, 0.0), (5.0, 5.0), (-5.0, 5.0)];

    #[test]
    fn test_blobs_shape_and_labels() {
        let mut rng = StdRng::seed_from_u64(1);
        let dataset = gaussian_blobs(&mut rng, 10, &CENTERS, 0.5).unwrap();
        assert_eq!(dataset.len(), 30);

        for (i, (features, label)) in dataset.iter().enumerate() {
            assert_eq!(features.len(), 2);
            assert_eq!(*label, i / 10);
        }
    }

    #[test]
    fn test_blobs_cluster_around_centers() {
        let mut rng = StdRng::seed_from_u64(2);
        let dataset = gaussian_blobs(&mut rng, 50, &CENTERS, 0.1).unwrap();
        for (features, label) in dataset.iter() {
            let (cx, cy) = CENTERS[*label];
            let dist = ((features[0] - cx).powi(2) + (features[1] - cy).powi(2)).sqrt();
            // 0.1 deviation: a point 1.0 away would be a 10-sigma outlier.
            assert!(dist < 1.0, "sample {:?} far from center {}", features, label);
        }
    }

    #[test]
    fn test_blobs_reproducible_under_seed() {
        let a = gaussian_blobs(&mut StdRng::seed_from_u64(9), 5, &CENTERS, 0.3).unwrap();
        let b = gaussian_blobs(&mut StdRng::seed_from_u64(9), 5, &CENTERS, 0.3).unwrap();
        for (sa, sb) in a.iter().zip(b.iter()) {
            assert_eq!(sa, sb);
        }
    }

    #[test]
    fn test_blobs_invalid_deviation() {
        let mut rng = StdRng::seed_from_u64(1);
        for bad in [0.0, -1.0, f64::NAN] {
            let result = gaussian_blobs(&mut rng, 5, &CENTERS, bad);
            assert!(matches!(
                result.unwrap_err(),
                PicoGradError::DomainError { .. }
            ));
        }
    }

    #[test]
    fn test_blobs_empty_centers() {
        let mut rng = StdRng::seed_from_u64(1);
        let dataset = gaussian_blobs(&mut rng, 5, &[], 0.5).unwrap();
        assert!(dataset.is_empty());
        assert_eq!(dataset.get(0).unwrap_err(), PicoGradError::IndexOutOfBounds { index: 0, len: 0 });
    }
}
