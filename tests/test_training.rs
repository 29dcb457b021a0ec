//! End-to-end training and evaluation on synthetic data
//!
//! Two clusters: "cats" are bright in the first half of the vector and dark
//! in the second, "dogs" the reverse. A small network must learn to separate
//! them.

use catdog_nn::architecture::Architecture;
use catdog_nn::{evaluate, split, Class, Network, Sample, SimpleRng, Trainer};

const PIXELS: usize = 8;

fn cluster_sample(label: Class, rng: &mut SimpleRng) -> Sample {
    let (first, second) = match label {
        Class::Cat => (0.8, 0.2),
        Class::Dog => (0.2, 0.8),
    };
    let pixels = (0..PIXELS)
        .map(|i| {
            let centre = if i < PIXELS / 2 { first } else { second };
            centre + (rng.next_f32() - 0.5) * 0.2
        })
        .collect();
    Sample::new(pixels, label)
}

fn synthetic_dataset(per_class: usize, rng: &mut SimpleRng) -> Vec<Sample> {
    let mut samples = Vec::with_capacity(per_class * 2);
    for _ in 0..per_class {
        samples.push(cluster_sample(Class::Cat, rng));
        samples.push(cluster_sample(Class::Dog, rng));
    }
    samples
}

fn small_network(rng: &mut SimpleRng) -> Network {
    Network::with_architecture(Architecture::new(PIXELS, 8), rng).unwrap()
}

// ============================================================================
// Learning tests
// ============================================================================

mod learning_tests {
    use super::*;

    #[test]
    fn test_loss_trends_down() {
        let mut rng = SimpleRng::new(42);
        let mut net = small_network(&mut rng);
        let mut samples = synthetic_dataset(20, &mut rng);
        let trainer = Trainer::new(0.1);

        let initial = evaluate(&net, &samples);
        let mut checkpoints = vec![initial.loss];
        for _ in 0..6 {
            trainer.train(&mut net, &mut samples, 5, None, &mut rng);
            checkpoints.push(evaluate(&net, &samples).loss);
        }

        let last = *checkpoints.last().unwrap();
        assert!(
            last < initial.loss,
            "loss did not decrease: {:?}",
            checkpoints
        );
        assert!(checkpoints[3] < checkpoints[0]);
    }

    #[test]
    fn test_learns_separable_clusters() {
        let mut rng = SimpleRng::new(7);
        let mut net = small_network(&mut rng);
        let mut samples = synthetic_dataset(20, &mut rng);

        let reports = Trainer::new(0.1).train(&mut net, &mut samples, 40, None, &mut rng);
        assert_eq!(reports.len(), 40);

        let result = evaluate(&net, &samples);
        assert!(result.accuracy > 50.0, "accuracy {}", result.accuracy);
        assert!(result.loss < reports[0].loss);
    }

    #[test]
    fn test_validation_reported_each_epoch() {
        let mut rng = SimpleRng::new(3);
        let mut net = small_network(&mut rng);
        let mut samples = synthetic_dataset(15, &mut rng);
        let mut data = split(&mut samples, 0.8, &mut rng);
        assert_eq!(data.train_count(), 24);
        assert_eq!(data.validation_count(), 6);

        let reports = Trainer::new(0.05).train(&mut net, &mut *data.train, 4, Some(&*data.validation), &mut rng);

        assert_eq!(reports.len(), 4);
        for (i, report) in reports.iter().enumerate() {
            assert_eq!(report.epoch, i + 1);
            let validation = report.validation.expect("validation metrics");
            assert!(validation.loss.is_finite());
            assert!((0.0..=100.0).contains(&validation.accuracy));
        }
        let last = reports[3].validation.unwrap();
        assert_eq!(last, evaluate(&net, data.validation));
    }

    #[test]
    fn test_same_seed_same_result() {
        let run = || {
            let mut rng = SimpleRng::new(99);
            let mut net = small_network(&mut rng);
            let mut samples = synthetic_dataset(5, &mut rng);
            Trainer::new(0.1).train(&mut net, &mut samples, 3, None, &mut rng);
            net
        };
        assert_eq!(run(), run());
    }
}

// ============================================================================
// Evaluation tests
// ============================================================================

mod evaluation_tests {
    use super::*;

    #[test]
    fn test_evaluate_leaves_network_unchanged() {
        let mut rng = SimpleRng::new(1);
        let net = small_network(&mut rng);
        let snapshot = net.clone();
        let samples = synthetic_dataset(4, &mut rng);

        let first = evaluate(&net, &samples);
        let second = evaluate(&net, &samples);

        assert_eq!(net, snapshot);
        assert_eq!(first, second);
    }

    #[test]
    fn test_accuracy_is_percentage_of_correct() {
        let mut rng = SimpleRng::new(1);
        let net = small_network(&mut rng);
        let samples = synthetic_dataset(5, &mut rng);

        let correct = samples
            .iter()
            .filter(|s| net.predict(&s.pixels).unwrap().class == s.label)
            .count();
        let result = evaluate(&net, &samples);

        let expected = 100.0 * correct as f32 / samples.len() as f32;
        assert!((result.accuracy - expected).abs() < 1e-4);
    }

    #[test]
    fn test_empty_set_reports_zero() {
        let mut rng = SimpleRng::new(1);
        let net = small_network(&mut rng);
        let result = evaluate(&net, &[]);
        assert_eq!(result.loss, 0.0);
        assert_eq!(result.accuracy, 0.0);
    }
}

// ============================================================================
// Degenerate training tests
// ============================================================================

mod degenerate_tests {
    use super::*;

    #[test]
    fn test_empty_training_set_is_noop() {
        let mut rng = SimpleRng::new(1);
        let mut net = small_network(&mut rng);
        let snapshot = net.clone();

        let reports = Trainer::new(0.1).train(&mut net, &mut [], 10, None, &mut rng);

        assert!(reports.is_empty());
        assert_eq!(net, snapshot);
    }

    #[test]
    fn test_released_network_is_not_trained() {
        let mut rng = SimpleRng::new(1);
        let mut net = small_network(&mut rng);
        net.release();
        let mut samples = synthetic_dataset(2, &mut rng);

        let reports = Trainer::new(0.1).train(&mut net, &mut samples, 2, None, &mut rng);

        assert!(reports.is_empty());
        assert!(!net.is_allocated());
        assert_eq!(evaluate(&net, &samples).accuracy, 0.0);
    }

    #[test]
    fn test_malformed_sample_is_skipped() {
        let mut rng = SimpleRng::new(1);
        let mut net = small_network(&mut rng);
        let mut samples = synthetic_dataset(2, &mut rng);
        samples.push(Sample::new(vec![0.5; PIXELS - 1], Class::Dog));

        let reports = Trainer::new(0.1).train(&mut net, &mut samples, 1, None, &mut rng);

        assert_eq!(reports.len(), 1);
        assert!(reports[0].loss.is_finite());
    }
}
