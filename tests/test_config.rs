//! Tests for training configuration parsing
//!
//! - Loading the shipped config file
//! - Partial files fall back to defaults
//! - Invalid values, unknown keys and malformed JSON are rejected

use catdog_nn::architecture::{Architecture, INPUT_SIZE};
use catdog_nn::config::{load_config, parse_config, TrainingConfig, DEFAULT_SEED};
use catdog_nn::CatDogError;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

// ============================================================================
// Valid Config Loading Tests
// ============================================================================

mod valid_config_tests {
    use super::*;

    #[test]
    fn test_load_shipped_config() {
        let config = load_config("config/catdog.json").expect("Failed to load catdog config");

        assert_eq!(config, TrainingConfig::default());
        assert_eq!(config.seed, DEFAULT_SEED);
        assert_eq!(config.architecture(), Architecture::default());
    }

    #[test]
    fn test_partial_config_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("quick.json");
        fs::write(
            &path,
            r#"{ "epochs": 2, "hidden_size": 16, "cat_dir": "data/cats" }"#,
        )
        .unwrap();

        let config = load_config(&path).unwrap();

        assert_eq!(config.epochs, 2);
        assert_eq!(config.cat_dir, PathBuf::from("data/cats"));
        assert_eq!(config.architecture(), Architecture::new(INPUT_SIZE, 16));
        assert_eq!(config.dog_dir, TrainingConfig::default().dog_dir);
    }

    #[test]
    fn test_out_of_range_split_ratio_is_kept() {
        // The splitter clamps; the config only rejects non-numbers.
        let config = parse_config(r#"{ "split_ratio": 1.5 }"#).unwrap();
        assert_eq!(config.split_ratio, 1.5);
    }
}

// ============================================================================
// Invalid Config Tests
// ============================================================================

mod invalid_config_tests {
    use super::*;

    #[test]
    fn test_missing_file() {
        let result = load_config("config/does_not_exist.json");
        assert!(matches!(result, Err(CatDogError::Io(_))));
    }

    #[test]
    fn test_malformed_json() {
        let result = parse_config("{ \"epochs\": ");
        assert!(matches!(result, Err(CatDogError::Json(_))));
    }

    #[test]
    fn test_unknown_field() {
        let result = parse_config(r#"{ "epoch": 3 }"#);
        assert!(matches!(result, Err(CatDogError::Json(_))));
    }

    #[test]
    fn test_non_positive_learning_rate() {
        for body in [r#"{ "learning_rate": 0.0 }"#, r#"{ "learning_rate": -0.1 }"#] {
            let result = parse_config(body);
            assert!(matches!(result, Err(CatDogError::Config(_))), "{}", body);
        }
    }

    #[test]
    fn test_zero_hidden_size() {
        let result = parse_config(r#"{ "hidden_size": 0 }"#);
        assert!(matches!(result, Err(CatDogError::Config(_))));
    }

    #[test]
    fn test_wrong_type() {
        let result = parse_config(r#"{ "epochs": "many" }"#);
        assert!(matches!(result, Err(CatDogError::Json(_))));
    }
}
