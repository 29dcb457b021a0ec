use catdog_nn::config::DEFAULT_MODEL_PATH;
use catdog_nn::loader::load_sample;
use catdog_nn::{Class, Network, Prediction};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

// Classifies one image with a saved model.
#[derive(Parser, Debug)]
#[command(name = "catdog_infer", about = "Predict whether an image shows a cat or a dog")]
struct Args {
    /// Image to classify
    image: PathBuf,

    /// Trained model file
    #[arg(default_value = DEFAULT_MODEL_PATH)]
    model: PathBuf,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("catdog_nn=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn classify(nn: &Network, image: &Path) -> Option<Prediction> {
    // The label is irrelevant for inference.
    let sample = load_sample(image, Class::Cat);
    nn.predict(&sample.pixels)
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    let nn = match Network::from_file(&args.model) {
        Ok(nn) => nn,
        Err(err) => {
            eprintln!(
                "Could not load model from {}: {}. Train and save a model first.",
                args.model.display(),
                err
            );
            return ExitCode::FAILURE;
        }
    };

    let Some(prediction) = classify(&nn, &args.image) else {
        eprintln!(
            "Model input size {} does not match decoded images",
            nn.input_size()
        );
        return ExitCode::FAILURE;
    };

    println!("Prediction for {}:", args.image.display());
    println!("  Cat probability: {:.4}", prediction.probabilities[Class::Cat.index()]);
    println!("  Dog probability: {:.4}", prediction.probabilities[Class::Dog.index()]);
    println!("  Predicted class: {}", prediction.class.name());
    ExitCode::SUCCESS
}
