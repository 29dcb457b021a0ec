use catdog_nn::config::{load_config, TrainingConfig};
use catdog_nn::loader::load_samples_from_folder;
use catdog_nn::{evaluate, split, Class, Network, SimpleRng, Trainer};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

// Trains the cat/dog classifier on two image folders and saves the model.
#[derive(Parser, Debug)]
#[command(name = "catdog_train", about = "Train the cat vs dog classifier")]
struct Args {
    /// JSON training configuration (defaults are used when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the number of epochs
    #[arg(short, long)]
    epochs: Option<usize>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("catdog_nn=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn resolve_config(args: &Args) -> catdog_nn::Result<TrainingConfig> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => TrainingConfig::default(),
    };
    if let Some(epochs) = args.epochs {
        config.epochs = epochs;
    }
    Ok(config)
}

fn run(config: &TrainingConfig) -> catdog_nn::Result<ExitCode> {
    let program_start = Instant::now();
    let mut rng = SimpleRng::new(config.seed);

    println!("=== Cat vs Dog Classifier ===\n");

    let per_class = config.max_images / 2;
    let mut images = load_samples_from_folder(&config.cat_dir, Class::Cat, per_class);
    let cat_count = images.len();
    images.extend(load_samples_from_folder(&config.dog_dir, Class::Dog, per_class));
    let dog_count = images.len() - cat_count;
    let total_count = images.len();

    println!("Loaded {} cat images and {} dog images", cat_count, dog_count);
    println!("Total images: {}\n", total_count);

    if total_count == 0 {
        println!("No images loaded! Please check your folder paths.");
        println!(
            "Expected folders: '{}' and '{}'",
            config.cat_dir.display(),
            config.dog_dir.display()
        );
        return Ok(ExitCode::FAILURE);
    }

    let mut data = split(&mut images, config.split_ratio, &mut rng);
    println!(
        "Training samples: {} ({:.2}%)",
        data.train_count(),
        100.0 * data.train_count() as f32 / total_count as f32
    );
    println!(
        "Validation samples: {} ({:.2}%)\n",
        data.validation_count(),
        100.0 * data.validation_count() as f32 / total_count as f32
    );

    let mut nn = Network::with_architecture(config.architecture(), &mut rng)?;
    println!("{}", nn);

    if config.model_path.exists() {
        match nn.load(&config.model_path) {
            Ok(()) => {
                let before = evaluate(&nn, &*data.validation);
                println!(
                    "Loaded saved network - validation before training: Loss={:.4} Acc={:.2}%",
                    before.loss, before.accuracy
                );
            }
            Err(err) => {
                tracing::warn!("Could not resume from {}: {}", config.model_path.display(), err);
                println!("Saved network unusable - training from scratch.");
                nn = Network::with_architecture(config.architecture(), &mut rng)?;
            }
        }
    } else {
        println!("No saved network found - training from scratch.");
    }

    println!("Training neural network...\n");
    let train_start = Instant::now();
    let trainer = Trainer::from_config(config);
    trainer.train(&mut nn, &mut *data.train, config.epochs, Some(&*data.validation), &mut rng);
    println!(
        "\nTraining complete! ({:.2} seconds)",
        train_start.elapsed().as_secs_f64()
    );

    if data.validation_count() > 0 {
        let after = evaluate(&nn, &*data.validation);
        println!(
            "Validation after training: Loss={:.4} Acc={:.2}%",
            after.loss, after.accuracy
        );
    }

    match nn.save(&config.model_path) {
        Ok(()) => println!("Saved network to {}", config.model_path.display()),
        Err(err) => println!("Failed to save network: {}", err),
    }

    println!(
        "Total program time: {:.2} seconds",
        program_start.elapsed().as_secs_f64()
    );
    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    let result = resolve_config(&args).and_then(|config| run(&config));
    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
