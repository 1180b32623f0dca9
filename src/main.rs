use clap::Parser;

use log::{error, info};

use yolo_splitter::{process_dataset, Args};

fn main() {
    // Initialize the logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    info!(
        "Splitting {} / {} into {} (train ratio {})",
        args.image_dir.display(),
        args.label_dir.display(),
        args.output_dir.display(),
        args.train_ratio
    );

    if let Err(e) = process_dataset(&args) {
        error!("Failed to split dataset: {}", e);
        std::process::exit(1);
    }
}
