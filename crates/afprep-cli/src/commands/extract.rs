use crate::cli::ExtractArgs;
use crate::error::Result;
use crate::progress::CliProgressHandler;
use afprep::workflows::extract;
use afprep::workflows::progress::ProgressReporter;
use tracing::info;

pub fn run(args: ExtractArgs) -> Result<()> {
    info!(
        "Extracting sequences from {:?} into {:?}",
        args.input_dir, args.output_dir
    );
    println!("Extracting sequences from: {}", args.input_dir.display());

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    let summary = extract::run(&args.input_dir, &args.output_dir, &reporter)?;

    if summary.files_failed > 0 {
        println!(
            "Done with errors: {} file(s) processed, {} failed (see report for markers).",
            summary.files_processed, summary.files_failed
        );
    } else {
        println!("Done: {} file(s) processed.", summary.files_processed);
    }
    println!(
        "{} chain sequence(s) written to: {}",
        summary.chains_written,
        summary.report_path.display()
    );
    Ok(())
}
