use crate::cli::EnrichArgs;
use crate::config::resolve_enrich_config;
use crate::error::Result;
use crate::progress::CliProgressHandler;
use afprep::workflows::enrich;
use afprep::workflows::progress::ProgressReporter;
use tracing::info;

pub fn run(args: EnrichArgs) -> Result<()> {
    let config = resolve_enrich_config(&args)?;
    info!(
        "Enriching job files matching '{}' under {:?} from reference {:?}",
        config.pattern, config.input_dir, config.reference_file
    );
    println!(
        "Enriching job files in: {} (reference: {})",
        config.input_dir.display(),
        config.reference_file.display()
    );

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    let summary = enrich::run(&config, &reporter)?;

    if summary.files_skipped > 0 {
        println!(
            "Done with errors: {} file(s) updated, {} skipped.",
            summary.files_updated, summary.files_skipped
        );
    } else {
        println!("Done: {} file(s) updated.", summary.files_updated);
    }
    Ok(())
}
