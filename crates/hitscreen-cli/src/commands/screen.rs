use crate::cli::ScreenArgs;
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use hitscreen::{
    core::io::{sdf::SdfFile, traits::StructureFile},
    engine::progress::ProgressReporter,
    workflows::{
        response::Response,
        screen::{self, ScreenSpec},
    },
};
use tracing::info;

pub fn run(args: ScreenArgs) -> Result<()> {
    if !args.threshold.is_finite() || args.threshold < 0.0 {
        return Err(CliError::Argument(format!(
            "--threshold must be a finite, non-negative number (got {})",
            args.threshold
        )));
    }

    info!("Loading structure pool from {:?}", &args.input);
    let pool = SdfFile::read_from_path(&args.input).map_err(|e| CliError::FileParsing {
        path: args.input.clone(),
        source: e,
    })?;
    info!("Loaded {} structure(s).", pool.len());

    let mut spec = ScreenSpec::new(&args.target).with_threshold(args.threshold);
    if args.exclude_target {
        spec = spec.excluding_target();
    }

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    let outcome = screen::run(&pool, &spec, &reporter);

    if args.json {
        // The envelope is the machine-readable contract: it is emitted for
        // success and failure alike, with the outcome in its status field.
        let response = Response::from_outcome(&outcome);
        println!("{}", serde_json::to_string_pretty(&response)?);
        if let Err(e) = outcome {
            info!("Screening failed; failure encoded in the JSON envelope: {e}");
        }
        return Ok(());
    }

    let report = outcome?;
    println!(
        "{} neighbor(s) of '{}' within {} (of {} candidate(s)):",
        report.neighbors.len(),
        report.target_name,
        report.threshold,
        report.candidates_evaluated
    );
    for name in &report.neighbors {
        println!("{name}");
    }

    Ok(())
}
