use std::process::ExitCode;

use chanfilter::filter::{FilterConfig, FilterError};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = FilterConfig::default();
    log::debug!("running with {config:?}");

    // the load line is printed as soon as decoding finishes, before masking and saving
    let res = config.run_with(|path, size| {
        println!(
            "Image '{}' loaded. Dimensions: ({}, {}, 3)",
            path.display(),
            size.height,
            size.width
        );
    });

    match res {
        Ok(report) => {
            println!(
                "AND filter applied. Resulting image saved to '{}'",
                report.output_path.display()
            );
            ExitCode::SUCCESS
        }
        Err(FilterError::Load { path, source }) => {
            eprintln!("Error: could not load the image at '{}'.", path.display());
            eprintln!("Caused by: {source}");
            ExitCode::FAILURE
        }
        Err(FilterError::Unexpected(err)) => {
            eprintln!("An unexpected error occurred: {err}");
            ExitCode::FAILURE
        }
    }
}
