use log::{debug, warn};

use tonecurve_core::config::{load_config, log_config_usage};
use tonecurve_core::{run_transform, TransformOptions, TransformParameters, TransformReport};

use crate::args::Cli;

/// Install the global logger. `--verbose` raises the default level to debug.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let env = env_logger::Env::default().default_filter_or(default_level);
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}

/// Size the global rayon pool. Only the first call in a process has any effect.
pub fn configure_thread_pool(threads: Option<usize>) {
    let Some(num_threads) = threads.filter(|&n| n > 0) else {
        return;
    };

    match rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()
    {
        Ok(()) => debug!("Using {} threads for parallel processing", num_threads),
        Err(e) => warn!("Failed to configure thread pool: {}", e),
    }
}

/// Execute the transform described by the command line.
///
/// Loads configuration, merges command-line overrides, runs the pipeline and
/// prints the processing time on success.
pub fn cmd_transform(cli: &Cli) -> tonecurve_core::Result<TransformReport> {
    let handle = load_config(cli.config.as_deref())?;
    log_config_usage(&handle);
    let defaults = &handle.config.defaults;

    configure_thread_pool(cli.threads.or(defaults.threads));

    let mut options = TransformOptions::from(defaults);
    if cli.normalize {
        options.normalize = true;
    }

    let params = TransformParameters::new(&cli.input, &cli.output, cli.threshold, cli.gamma);
    debug!(
        "Transforming {} -> {} (t = {}, g = {}, normalize = {})",
        params.input().display(),
        params.output().display(),
        params.threshold(),
        params.gamma(),
        options.normalize
    );

    let report = run_transform(&params, &options)?;
    println!("Processing time: {:.3}ms", report.elapsed_ms());

    Ok(report)
}
