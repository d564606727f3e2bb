//! Fit a straight line by least squares, then interpolate the fitted values.
//!
//! Usage: cargo run --example least_squares [-- path/to/config.json]
//! Logging is controlled through `POK_LOG`, e.g. `POK_LOG=pok_linalg=trace`.

use anyhow::{Context, Result};
use log::LevelFilter;

use pok_linalg::config::ToolkitConfig;
use pok_linalg::interpolate::build_interpolator;
use pok_linalg::Matrix;

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("POK_LOG", "error,pok_linalg=info"))
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => ToolkitConfig::from_json_file(&path)?,
        None => ToolkitConfig::default(),
    };
    log::info!("Using configuration: {:?}", config);

    let xs = [0.3, 0.8, 1.2, 1.7, 2.4, 3.1, 3.8, 4.5, 5.1, 5.8, 6.5];
    let ys = [8.61, 7.94, 7.55, 6.85, 6.11, 5.17, 4.19, 3.41, 2.63, 1.77, 0.89];

    // Design matrix [1 x] for y = b0 + b1 * x.
    let design = Matrix::from_shape_vec((xs.len(), 1), xs.to_vec())?
        .insert_col(0, &vec![1.0; xs.len()])?;
    let rhs = Matrix::from_shape_vec((ys.len(), 1), ys.to_vec())?;

    let coeffs = design
        .left_divide_with(&rhs, &config.solver)
        .context("Least-squares fit failed")?;
    println!("coefficients (intercept, slope):\n{}", coeffs);

    let fitted = design.multiply_by(&coeffs)?;
    let residual = fitted.subtract(&rhs)?;
    let sse: f64 = residual.as_slice().iter().map(|r| r * r).sum();
    println!("sum of squared residuals: {:.6}", sse);

    let mut interp = build_interpolator(config.interpolation);
    interp.fit(&xs, fitted.col(0)?.as_slice())?;
    log::info!("Interpolating with {}", interp.name());

    let queries = [0.3, 1.0, 2.5, 4.0, 6.5, 7.0];
    for q in queries {
        match interp.estimate(q) {
            Ok(est) => println!("y({:.2}) = {:.4}", q, est),
            Err(e) => println!("y({:.2}) unavailable: {}", q, e),
        }
    }

    Ok(())
}
