//! Draw sin and cos with a uniform error band.
//!
//! Usage: errorfill [OUTPUT].  Without OUTPUT, the figure is shown.

use std::{env, error::Error, f64::consts::PI};
use log::LevelFilter;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default()
                   .filter_or("ERRORFILL_LOG", "warn"))
        .init();

    let n = 50;
    let x: Vec<_> = (0 .. n)
        .map(|i| 2. * PI * i as f64 / (n - 1) as f64).collect();
    let y_sin: Vec<_> = x.iter().map(|x| x.sin()).collect();
    let y_cos: Vec<_> = x.iter().map(|x| x.cos()).collect();

    let (fig, [[mut ax]]) = errorfill::subplots()?;
    ax.errorfill(&x, &y_sin).yerr(0.2)
        .label("sin").label_fill("sin ± 0.2").plot()?;
    ax.errorfill(&x, &y_cos).yerr(0.2)
        .label("cos").label_fill("cos ± 0.2").plot()?;
    ax.legend()?;
    match env::args_os().nth(1) {
        Some(path) => fig.save().to_file(path)?,
        None => errorfill::show()?,
    }
    Ok(())
}
