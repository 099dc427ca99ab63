use std::{io, process::ExitCode, time::Instant};

use log::{debug, error, info};

mod colour;
mod error;
mod escape;
mod pixel;
mod ppm;
mod progress;
mod render;
mod screen;

const WIDTH: u32 = 4000;
const HEIGHT: u32 = 3000;
const OUTPUT_PATH: &str = "mandelbrot.ppm";

fn run() -> Result<(), error::Error> {
    let size = screen::Size {
        width: WIDTH,
        height: HEIGHT,
    };

    // Nothing is computed until the output is known to be writable.
    let mut writer = ppm::create(OUTPUT_PATH, size)?;
    let mut progress = progress::Progress::new(io::stdout(), size.height);

    let renderer = render::Renderer::new(size, escape::MAX_ITERATIONS);
    debug!("{} bytes of pixel data", size.byte_len());
    renderer.render(&mut writer, &mut progress)?;
    writer.finish()?;

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let start = Instant::now();
    info!("rendering {}x{} to {}", WIDTH, HEIGHT, OUTPUT_PATH);

    match run() {
        Ok(()) => {
            info!("wrote {} in {:?}", OUTPUT_PATH, start.elapsed());
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{}", err);
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
