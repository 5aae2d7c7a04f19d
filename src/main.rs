use std::env;

use structopt::clap::{AppSettings, ErrorKind};
use structopt::StructOpt;

use screenres::Resolution;

/// Changes the resolution of the primary display.
#[derive(StructOpt, Debug)]
#[structopt(name = "screenres", settings = &[AppSettings::AllowNegativeNumbers])]
struct Opt {
    /// Target width in pixels
    width: i32,
    /// Target height in pixels
    height: i32,
}

const USAGE: &str = "Usage: screenres <width> <height>";

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    env_logger::init();

    // The original tool reports every rejected invocation on stdout and still
    // terminates normally, so clap's exit-on-error path is bypassed here.
    let opt = match Opt::from_iter_safe(env::args()) {
        Ok(opt) => opt,
        Err(err) => match err.kind {
            ErrorKind::HelpDisplayed | ErrorKind::VersionDisplayed => {
                println!("{}", err.message);
                return Ok(());
            }
            ErrorKind::ValueValidation => {
                println!("Invalid width or height.");
                return Ok(());
            }
            _ => {
                println!("{}", USAGE);
                return Ok(());
            }
        },
    };

    let target = match Resolution::from_dimensions(opt.width, opt.height) {
        Ok(target) => target,
        Err(err) => {
            println!("{}", err);
            return Ok(());
        }
    };

    change(target)?;
    Ok(())
}

#[cfg(windows)]
fn change(target: Resolution) -> std::io::Result<()> {
    use screenres::{change_resolution, PrimaryDisplay};

    let mut display = PrimaryDisplay;
    change_resolution(&mut display, &mut std::io::stdout(), target)
}

#[cfg(not(windows))]
fn change(target: Resolution) -> std::io::Result<()> {
    log::warn!("no display service available on this platform");
    println!(
        "Changing the display resolution to {} is only supported on Windows.",
        target
    );
    Ok(())
}
