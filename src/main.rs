//! Date picker CLI application.
//!
//! # Usage
//! ```ignore
//! datepick             // Current month
//! datepick 2 2026      // February 2026
//! datepick -N 1 -s 14  // Select the 14th of next month
//! datepick -t          // Select today
//! ```

use flexi_logger::{FileSpec, Logger};

use datepick::args::{Args, build_picker};
use datepick::formatter::render_picker;
use datepick::types::PickContext;

fn main() {
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("datepick: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut logger = Logger::try_with_env_or_str("warn")?;
    if let Some(log_file) = &args.log_file {
        logger = logger.log_to_file(FileSpec::try_from(log_file.clone())?);
    }
    let _logger = logger.start()?;

    let ctx = PickContext::new(args)?;
    let picker = build_picker(&ctx, args)?;

    for line in render_picker(&ctx, &picker)? {
        println!("{}", line);
    }

    Ok(())
}
