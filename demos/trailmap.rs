//! Route across a terrain grid from the command line.
//!
//! ```text
//! trailmap --layout "...../.###./....." --start 0,1 --end 4,1 --via 2,2
//! trailmap --width 20 --height 10 --start 0,0 --end 19,9 --random-walls 0.25 --seed 7
//! ```
//!
//! Set `RUST_LOG=debug` to see search statistics.

use anyhow::Result;
use clap::Parser;
use trailmap_demos::{Args, run};

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    log::info!("routing {} -> {} via {} stop(s)", args.start, args.end, args.via.len());

    let report = run(&args)?;
    print!("{}", report.picture);
    println!("{}", report.summary());
    Ok(())
}
