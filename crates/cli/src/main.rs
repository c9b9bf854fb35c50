use std::path::Path;

use anyhow::Result;
use clap::Parser;
use raster::{write_icon, BOOKMARK_BLUE};

/// Generates the browser-extension bookmark icons as transparent PNGs
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    // Nothing is configurable; sizes and color are fixed by the extension
}

/// Every size the extension manifest requires.
const SIZES: [u32; 4] = [16, 32, 48, 128];

fn main() -> Result<()> {
    let _args = Args::parse();
    let cwd = Path::new(".");
    for size in SIZES {
        write_icon(cwd, size, BOOKMARK_BLUE)?;
        println!("Created icon-{size}.png");
    }
    println!();
    println!("All icons created successfully!");
    println!("Copy these files to: recall-chrome-ext/assets/icons/");
    Ok(())
}
