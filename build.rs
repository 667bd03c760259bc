//! Retrieves information about the version of the engine from Git and the build
//! environment. This information is then written to a file in the output
//! directory and can be accessed at runtime by the engine.

use std::error::Error;
use std::path::Path;
use std::{env, fs};

fn generate_file(filename: &str, contents: &str) -> Result<(), Box<dyn Error>> {
    let out_dir = env::var_os("OUT_DIR").ok_or("OUT_DIR is not set")?;
    let dest_path = Path::new(&out_dir).join(filename);
    fs::write(dest_path, contents)?;
    Ok(())
}

fn generate_build_info() -> Result<(), Box<dyn Error>> {
    let profile = env::var("PROFILE")?;
    let debug_assertions = if env::var_os("CARGO_CFG_DEBUG_ASSERTIONS").is_some() {
        "+"
    } else {
        "-"
    };
    generate_file("profile", &format!("{profile} ({debug_assertions}debug_assertions)"))
}

fn main() -> Result<(), Box<dyn Error>> {
    generate_build_info()?;
    shadow_rs::new()?;
    Ok(())
}
