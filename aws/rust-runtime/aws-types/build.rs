/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use std::env;
use std::fs::File;
use std::io::Write;
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let out_dir = env::var("OUT_DIR")?;
    let dest_path = Path::new(&out_dir).join("build_env.rs");
    let rust_version = rustc_version::version()?.to_string();
    let mut f = File::create(&dest_path)?;
    writeln!(f, "const RUST_VERSION: &str = \"{}\";", rust_version)?;
    println!("cargo:rerun-if-changed=build.rs");
    Ok(())
}
