// CLASSIFICATION: COMMUNITY
// Filename: build.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-19

fn main() {
    use std::env;

    println!("cargo:rerun-if-env-changed=COH_PM_STD_PARTITION");

    // Default resume device baked into the binary; empty disables resume
    // unless `resume=` is given on the command line.
    let partition = env::var("COH_PM_STD_PARTITION").unwrap_or_default();
    if !partition.is_empty() {
        println!("cargo:warning=default resume device: {partition}");
    }
    println!("cargo:rustc-env=COH_PM_STD_PARTITION={partition}");
}
