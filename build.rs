use std::env;
use std::fs;
use std::path::PathBuf;

#[path = "build/firmware.rs"]
mod firmware;

fn main() {
    println!("cargo:rerun-if-changed=build/firmware.rs");

    let target_os = env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();
    let target_arch = env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_default();

    // Only the Cortex-M firmware needs a memory map, hosted builds link normally
    if firmware::uses_cortex_m_rt(&target_os, &target_arch) {
        println!("cargo:rerun-if-changed=memory.x");

        let out = PathBuf::from(env::var("OUT_DIR").unwrap());
        fs::copy("memory.x", out.join("memory.x")).unwrap();

        println!("cargo:rustc-link-search={}", out.display());
        println!("cargo:rustc-link-arg-bins=-Tlink.x");
    }
}
