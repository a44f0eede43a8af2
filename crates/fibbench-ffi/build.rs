//! Compiles the C workload into a static library linked into this crate.

fn main() {
    println!("cargo:rerun-if-changed=csrc/fibcalculator.c");
    println!("cargo:rerun-if-changed=csrc/fibcalculator.h");

    cc::Build::new()
        .file("csrc/fibcalculator.c")
        .include("csrc")
        .warnings(true)
        .compile("fibcalculator");
}
