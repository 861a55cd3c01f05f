use std::env;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// IEC 61966-2-1 exact formula: sRGB to linear
fn srgb_to_linear_exact(srgb: f64) -> f64 {
    if srgb <= 0.04045 {
        srgb / 12.92
    } else {
        ((srgb + 0.055) / 1.055).powf(2.4)
    }
}

/// WCAG 2.x relative luminance linearization (threshold 0.03928)
fn wcag_to_linear_exact(srgb: f64) -> f64 {
    if srgb <= 0.03928 {
        srgb / 12.92
    } else {
        ((srgb + 0.055) / 1.055).powf(2.4)
    }
}

fn write_table(file: &mut File, name: &str, doc: &str, f: fn(f64) -> f64) -> io::Result<()> {
    writeln!(file, "/// {doc}")?;
    writeln!(file, "/// Index: 8-bit channel value, Value: linear value")?;
    writeln!(file, "pub static {name}: [f64; 256] = [")?;
    for i in 0..256 {
        let linear = f(i as f64 / 255.0);
        if i > 0 && i % 4 == 0 {
            writeln!(file)?;
        }
        // {:?} prints the shortest representation that round-trips exactly
        write!(file, "    {linear:?},")?;
    }
    writeln!(file, "\n];")?;
    writeln!(file)
}

fn main() -> io::Result<()> {
    let out_dir = env::var("OUT_DIR").map_err(io::Error::other)?;
    let dest_path = Path::new(&out_dir).join("gamma_lut.rs");
    let mut file = File::create(&dest_path)?;

    write_table(
        &mut file,
        "SRGB_TO_LINEAR",
        "Lookup table for sRGB to linear conversion (IEC 61966-2-1)",
        srgb_to_linear_exact,
    )?;
    write_table(
        &mut file,
        "WCAG_TO_LINEAR",
        "Lookup table for WCAG relative luminance linearization",
        wcag_to_linear_exact,
    )?;

    println!("cargo::rerun-if-changed=build.rs");
    Ok(())
}
