//! Basic Assessment Example
//!
//! Computes PMV and PPD for a handful of indoor conditions and prints the
//! predicted sensation for each.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_basic_assessment
//! ```

use comfort_core::{assess, assess_values, RawInputs};

fn main() {
    println!("ComfortCore Basic Assessment Example");
    println!("====================================\n");

    let conditions = [
        ("Cool office morning", 20.0, 20.0, 0.1, 45.0, 1.2, 0.5),
        ("Comfortable office", 24.0, 24.0, 0.1, 50.0, 1.2, 0.5),
        ("Warm afternoon", 28.0, 29.0, 0.15, 60.0, 1.2, 0.4),
        ("Summer with a fan", 27.0, 27.0, 0.6, 55.0, 1.2, 0.3),
        ("Standing workshop", 22.0, 22.0, 0.2, 40.0, 1.4, 0.5),
        ("Winter coat indoors", 18.0, 18.0, 0.1, 30.0, 1.2, 1.4),
    ];

    for (label, ta, tr, vel, rh, met, clo) in conditions {
        let result = assess_values(ta, tr, vel, rh, met, clo);
        println!("  {label}");
        println!("    ta={ta}°C tr={tr}°C vel={vel} m/s rh={rh}% met={met} clo={clo}");
        println!(
            "    → PMV {:+.2} ({}), PPD {:.1}%\n",
            result.pmv,
            result.sensation().description(),
            result.ppd
        );
    }

    // A survey with gaps still assesses: missing fields fall back to the
    // standard office defaults.
    println!("Partial survey (only temperature known):");
    let partial = RawInputs {
        air_temp: Some(26.5),
        ..RawInputs::default()
    };
    let result = assess(&partial);
    println!(
        "    → PMV {:+.2} ({}), PPD {:.1}%",
        result.pmv,
        result.sensation().description(),
        result.ppd
    );
}
