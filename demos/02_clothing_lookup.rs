//! Clothing Lookup Example
//!
//! Shows how survey code resolves garment and activity codes against the
//! static tables before handing numeric values to the comfort pipeline.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 02_clothing_lookup
//! ```

use comfort_core::{assess_values, lookup, Gender};

fn main() {
    println!("ComfortCore Clothing Lookup Example");
    println!("===================================\n");

    for gender in [Gender::Male, Gender::Female, Gender::Other] {
        println!("{gender:?} ensembles:");
        for entry in lookup::clothing_for(gender) {
            println!(
                "  {:22} CLO {:.1}  {}",
                entry.code, entry.clo, entry.description
            );
        }
        println!();
    }

    println!("Activity levels:");
    for entry in lookup::ACTIVITY_LEVELS {
        println!(
            "  {:22} MET {:.1}  {}",
            entry.code, entry.met, entry.description
        );
    }

    // Resolve a full survey selection and assess it.
    println!("\nAssessing: female, skirt and blouse, seated light work, 24°C");
    let clo = lookup::clothing_insulation_or_default(Gender::Female, "skirt_blouse");
    let met = lookup::activity_rate_or_default("seated_light");
    let result = assess_values(24.0, 24.0, 0.1, 50.0, met, clo);
    println!(
        "    → PMV {:+.2} ({}), PPD {:.1}%",
        result.pmv,
        result.sensation().description(),
        result.ppd
    );

    // Unknown codes don't fail the survey; they resolve to the defaults.
    let unknown = lookup::clothing_insulation_or_default(Gender::Male, "wizard_robe");
    println!("\nUnknown garment code resolves to the default: CLO {unknown:.1}");
}
