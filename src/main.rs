use postcode_bundler::BundleEncoder;
use std::{env, fs, process};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!("Usage: {} <path-to-extract> <output-bundle>", args[0]);
        process::exit(1);
    }

    let extract_path = &args[1];
    let bundle_path = &args[2];

    println!("Encoding postcode extract: {}", extract_path);
    println!("{}", "=".repeat(60));

    let input = match fs::read(extract_path) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("ERROR: Failed to read {}", extract_path);
            eprintln!("  {}", e);
            process::exit(1);
        }
    };

    match BundleEncoder::new().encode(&input) {
        Ok(bundle) => {
            if let Err(e) = fs::write(bundle_path, &bundle.bytes) {
                eprintln!("ERROR: Failed to write {}", bundle_path);
                eprintln!("  {}", e);
                process::exit(1);
            }

            let stats = bundle.stats;
            println!("\n{}", "=".repeat(60));
            println!("SUCCESS! Bundle written to {}", bundle_path);
            println!("{}", "=".repeat(60));

            println!("\nStatistics:");
            println!("  Rows parsed: {}", stats.rows);
            println!("  Districts: {}", stats.districts);
            println!("  Sectors: {}", stats.sectors);
            println!("  Units: {}", stats.units);
            println!(
                "  Spans: {} delta, {} absolute",
                stats.delta_spans, stats.absolute_spans
            );
            println!("  Input size: {} bytes", input.len());
            println!("  Bundle size: {} bytes", stats.output_len);
            println!(
                "  Ratio: {:.2}%",
                100.0 * stats.output_len as f64 / input.len().max(1) as f64
            );
        }
        Err(e) => {
            eprintln!("\nERROR: Failed to encode extract");
            eprintln!("  {}", e);
            process::exit(1);
        }
    }
}
