use diff_cases::{generator, paths};

fn main() {
    // The output directory is never created here; a setup step must provide it.
    println!(
        "diff-cases v{} writing {}",
        env!("CARGO_PKG_VERSION"),
        paths::combinations_file_path().display()
    );

    match generator::generate_combinations() {
        Ok(summary) => println!(
            "[generate] Wrote {} combinations of {} cases to {}",
            summary.lines,
            summary.cases,
            summary.path.display()
        ),
        Err(e) => {
            eprintln!("[generate] Failed to write combinations: {e:?}");
            std::process::exit(1);
        }
    }
}
