use bank_ledger_rs::{AnalyzerBuilder, AnalyzerError, DateValidation, Kind};
use std::env;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::from_default_env().add_directive("bank_ledger_rs=info".parse()?);
    fmt().with_env_filter(filter).init();

    // analyze [statement.csv] [output-prefix.{csv,json,txt,xlsx}]
    let args: Vec<String> = env::args().collect();

    let file_path = if args.len() > 1 {
        &args[1]
    } else {
        println!("Using example data from demos/data/sample.csv\n");
        "demos/data/sample.csv"
    };

    let analyzer = AnalyzerBuilder::new()
        .filename(file_path)
        .date_validation(DateValidation::Strict)
        .build()?;

    for kind in [Kind::Debit, Kind::Credit] {
        println!("{}", analyzer.format_monthly_report(kind));
        match analyzer.average_monthly(kind) {
            Ok(average) => println!("Average monthly {}: {}\n", kind, average),
            Err(AnalyzerError::EmptyLedger(_)) => println!("No monthly {} found.\n", kind),
            Err(e) => return Err(e.into()),
        }
    }

    for skipped in analyzer.skipped() {
        println!("Skipped line {}: {}", skipped.line, skipped.reason);
    }

    if let Some(output) = args.get(2) {
        let output = std::path::Path::new(output);
        let stem = output.file_stem().and_then(|s| s.to_str()).unwrap_or("ledger");
        let ext = output.extension().and_then(|s| s.to_str()).unwrap_or("csv");

        for kind in [Kind::Debit, Kind::Credit] {
            let path = output.with_file_name(format!("{stem}-{kind}.{ext}"));
            analyzer.export_to_path(kind, &path)?;
            println!("Wrote {}", path.display());
        }
    }

    Ok(())
}
