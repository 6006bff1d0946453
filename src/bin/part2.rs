use anyhow::{Context, Result};
use clap::Parser;
use day1::CLIArgs;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let totals = day1::read_calorie_totals(&args.input_path)?.flush_trailing(args.flush_trailing);
    let top_sum = day1::top_total_sum(totals, 3).with_context(|| {
        format!(
            "Failed to total calories in given input file({}).",
            args.input_path.display()
        )
    })?;
    println!("{}", top_sum);

    Ok(())
}
