use crate::OutputFormat;
use anyhow::Result;
use cakewalk_suite::registry;
use console::style;

pub fn execute(format: OutputFormat) -> Result<()> {
    let cases = registry::all();

    match format {
        OutputFormat::Json => {
            let entries: Vec<_> = cases
                .iter()
                .map(|case| {
                    serde_json::json!({
                        "name": case.name,
                        "marker": case.marker,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        OutputFormat::Pretty => {
            println!("{}", style(format!("{} registered checks", cases.len())).bold());
            for case in &cases {
                println!("  {:<45} {}", case.name, style(case.marker).dim());
            }
        }
    }

    Ok(())
}
