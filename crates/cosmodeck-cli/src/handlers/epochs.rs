use crate::args::OutputFormat;
use anyhow::Result;
use cosmodeck_core::Catalog;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;

pub fn handle(format: OutputFormat) -> Result<()> {
    let catalog = Catalog::new();

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(catalog.records())?);
        }
        OutputFormat::Plain => {
            let color = std::io::stdout().is_terminal();
            for (position, record) in catalog.iter().enumerate() {
                let header = format!("{}. {}", position + 1, record.name);
                if color {
                    println!("{}", header.bold());
                } else {
                    println!("{}", header);
                }
                println!("   time:  {}", record.time_since_origin);
                println!("   temp:  {}", record.temperature.unwrap_or("n/a"));
                println!("   {}", record.description);
                println!();
            }
            println!("{} epochs. Run `cosmodeck` to tour them.", catalog.len());
        }
    }

    Ok(())
}
