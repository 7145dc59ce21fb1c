//! Output formatting module

use yardstick_app::app::{AggregateQuote, ConcreteQuote};
use yardstick_domain::service::MaterialCatalog;
use yardstick_types::{OutputFormat, Result};

const NO_MATERIAL_HINT: &str =
    "No materials with density found. Add materials with a density (lb/ft³) to the content file.";
const INCOMPLETE_HINT: &str = "Enter length, width and depth to get an estimate.";

pub fn output_materials(output_format: OutputFormat, catalog: &MaterialCatalog) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(catalog.items())?;
        println!("{}", content);
        return Ok(());
    }

    println!("\nMaterials");
    println!("=========");
    if catalog.is_empty() {
        println!("{}", NO_MATERIAL_HINT);
        return Ok(());
    }

    println!(
        "{:<16} {:<28} {:>10}  {:<14} {}",
        "ID", "Name", "lb/ft³", "Stored as", "Category"
    );
    for m in catalog.items() {
        println!(
            "{:<16} {:<28} {:>10.2}  {:<14} {}",
            m.id,
            m.name,
            m.lb_per_ft3,
            m.source_density.to_string(),
            m.category
        );
    }

    Ok(())
}

pub fn output_aggregate(output_format: OutputFormat, quote: &AggregateQuote) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(quote)?;
        println!("{}", content);
        return Ok(());
    }

    println!("\nAggregates Estimate (Tons)");
    println!("==========================");
    match quote.material {
        Some(ref m) => println!("Material:        {} ({:.2} lb/ft³)", m.name, m.lb_per_ft3),
        None => println!("Material:        (none available)"),
    }

    let dims = &quote.dimensions;
    println!("Length:          {} ft", dims.length_ft);
    println!("Width:           {} ft", dims.width_ft);
    println!("Depth:           {} {}", dims.depth, quote.depth_unit);
    println!("-------------------------");
    println!("Tons:            {:.2}", quote.estimate.tons);
    println!(
        "With waste ({}%): {:.2}",
        dims.waste_percent, quote.estimate.tons_with_waste
    );

    if !quote.material_available() {
        println!("\n{}", NO_MATERIAL_HINT);
    } else if !quote.input_complete {
        println!("\n{}", INCOMPLETE_HINT);
    }

    println!("\nResults are estimates. For compaction/moisture variability, consider extra margin.");
    Ok(())
}

pub fn output_concrete(output_format: OutputFormat, quote: &ConcreteQuote) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(quote)?;
        println!("{}", content);
        return Ok(());
    }

    println!("\nConcrete Estimate (Cubic Yards)");
    println!("===============================");
    let dims = &quote.dimensions;
    println!("Length:          {} ft", dims.length_ft);
    println!("Width:           {} ft", dims.width_ft);
    println!("Thickness:       {} in", dims.depth);
    println!("-------------------------");
    println!("Cubic yards:     {:.2}", quote.estimate.cubic_yards);
    println!(
        "With waste ({}%): {:.2}",
        dims.waste_percent, quote.estimate.cubic_yards_with_waste
    );

    if !quote.input_complete {
        println!("\nEnter length, width and thickness to get an estimate.");
    }

    println!("\nConcrete volumes are estimates. For pump priming, spillage, or irregular subgrade, consider extra margin.");
    Ok(())
}
