//! Diagnostic harness for the HR-cost advisor.
//!
//! Loads a catalog file, runs the calculation engine over a category (or
//! the whole catalog) with one worked scenario, and prints the computed
//! ratio bands, recommended budgets, and allocation splits. A manual
//! smoke-test surface for eyeballing expected numeric output, not a
//! product interface.

use std::env;
use std::process;
use std::time::Instant;

use chrono::Utc;
use serde::Serialize;

use advisor_catalog::{Catalog, Industry};
use advisor_engine::{
    build_recommendation, calculate, validation, CalculationResult, UserInput,
};

/// Scenario defaults when no financial flags are given.
const DEFAULT_REVENUE: f64 = 10_000_000.0;
const DEFAULT_MARGIN: f64 = 30.0;

// ---------------------------------------------------------------------------
// JSON output contract
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct DiagnosticsJson {
    generated_at: String,
    catalog_path: String,
    load_ms: u128,
    scenario: ScenarioJson,
    industries: Vec<IndustryJson>,
    category_comparison: Vec<CategoryComparisonJson>,
}

#[derive(Serialize)]
struct ScenarioJson {
    revenue: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    gross_profit: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    gross_profit_margin: Option<f64>,
}

#[derive(Serialize)]
struct IndustryJson {
    id: u32,
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    primary_growth_engine: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    secondary_growth_engine: Option<String>,
    hr_cost_ratio_min: f64,
    hr_cost_ratio_max: f64,
    mid_ratio: f64,
    gross_profit: f64,
    recommended_hr_cost: f64,
    hr_cost_ratio: f64,
    hr_cost_to_revenue_ratio: f64,
    advice: String,
    allocation: Vec<AllocationJson>,
}

#[derive(Serialize)]
struct AllocationJson {
    department: String,
    percentage: f64,
    amount: f64,
}

#[derive(Serialize)]
struct CategoryComparisonJson {
    category: String,
    industry_count: usize,
    avg_ratio_min: f64,
    avg_ratio_max: f64,
}

fn industry_json(industry: &Industry, result: &CalculationResult) -> IndustryJson {
    let advice = build_recommendation(result)
        .map(|r| r.advice.to_string())
        .unwrap_or_default();
    IndustryJson {
        id: industry.id,
        name: industry.name.clone(),
        primary_growth_engine: industry.primary_growth_engine.map(|e| e.label().to_string()),
        secondary_growth_engine: industry
            .secondary_growth_engine
            .map(|e| e.label().to_string()),
        hr_cost_ratio_min: industry.hr_cost_ratio_min,
        hr_cost_ratio_max: industry.hr_cost_ratio_max,
        mid_ratio: industry.mid_ratio(),
        gross_profit: result.gross_profit,
        recommended_hr_cost: result.recommended_hr_cost,
        hr_cost_ratio: result.hr_cost_ratio,
        hr_cost_to_revenue_ratio: result.hr_cost_to_revenue_ratio,
        advice,
        allocation: result
            .department_allocation
            .iter()
            .map(|share| AllocationJson {
                department: share.department.label().to_string(),
                percentage: share.percentage,
                amount: share.amount,
            })
            .collect(),
    }
}

/// Per-category average ratio band across the whole catalog.
fn category_comparison(catalog: &Catalog) -> Vec<CategoryComparisonJson> {
    catalog
        .categories
        .iter()
        .filter_map(|category| {
            let industries = catalog.category_industries(category);
            if industries.is_empty() {
                return None;
            }
            let count = industries.len() as f64;
            let avg_min: f64 =
                industries.iter().map(|i| i.hr_cost_ratio_min).sum::<f64>() / count;
            let avg_max: f64 =
                industries.iter().map(|i| i.hr_cost_ratio_max).sum::<f64>() / count;
            Some(CategoryComparisonJson {
                category: category.name.clone(),
                industry_count: industries.len(),
                avg_ratio_min: avg_min,
                avg_ratio_max: avg_max,
            })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Human-readable output
// ---------------------------------------------------------------------------

fn print_human(
    industries: &[(&Industry, CalculationResult)],
    comparison: &[CategoryComparisonJson],
    scenario: &ScenarioJson,
    load_ms: u128,
) {
    println!("=== HR-Cost Advisor Diagnostics ===");
    println!();
    println!(
        "Scenario: revenue {:.0}, {}",
        scenario.revenue,
        match (scenario.gross_profit, scenario.gross_profit_margin) {
            (Some(gp), _) => format!("gross profit {gp:.0}"),
            (None, Some(m)) => format!("margin {m:.1}%"),
            (None, None) => "no profit data".into(),
        }
    );
    println!("Catalog load: {load_ms} ms");
    println!();

    for (industry, result) in industries {
        println!("{}. {}", industry.id, industry.name);
        println!(
            "   HR cost band: {:.0}%–{:.0}% (midpoint {:.1}%)",
            industry.hr_cost_ratio_min,
            industry.hr_cost_ratio_max,
            industry.mid_ratio()
        );
        match (industry.primary_growth_engine, industry.secondary_growth_engine) {
            (Some(primary), Some(secondary)) => {
                println!("   Growth engine: {primary} / {secondary}")
            }
            (Some(primary), None) => println!("   Growth engine: {primary}"),
            _ => {}
        }
        println!(
            "   Recommended monthly HR cost: {:.0} ({:.1}% of gross profit, {:.1}% of revenue)",
            result.recommended_hr_cost, result.hr_cost_ratio, result.hr_cost_to_revenue_ratio
        );
        for share in &result.department_allocation {
            println!(
                "     {:<22} {:>5.1}%  {:>12.0}",
                share.department.label(),
                share.percentage,
                share.amount
            );
        }
        if let Some(recommendation) = build_recommendation(result) {
            println!("   Advice: {}", recommendation.advice);
        }
        println!();
    }

    println!("=== Ratio band comparison by category ===");
    println!();
    for entry in comparison {
        println!(
            "{}: {:.1}%–{:.1}% ({} industries)",
            entry.category, entry.avg_ratio_min, entry.avg_ratio_max, entry.industry_count
        );
    }
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn usage() -> ! {
    eprintln!(
        "Usage: advisor-cli <catalog.json> [--category ID] [--revenue N] [--gross-profit N] [--margin P] [--json]"
    );
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --category      Restrict to one catalog category id");
    eprintln!("  --revenue       Scenario revenue (default: 10,000,000)");
    eprintln!("  --gross-profit  Scenario gross profit (wins over margin)");
    eprintln!("  --margin        Scenario gross-profit margin % (default: 30)");
    eprintln!("  --json          Output as JSON instead of formatted text");
    eprintln!();
    eprintln!("Example:");
    eprintln!("  advisor-cli advisor-catalog/fixtures/industries.json --category manufacturing");
    eprintln!("  advisor-cli advisor-catalog/fixtures/industries.json --revenue 3000000 --margin 70 --json");
    process::exit(1);
}

fn parse_f64_flag(args: &[String], i: usize, flag: &str) -> f64 {
    match args.get(i + 1).and_then(|v| v.parse().ok()) {
        Some(value) => value,
        None => {
            eprintln!("Error: {flag} requires a numeric value");
            process::exit(1);
        }
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        usage();
    }

    let catalog_path = &args[1];
    let mut category_filter: Option<String> = None;
    let mut revenue = DEFAULT_REVENUE;
    let mut gross_profit: Option<f64> = None;
    let mut margin: Option<f64> = None;
    let mut json_output = false;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--category" => {
                match args.get(i + 1) {
                    Some(id) => category_filter = Some(id.clone()),
                    None => {
                        eprintln!("Error: --category requires a category id");
                        process::exit(1);
                    }
                }
                i += 2;
            }
            "--revenue" => {
                revenue = parse_f64_flag(&args, i, "--revenue");
                i += 2;
            }
            "--gross-profit" => {
                gross_profit = Some(parse_f64_flag(&args, i, "--gross-profit"));
                i += 2;
            }
            "--margin" => {
                margin = Some(parse_f64_flag(&args, i, "--margin"));
                i += 2;
            }
            "--json" => {
                json_output = true;
                i += 1;
            }
            other => {
                eprintln!("Unknown argument: {other}");
                process::exit(1);
            }
        }
    }

    if gross_profit.is_none() && margin.is_none() {
        margin = Some(DEFAULT_MARGIN);
    }

    let load_start = Instant::now();
    let catalog = match Catalog::from_path(catalog_path) {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("Error loading catalog: {e}");
            process::exit(1);
        }
    };
    let load_ms = load_start.elapsed().as_millis();

    let industries: Vec<&Industry> = match &category_filter {
        Some(id) => match catalog.category(id) {
            Some(category) => catalog.category_industries(category),
            None => {
                eprintln!("Error: unknown category '{id}'");
                eprintln!(
                    "  Available: {:?}",
                    catalog.categories.iter().map(|c| &c.id).collect::<Vec<_>>()
                );
                process::exit(1);
            }
        },
        None => catalog.industries.iter().collect(),
    };

    let mut results: Vec<(&Industry, CalculationResult)> = Vec::with_capacity(industries.len());
    for industry in industries {
        let check = validation::check_basic_input(
            Some(industry.id),
            revenue,
            gross_profit,
            margin,
        );
        if let Some(reason) = check.reason() {
            eprintln!("Invalid scenario input: {reason}");
            process::exit(1);
        }

        let input = UserInput {
            industry_id: industry.id,
            revenue,
            gross_profit,
            gross_profit_margin: margin,
        };
        match calculate(&input, industry) {
            Ok(result) => results.push((industry, result)),
            Err(e) => {
                // Unreachable once validation passed; a failure here is a bug.
                eprintln!("Calculation failed for industry {}: {e}", industry.id);
                process::exit(1);
            }
        }
    }

    let comparison = category_comparison(&catalog);
    let scenario = ScenarioJson {
        revenue,
        gross_profit,
        gross_profit_margin: margin,
    };

    if json_output {
        let diagnostics = DiagnosticsJson {
            generated_at: Utc::now().to_rfc3339(),
            catalog_path: catalog_path.clone(),
            load_ms,
            scenario,
            industries: results
                .iter()
                .map(|(industry, result)| industry_json(industry, result))
                .collect(),
            category_comparison: comparison,
        };
        println!("{}", serde_json::to_string_pretty(&diagnostics).unwrap());
    } else {
        print_human(&results, &comparison, &scenario, load_ms);
    }
}
