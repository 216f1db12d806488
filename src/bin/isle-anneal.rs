use anyhow::{anyhow, Context, Result};
use clap::{arg, ArgAction, Command};
use isle_anneal::campaign::{Campaign, CampaignConfig, CampaignResult, StageResult};
use isle_anneal::catalog::{Catalog, Faction, Theme};
use isle_anneal::loader::load_items_from_path;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

fn cli() -> Command {
    Command::new("isle-anneal")
        .about("Picks short island sets that cover every fertility a population needs")
        .arg_required_else_help(true)
        .arg(arg!(<ITEMS> "Path to the island records").value_parser(clap::value_parser!(PathBuf)))
        .arg(
            arg!(--theme <THEME> "Dataset the records belong to")
                .value_parser(["albion", "latium"])
                .required(true),
        )
        .arg(
            arg!(--faction <FACTION> "Faction to solve for, in order (repeatable)")
                .value_parser(["all", "celtic", "roman"])
                .action(ArgAction::Append),
        )
        .arg(
            arg!(--config <FILE> "JSON run configuration; flags override it")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(arg!(--seed <SEED> "Random seed").value_parser(clap::value_parser!(u64)))
        .arg(arg!(--shuffle "Shuffle the pool before each stage"))
        .arg(arg!(--"both-orders" "Also solve the factions in reverse order"))
}

fn enable_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    enable_tracing();
    if let Err(e) = run(cli().get_matches()) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(matches: clap::ArgMatches) -> Result<()> {
    let items_path = matches
        .get_one::<PathBuf>("ITEMS")
        .ok_or_else(|| anyhow!("missing ITEMS"))?;
    let theme: Theme = matches
        .get_one::<String>("theme")
        .ok_or_else(|| anyhow!("missing --theme"))?
        .parse()?;
    let catalog = Catalog::for_theme(theme);

    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => load_config(path)?,
        None => CampaignConfig::default(),
    };
    if let Some(&seed) = matches.get_one::<u64>("seed") {
        config.seed = Some(seed);
    }
    if matches.get_flag("shuffle") {
        config.shuffle = true;
    }

    let factions: Vec<Faction> = match matches.get_many::<String>("faction") {
        Some(names) => names
            .map(|n| n.parse::<Faction>())
            .collect::<Result<Vec<_>, _>>()?,
        None => default_factions(&catalog),
    };

    let items = load_items_from_path(items_path, &catalog)
        .with_context(|| format!("Failed to load islands from {}", items_path.display()))?;
    tracing::info!(islands = items.len(), %theme, "loaded islands");

    println!("Beginning Island Optimization Process...");
    println!();

    let mut orders = vec![factions.clone()];
    if matches.get_flag("both-orders") && factions.len() > 1 {
        orders.push(factions.iter().rev().copied().collect());
    }

    let results = Campaign::run_orders(&items, &catalog, &orders, &config)
        .context("Failed to solve island campaign")?;
    for result in &results {
        report(result);
    }

    println!();
    println!("Done");
    Ok(())
}

fn load_config(path: &Path) -> Result<CampaignConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Failed to parse config {}", path.display()))
}

fn default_factions(catalog: &Catalog) -> Vec<Faction> {
    let factions: Vec<Faction> = catalog.factions().collect();
    if factions.is_empty() {
        vec![Faction::All]
    } else {
        factions
    }
}

fn report(result: &CampaignResult) {
    let order: Vec<String> = result.order().iter().map(|&f| label(f)).collect();
    println!("{} Optimized Island Set:", order.join(" then "));
    for stage in &result.stages {
        println!("{:>11} {}", label(stage.faction), islands_line(stage));
    }
}

fn islands_line(stage: &StageResult) -> String {
    format!("Islands: [{}] (Score = {:.0})", stage.names().join(", "), stage.score)
}

fn label(faction: Faction) -> String {
    let name = faction.to_string();
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => name,
    }
}
