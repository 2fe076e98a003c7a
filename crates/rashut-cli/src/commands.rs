//! Subcommand implementations

use anyhow::{bail, Context, Result};
use rashut_core::{load_view, DashConfig, DashboardView};
use rashut_hierarchy::build_hierarchy;
use rashut_model::{AggregateStatistics, Branch, Record, Year};
use rashut_nav::{coverage_gaps, NavigationResolver};
use rashut_query::{QueryFilters, RecordSource, StaticSource, XogClient};
use rashut_stats::{compute_statistics, demo_units, BadgeKind, BarChartSummary, HeaderBadges, UnitTally};
use std::fmt::Write as _;
use std::path::Path;

/// Read a JSON array of records
pub(crate) fn read_records(path: &Path) -> Result<Vec<Record>> {
    let input = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let records: Vec<Record> = serde_json::from_str(&input)
        .with_context(|| format!("{} is not a JSON array of records", path.display()))?;
    tracing::info!(path = %path.display(), records = records.len(), "records read");
    Ok(records)
}

/// Load the config file, or defaults when none is given
pub(crate) fn load_config(path: Option<&Path>) -> Result<DashConfig> {
    match path {
        Some(path) => DashConfig::load(path).with_context(|| format!("loading {}", path.display())),
        None => Ok(DashConfig::default()),
    }
}

pub(crate) fn stats(records: &[Record], year: Option<Year>, json: bool) -> Result<String> {
    let stats = compute_statistics(Some(records), year);
    if json {
        return Ok(serde_json::to_string_pretty(&stats)?);
    }
    Ok(stats_table(&stats))
}

fn stats_table(stats: &AggregateStatistics) -> String {
    let mut out = String::new();
    let badges = HeaderBadges::from_statistics(stats);
    let with = &stats.with_shaam;
    let without = &stats.without_shaam;

    // writing to a String cannot fail
    let _ = writeln!(out, "total               {}", stats.total);
    if stats.is_fallback() {
        let _ = writeln!(out, "  (fallback snapshot, no records)");
    }
    let _ = writeln!(out, "with shared service  {} ({})", with.total, stats.percentage(Branch::WithShaam));
    let _ = writeln!(
        out,
        "  new {} | approved {} converted {} cancelled {} executing {}",
        with.new.total, with.new.approved, with.new.converted, with.new.cancelled, with.new.executing
    );
    let _ = writeln!(out, "  continued {}", with.continued);
    let _ = writeln!(
        out,
        "  midyear {} | approved {} converted {} cancelled {} executing {}",
        with.midyear.total,
        with.midyear.approved,
        with.midyear.converted,
        with.midyear.cancelled,
        with.midyear.executing
    );
    let _ = writeln!(out, "authority only       {} ({})", without.total, stats.percentage(Branch::WithoutShaam));
    let _ = writeln!(
        out,
        "  new {} | continued {} | midyear {} | cancelled {}",
        without.new, without.continued, without.midyear, without.cancelled
    );
    for kind in BadgeKind::ALL {
        let value = badges
            .get(kind)
            .map_or_else(|| "-".to_string(), |pct| pct.to_string());
        let _ = writeln!(out, "{:<4} {value:<5} {}", kind.view_key(), kind.title());
    }
    out
}

pub(crate) fn hierarchy(records: &[Record], year: Option<Year>) -> Result<String> {
    let stats = compute_statistics(Some(records), year);
    let tree = build_hierarchy(&stats);
    tree.validate().context("built hierarchy is malformed")?;
    Ok(serde_json::to_string_pretty(&tree)?)
}

pub(crate) fn resolve(config: &DashConfig, node: &str, year: Year) -> String {
    NavigationResolver::new(config.resolved_server_base())
        .resolve(node, year)
        .to_string()
}

pub(crate) fn coverage(config: &DashConfig) -> String {
    let resolver = NavigationResolver::new(config.resolved_server_base());
    let gaps = coverage_gaps(&resolver, &config.selectable_years);
    let mut out = String::new();
    for gap in &gaps {
        let _ = writeln!(out, "{}{}", gap.view, gap.year);
    }
    let _ = writeln!(
        out,
        "{} missing of {} view/year combinations",
        gaps.len(),
        rashut_nav::drill_views().count() * config.selectable_years.len()
    );
    out
}

pub(crate) fn bars(units: Option<Vec<UnitTally>>) -> Result<String> {
    let summary = BarChartSummary::from_units(&units.unwrap_or_else(demo_units));
    Ok(serde_json::to_string_pretty(&summary)?)
}

pub(crate) fn read_units(path: &Path) -> Result<Vec<UnitTally>> {
    let input = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&input).with_context(|| format!("{} is not a JSON array of units", path.display()))
}

/// Run exported records through the dashboard pipeline for one year
pub(crate) async fn replay(config: &DashConfig, records: Vec<Record>, year: Year) -> Result<DashboardView> {
    let source = StaticSource::new(records);
    let view = load_view(&source, &config.query_code, year)
        .await
        .with_context(|| format!("replaying {} records for {year}", source.len()))?;
    Ok(view)
}

pub(crate) async fn fetch(config: &DashConfig, year: Year) -> Result<(Vec<Record>, DashboardView)> {
    let server = config.resolved_server_base();
    if server.is_empty() {
        bail!("no server base: set server_base or page_url in the config, or pass --server");
    }
    let session = config
        .session_id
        .as_deref()
        .context("no session id: set RASHUT_SESSION_ID or pass --session")?;

    let client = XogClient::new(server, session)?;
    let records = client
        .query(&config.query_code, &QueryFilters::for_year(year))
        .await
        .with_context(|| format!("query {} for {year}", config.query_code))?;
    let view = DashboardView::compute(Some(&records), year);
    Ok((records, view))
}
