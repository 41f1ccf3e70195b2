//! The `list` verb: aggregate item listings across sources
//!
//! Walks every present source, selects the deps or templates collection,
//! filters, and prints one aligned block per source. Filtering is
//! two-stage: a substring match on the source's own name keeps the whole
//! source; otherwise items are kept individually by name. Sources left
//! with no items are dropped, and the surviving blocks print in source-name
//! order.

use crate::source::{CollectionKind, Item, Source, SourceError, SourceRegistry};

use super::output::Output;

/// Runs the listing end to end: load every present source, render, print.
pub fn generate_listing(
    output: &Output,
    registry: &mut SourceRegistry,
    kind: CollectionKind,
    filter: Option<&str>,
) -> Result<(), SourceError> {
    registry.load_all()?;
    for line in render_listing(registry.sources(), kind, filter) {
        output.log(&line);
    }
    Ok(())
}

/// Pure rendering over already-loaded sources. No sources with matching
/// items means no lines at all.
pub fn render_listing(sources: &[Source], kind: CollectionKind, filter: Option<&str>) -> Vec<String> {
    let mut groups: Vec<(&Source, Vec<&Item>)> = sources
        .iter()
        .map(|source| (source, select_items(source, kind, filter)))
        .filter(|(_, items)| !items.is_empty())
        .collect();
    groups.sort_by(|a, b| a.0.name().cmp(b.0.name()));

    let mut lines = Vec::new();
    for (source, items) in groups {
        let width = items
            .iter()
            .map(|item| format!("{}:{}", source.name(), item.name).len())
            .max()
            .unwrap_or(0)
            + 3;

        lines.push(String::new());
        let origin = if source.implicit() {
            String::new()
        } else {
            format!(" - {}", source.uri())
        };
        lines.push(format!("# {} ({}){}", source.name(), source.kind().label(), origin));

        let matching = filter.map(|f| format!(" matching '{}'", f)).unwrap_or_default();
        lines.push(format!("# {} {}{}:", items.len(), kind.noun(items.len()), matching));

        for item in items {
            let qualified = format!("{}:{}", source.name(), item.name);
            match item.described() {
                Some(desc) => lines.push(format!("{:<width$}# {}", qualified, desc)),
                None => lines.push(qualified),
            }
        }
    }
    lines
}

/// The two-stage filter: a source whose name contains the substring keeps
/// all of its items; otherwise items match on their own names. Plain
/// case-sensitive containment both ways.
fn select_items<'s>(source: &'s Source, kind: CollectionKind, filter: Option<&str>) -> Vec<&'s Item> {
    let items = source.items(kind);
    match filter {
        Some(f) if !source.name().contains(f) => {
            items.iter().filter(|item| item.name.contains(f)).collect()
        }
        _ => items.iter().collect(),
    }
}
