//! Marginal rate tables.
//!
//! For each input, the reporter perturbs the amount by plus and minus
//! `delta`, reruns every pipeline on the perturbed facts, and reports
//! the central difference `(tax(+delta) - tax(-delta)) / 2 delta`. With
//! dollar rounding throughout, a small delta mostly measures rounding
//! noise; the default of 1000 averages over enough bracket width to be
//! readable.
//!
//! Two groupings are available. By input, one row per fact of every
//! source document. By tag, one row per tag, perturbed by appending a
//! synthetic single-tag fact so each tag's full flow is measured even
//! when several facts share it.
//!
//! Tables are pipe-separated text with one header row, ready for
//! `column -t -s '|'`.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use ten40_core::{FactItem, Facts, RawAmount, Tag};
use ten40_policy::Policy;

use crate::error::EngineError;
use crate::federal::compute_federal_total_tax;
use crate::ny::compute_ny_total_tax;
use crate::verify::Verifier;

/// One state pipeline in the report, after the federal column.
struct StatePipeline {
    name: &'static str,
    compute: fn(&Facts, &Policy, Option<&Verifier>) -> Result<Decimal, EngineError>,
}

const STATES: [StatePipeline; 1] = [StatePipeline {
    name: "NY",
    compute: compute_ny_total_tax,
}];

/// Default marginal table, grouped by tag.
pub fn marginal_rate_table(
    facts: &Facts,
    policy: &Policy,
    delta: Decimal,
) -> Result<String, EngineError> {
    marginal_rate_table_by_tag(facts, policy, delta)
}

/// Marginal rate table with one row per fact of every source document.
///
/// Facts with non-numeric amounts still get a row, with the marginal
/// cells left blank. Facts loaded without a source document are not
/// rows, though they feed every computation.
pub fn marginal_rate_table_by_input(
    facts: &Facts,
    policy: &Policy,
    delta: Decimal,
) -> Result<String, EngineError> {
    if delta <= Decimal::ZERO {
        return Err(EngineError::NonPositiveDelta);
    }
    tracing::debug!(%delta, "building marginal table by input");

    let mut lines = vec![header(&["Source", "Path", "Tags", "Explanation", "Amount"])];
    for (source, items) in facts.sources() {
        let source_filename = file_name(source);
        for (i, item) in items.iter().enumerate() {
            let path = item.path.trim();
            let tags = join_tags(&item.tags);
            let amount_text = item.amount.to_string();

            let Some(amount) = item.amount.as_decimal() else {
                lines.push(blank_marginal_row(&[
                    source_filename,
                    path,
                    &tags,
                    &item.explanation,
                    &amount_text,
                ]));
                continue;
            };

            let mut plus = facts.clone();
            let mut minus = facts.clone();
            if let Some(fact) = plus.source_item_mut(source, i) {
                fact.amount = RawAmount::Number(amount + delta);
            }
            if let Some(fact) = minus.source_item_mut(source, i) {
                fact.amount = RawAmount::Number(amount - delta);
            }
            let marginals = compute_marginals(&plus, &minus, policy, delta)?;

            let mut row = vec![
                source_filename.to_string(),
                path.to_string(),
                tags,
                item.explanation.clone(),
                amount_text,
            ];
            marginals.append_cells(&mut row);
            lines.push(row.join("|"));
        }
    }

    Ok(lines.join("\n"))
}

/// Marginal rate table with one row per tag.
///
/// The perturbation is a synthetic fact carrying just that tag, so the
/// row measures the tag's whole downstream flow. Tags whose facts are
/// all non-numeric get a row with blank marginal cells.
pub fn marginal_rate_table_by_tag(
    facts: &Facts,
    policy: &Policy,
    delta: Decimal,
) -> Result<String, EngineError> {
    if delta <= Decimal::ZERO {
        return Err(EngineError::NonPositiveDelta);
    }
    tracing::debug!(%delta, "building marginal table by tag");

    let mut groups: BTreeMap<String, TagGroup<'_>> = BTreeMap::new();
    for (source, items) in facts.sources() {
        let source_filename = file_name(source);
        for item in items {
            for tag in &item.tags {
                groups
                    .entry(tag.to_string())
                    .or_insert_with(|| TagGroup {
                        tag: tag.clone(),
                        records: Vec::new(),
                    })
                    .records
                    .push(TagRecord {
                        source_filename,
                        item,
                    });
            }
        }
    }

    let mut lines = vec![header(&["Tag", "Num Inputs", "Sources+Paths", "Amount"])];
    for (tag_name, group) in &groups {
        let num_inputs = group.records.len().to_string();
        let sources_paths = group
            .records
            .iter()
            .map(TagRecord::source_and_path)
            .collect::<Vec<_>>()
            .join(" - ");

        let mut total_amount = Decimal::ZERO;
        let mut has_numeric = false;
        for record in &group.records {
            if let Some(amount) = record.item.amount.as_decimal() {
                total_amount += amount;
                has_numeric = true;
            }
        }

        if !has_numeric {
            lines.push(blank_marginal_row(&[
                tag_name,
                &num_inputs,
                &sources_paths,
                &total_amount.to_string(),
            ]));
            continue;
        }

        let shock_source = shock_source_name(facts);
        let plus = with_shock(facts, &shock_source, &group.tag, delta);
        let minus = with_shock(facts, &shock_source, &group.tag, -delta);
        let marginals = compute_marginals(&plus, &minus, policy, delta)?;

        let mut row = vec![
            tag_name.clone(),
            num_inputs,
            sources_paths,
            total_amount.to_string(),
        ];
        marginals.append_cells(&mut row);
        lines.push(row.join("|"));
    }

    Ok(lines.join("\n"))
}

struct TagRecord<'a> {
    source_filename: &'a str,
    item: &'a FactItem,
}

impl TagRecord<'_> {
    fn source_and_path(&self) -> String {
        let path = self.item.path.trim();
        if path.is_empty() {
            self.source_filename.to_string()
        } else {
            format!("{}: {}", self.source_filename, path)
        }
    }
}

struct TagGroup<'a> {
    tag: Tag,
    records: Vec<TagRecord<'a>>,
}

struct Marginals {
    federal: Decimal,
    states: Vec<Decimal>,
    total: Decimal,
}

impl Marginals {
    fn append_cells(&self, row: &mut Vec<String>) {
        row.push(self.federal.to_string());
        row.extend(self.states.iter().map(|marginal| marginal.to_string()));
        row.push(self.total.to_string());
    }
}

/// Central-difference marginals over already-perturbed fact sets.
fn compute_marginals(
    plus: &Facts,
    minus: &Facts,
    policy: &Policy,
    delta: Decimal,
) -> Result<Marginals, EngineError> {
    let spread = delta * Decimal::TWO;

    let federal_plus = compute_federal_total_tax(plus, policy, None)?;
    let federal_minus = compute_federal_total_tax(minus, policy, None)?;
    let federal = (federal_plus - federal_minus) / spread;

    let mut states = Vec::with_capacity(STATES.len());
    for state in &STATES {
        let state_plus = (state.compute)(plus, policy, None)?;
        let state_minus = (state.compute)(minus, policy, None)?;
        states.push((state_plus - state_minus) / spread);
    }

    let total = federal + states.iter().copied().sum::<Decimal>();
    Ok(Marginals {
        federal,
        states,
        total,
    })
}

fn header(leading: &[&str]) -> String {
    let mut cells: Vec<String> = leading.iter().map(|cell| cell.to_string()).collect();
    cells.push("Marginal Federal".to_string());
    cells.extend(STATES.iter().map(|state| format!("Marginal {}", state.name)));
    cells.push("Marginal Total".to_string());
    cells.join("|")
}

fn blank_marginal_row(leading: &[&str]) -> String {
    let mut cells = leading.to_vec();
    cells.extend(std::iter::repeat("").take(STATES.len() + 2));
    cells.join("|")
}

/// The file-name portion of a source key, "w2.json" from
/// "inputs/w2.json".
fn file_name(source: &str) -> &str {
    source.rsplit('/').next().unwrap_or(source)
}

fn join_tags(tags: &[Tag]) -> String {
    tags.iter()
        .map(|tag| tag.to_string())
        .collect::<Vec<_>>()
        .join(" - ")
}

/// A source name that collides with nothing already in the facts.
fn shock_source_name(facts: &Facts) -> String {
    let mut name = String::from("__MARGINAL_SHOCK__");
    while facts.contains_source(&name) {
        name.push_str("_X");
    }
    name
}

/// The facts plus one synthetic fact perturbing `tag` by `amount`.
fn with_shock(facts: &Facts, source: &str, tag: &Tag, amount: Decimal) -> Facts {
    let sign = if amount < Decimal::ZERO { '-' } else { '+' };
    let mut shocked = facts.clone();
    shocked.insert_source(
        source,
        vec![FactItem {
            amount: RawAmount::Number(amount),
            tags: vec![tag.clone()],
            path: format!("Synthetic marginal shock ({sign}delta)"),
            explanation: "Synthetic row for tag marginal calculation".to_string(),
        }],
    );
    shocked
}
