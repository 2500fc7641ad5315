//! Insight generator
//!
//! Secondary commentary about the shortlisted ensemble (winner plus
//! alternates). Every line adds something the winner's primary note does
//! not already say.

use crate::catalog::{Catalog, Modality, ModalitySet};
use crate::insight::family::FamilyNotes;
use crate::ranking::Selection;
use crate::routing::RoutingContext;
use crate::scoring::ScoredCandidate;

/// Upper bound on the number of insight lines
pub const MAX_INSIGHTS: usize = 5;

/// Build the insight lines for a selection.
///
/// Lines come in a fixed order (latency, cost, modality coverage, tone fit,
/// families) and are skipped when they would carry no information. The
/// result never contains the winner's primary note and has no duplicates.
pub fn build_insights(
    context: &RoutingContext,
    selection: &Selection<'_>,
    family_notes: &FamilyNotes,
    catalog: &Catalog,
) -> Vec<String> {
    let top = &selection.top;
    let runner_up = selection.alternates.first();

    let candidates = [
        runner_up.and_then(|alt| latency_contrast(top, alt)),
        runner_up.and_then(|alt| cost_contrast(top, alt)),
        Some(modality_coverage(context, selection, catalog)),
        tone_fit(context, selection),
        family_line(selection, family_notes),
    ];

    let primary = top.primary_note();
    let mut insights: Vec<String> = Vec::with_capacity(MAX_INSIGHTS);
    for line in candidates.into_iter().flatten() {
        if Some(line.as_str()) == primary || insights.contains(&line) {
            continue;
        }
        insights.push(line);
        if insights.len() == MAX_INSIGHTS {
            break;
        }
    }
    insights
}

fn latency_contrast(top: &ScoredCandidate<'_>, alt: &ScoredCandidate<'_>) -> Option<String> {
    let (top_ms, alt_ms) = (top.model.latency, alt.model.latency);
    if top_ms < alt_ms {
        Some(format!(
            "{} answers {}ms faster than {}",
            top.model.id,
            alt_ms - top_ms,
            alt.model.id
        ))
    } else if top_ms > alt_ms {
        Some(format!(
            "{} responds {}ms faster if latency becomes critical",
            alt.model.id,
            top_ms - alt_ms
        ))
    } else {
        None
    }
}

fn cost_contrast(top: &ScoredCandidate<'_>, alt: &ScoredCandidate<'_>) -> Option<String> {
    let (top_cost, alt_cost) = (top.model.cost, alt.model.cost);
    if top_cost < alt_cost {
        Some(format!(
            "{} runs at {:.1}x lower relative cost than {}",
            top.model.id,
            alt_cost / top_cost,
            alt.model.id
        ))
    } else if top_cost > alt_cost {
        Some(format!(
            "Switching to {} cuts relative cost {:.1}x",
            alt.model.id,
            top_cost / alt_cost
        ))
    } else {
        None
    }
}

fn modality_coverage(
    context: &RoutingContext,
    selection: &Selection<'_>,
    catalog: &Catalog,
) -> String {
    let top = selection.top.model;
    let missing: Vec<Modality> = context
        .modalities
        .iter()
        .filter(|m| !top.supports(*m))
        .collect();

    let Some(missing_set) = ModalitySet::new(missing) else {
        return if context.modalities.len() == 1 {
            format!("{} handles the requested {} input", top.id, context.modalities.joined())
        } else {
            format!(
                "{} covers every requested modality: {}",
                top.id,
                context.modalities.joined()
            )
        };
    };

    let covered: Vec<&str> = context
        .modalities
        .iter()
        .filter(|m| top.supports(*m))
        .map(|m| m.as_str())
        .collect();
    let gap_filler = selection
        .alternates
        .iter()
        .find(|alt| missing_set.iter().all(|m| alt.model.supports(m)));

    match gap_filler {
        Some(alt) => format!(
            "{} covers {}; {} fills the {} gap",
            top.id,
            covered.join(", "),
            alt.model.id,
            missing_set.joined()
        ),
        None => {
            let supporting = missing_set
                .iter()
                .map(|m| catalog.coverage(m))
                .min()
                .unwrap_or(0);
            format!(
                "{} covers {}; {} input needs a separate pass ({} catalog model{} support it)",
                top.id,
                covered.join(", "),
                missing_set.joined(),
                supporting,
                if supporting == 1 { "" } else { "s" }
            )
        }
    }
}

fn tone_fit(context: &RoutingContext, selection: &Selection<'_>) -> Option<String> {
    if context.tone.is_balanced() {
        return None;
    }
    let tags = context.tone.matching_tags();
    let top = selection.top.model;

    if let Some(tag) = top.matching_strength(tags) {
        return Some(format!(
            "{} is tagged {}, matching the {} tone",
            top.id, tag, context.tone
        ));
    }

    let line = match selection
        .alternates
        .iter()
        .find_map(|alt| alt.model.matching_strength(tags).map(|tag| (alt, tag)))
    {
        Some((alt, tag)) => format!(
            "For a stricter {} tone, {} lists {}",
            context.tone, alt.model.id, tag
        ),
        None => format!(
            "No shortlisted model is tagged {}; steer tone in the prompt",
            context.tone
        ),
    };
    Some(line)
}

fn family_line(selection: &Selection<'_>, family_notes: &FamilyNotes) -> Option<String> {
    let mut families: Vec<&str> = Vec::new();
    for candidate in std::iter::once(&selection.top).chain(&selection.alternates) {
        let family = candidate.model.family.as_str();
        if !families.contains(&family) {
            families.push(family);
        }
    }

    let notes: Vec<&str> = families
        .into_iter()
        .filter_map(|family| family_notes.get(family))
        .collect();
    if notes.is_empty() {
        None
    } else {
        Some(format!("Families: {}", notes.join("; ")))
    }
}
