//! Two-dataset comparison mode

use colored::*;

use minard::data::{Campaign, PhaseKind};
use minard::interact::format_count;

use crate::output::{print_diff_row, print_error, print_separator};

use super::load_dataset;

/// Stop labels of a phase in travel order: the base's first, then any only
/// the other dataset has
fn merged_labels(base: &Campaign, other: &Campaign, kind: PhaseKind) -> Vec<String> {
    let labels_of = |c: &Campaign| -> Vec<String> {
        let phase = c.phase(kind);
        phase
            .travel_order()
            .into_iter()
            .map(|i| phase.waypoints()[i].label.clone())
            .collect()
    };
    let mut labels = labels_of(base);
    for label in labels_of(other) {
        if !labels.contains(&label) {
            labels.push(label);
        }
    }
    labels
}

fn troops_at(campaign: &Campaign, kind: PhaseKind, label: &str) -> Option<f64> {
    let phase = campaign.phase(kind);
    phase.index_of(label).map(|i| phase.waypoints()[i].magnitude)
}

/// Compare troop figures of two datasets (first is base)
pub fn run_compare(filenames: &[String], quiet: bool) {
    let datasets: Vec<_> = filenames
        .iter()
        .map(|f| {
            load_dataset(Some(f)).unwrap_or_else(|e| {
                print_error(&e);
                std::process::exit(1);
            })
        })
        .collect();
    let (base, other) = (&datasets[0], &datasets[1]);

    println!("Comparison (base: [A]):");
    println!("  {} {}", "[A]".bold(), base.name);
    println!("  {} {}", "[B]".bold(), other.name);
    println!();

    println!("[Troops]");
    println!(
        "{:<12} {:<8} {:>9} {:>9} {:>9}",
        "STOP", "PHASE", "[A]", "[B]", "B-A"
    );
    for kind in [PhaseKind::Advance, PhaseKind::Retreat] {
        print_separator(51);
        for label in merged_labels(&base.campaign, &other.campaign, kind) {
            print_diff_row(
                &label,
                kind,
                troops_at(&base.campaign, kind, &label),
                troops_at(&other.campaign, kind, &label),
            );
        }
    }

    println!();
    println!(
        "Max troops: [A] {}  [B] {}",
        format_count(base.campaign.max_magnitude()),
        format_count(other.campaign.max_magnitude())
    );

    if !quiet {
        println!();
        println!("[A], [B]: troops at each stop; B-A: difference from the base");
        println!("-: stop missing from that dataset");
    }
}
