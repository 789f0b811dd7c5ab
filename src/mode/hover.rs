//! Pointer simulation over the flow chart

use minard::geometry::{ChartLayout, Point};
use minard::interact::{ChartSurface, HoverStrategy};
use minard::panel::ChartTab;

use crate::output::{print_campaign_info, print_error, print_event, print_pointer, print_tooltip};

use super::load_dataset;

/// Feed pointer positions through the chart surface, printing each tooltip
/// and, unless quiet, every state change the surface reports
pub fn run_hover(
    path: Option<&str>,
    layout: &ChartLayout,
    pointers: &[(f64, f64)],
    strategy: HoverStrategy,
    quiet: bool,
) {
    let dataset = load_dataset(path).unwrap_or_else(|e| {
        print_error(&e);
        std::process::exit(1);
    });

    if !quiet {
        println!("Hover Simulation");
        print_campaign_info(&dataset.name, &dataset.campaign, layout);
    }

    let mut surface = ChartSurface::new(dataset.campaign, layout.clone())
        .unwrap_or_else(|e| {
            print_error(&e.to_string());
            std::process::exit(1);
        })
        .with_strategy(strategy)
        .with_tab(ChartTab::ModernMinard);

    if !quiet {
        surface.subscribe(print_event);
    }

    for &(x, y) in pointers {
        let pointer = Point::new(x, y);
        print_pointer(pointer);
        match surface.pointer_move(pointer) {
            Some(payload) => print_tooltip(&payload),
            None => println!("  (no waypoint)"),
        }
    }

    // Pointer leaves the chart
    surface.hover_leave();
}
