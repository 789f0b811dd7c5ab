//! Single tab mode: data table, optional polygon dump and image

use minard::chart::{self, Theme};
use minard::geometry::ChartLayout;
use minard::panel::{ChartTab, Panel, build_panel};

use crate::output::{print_campaign_info, print_error, print_legend, print_panel, print_polygon};

use super::load_dataset;

/// Print the selected tab's data and optionally write it as an image
pub fn run_inspect(
    path: Option<&str>,
    tab: ChartTab,
    layout: &ChartLayout,
    theme: &Theme,
    quiet: bool,
    show_points: bool,
    image_path: Option<&str>,
) {
    let dataset = load_dataset(path).unwrap_or_else(|e| {
        print_error(&e);
        std::process::exit(1);
    });

    if !quiet {
        println!("{}", tab.title());
        print_campaign_info(&dataset.name, &dataset.campaign, layout);
    }

    let panel = build_panel(tab, &dataset.campaign, layout).unwrap_or_else(|e| {
        print_error(&e.to_string());
        std::process::exit(1);
    });

    print_panel(&panel, &dataset.campaign);

    if show_points && let Panel::ModernMinard(geometry) = &panel {
        println!();
        print_polygon(&geometry.advance);
        println!();
        print_polygon(&geometry.retreat);
    }

    if !quiet {
        println!();
        print_legend(tab);
    }

    // Output chart image if requested
    if let Some(path) = image_path {
        if let Err(e) = chart::render_panel(&panel, &dataset.campaign, theme, path) {
            print_error(&e.to_string());
            std::process::exit(1);
        }
        eprintln!("Chart saved to: {}", path);
    }
}
