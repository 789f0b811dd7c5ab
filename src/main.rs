mod mode;
mod output;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use minard::chart::{MANUSCRIPT, PARCHMENT, Theme};
use minard::geometry::{AnchorPolicy, ChartLayout, XAxisMode};
use minard::interact::HoverStrategy;
use minard::panel::ChartTab;

use output::{print_error, print_warning};

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum AnchorArg {
    /// Advance above, retreat below, each on its own baseline
    Stacked,
    /// Both bands grow away from one shared centerline
    Shared,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum XAxisArg {
    /// Place stops by geographic position
    Geographic,
    /// Space stops evenly
    Ordinal,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ThemeArg {
    Manuscript,
    Parchment,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum StrategyArg {
    /// Pointer must be over a dot
    Hit,
    /// Snap to the stop with the closest x
    NearestX,
}

#[derive(Parser)]
#[command(
    name = "minard",
    version,
    about = "Flow-band charts of Napoleon's 1812 campaign after Minard's map",
    after_help = "Examples:
  minard                                               Army size table (built-in data)
  minard -t modern-minard --image flow.svg             Write the flow-band chart
  minard -t modern-minard -a shared -x ordinal         Centerline variant
  minard -t modern-minard --pointer 52,143             Hover at a point
  minard -t temperature --theme parchment --image t.svg
  minard demos/retreat-variant.toml                    Use a dataset file
  minard a.toml b.toml                                 Compare datasets (first is base)"
)]
struct Args {
    /// Dataset files (TOML). Built-in data when omitted; two files compare them.
    files: Vec<String>,

    /// Chart tab to show
    #[arg(short, long, value_enum, default_value = "army-size")]
    tab: ChartTab,

    /// Band anchoring
    #[arg(short, long, value_enum, default_value = "stacked")]
    anchor: AnchorArg,

    /// Horizontal placement of stops [default: geographic for stacked, ordinal for shared]
    #[arg(short, long, value_enum)]
    x_axis: Option<XAxisArg>,

    /// Gap between the stacked baselines in pixels
    #[arg(long, value_name = "PIXELS")]
    gap: Option<f64>,

    /// Colour theme for --image output
    #[arg(long, value_enum)]
    theme: Option<ThemeArg>,

    /// Simulate the pointer at X,Y (repeatable; modern-minard tab only)
    #[arg(short, long, value_name = "X,Y", value_parser = parse_point)]
    pointer: Vec<(f64, f64)>,

    /// How a pointer position picks a stop
    #[arg(long, value_enum, default_value = "hit")]
    strategy: StrategyArg,

    /// Print band polygon points (modern-minard tab only)
    #[arg(long)]
    points: bool,

    /// Suppress explanations (show data only)
    #[arg(short, long)]
    quiet: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Log geometry and hover events to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Write the selected tab as an image (SVG; PNG also for panel charts)
    #[arg(long, value_name = "PATH")]
    image: Option<String>,
}

fn parse_point(s: &str) -> Result<(f64, f64), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got '{}'", s))?;
    let parse = |v: &str| {
        v.trim()
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .ok_or_else(|| format!("'{}' is not a number", v.trim()))
    };
    Ok((parse(x)?, parse(y)?))
}

fn build_layout(args: &Args) -> ChartLayout {
    let mut layout = match args.anchor {
        AnchorArg::Stacked => ChartLayout::stacked(),
        AnchorArg::Shared => ChartLayout::centerline(),
    };
    if let Some(gap) = args.gap {
        layout = layout.with_anchor(AnchorPolicy::StackedBaseline { gap });
    }
    match args.x_axis {
        Some(XAxisArg::Geographic) => layout.with_x_axis(XAxisMode::Geographic),
        Some(XAxisArg::Ordinal) => layout.with_x_axis(XAxisMode::Ordinal),
        None => layout,
    }
}

fn init_tracing(verbose: bool, no_color: bool) {
    let filter = if verbose {
        EnvFilter::new("minard=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .init();
}

fn main() {
    let args = Args::parse();

    // Handle --no-color
    if args.no_color {
        colored::control::set_override(false);
    }

    init_tracing(args.verbose, args.no_color);

    // Validate file count
    if args.files.len() > 2 {
        print_error("Too many files specified (max 2)");
        std::process::exit(1);
    }

    // Validate option combinations
    let comparing = args.files.len() == 2;
    if comparing && (args.image.is_some() || !args.pointer.is_empty() || args.points) {
        print_error("--image, --pointer and --points cannot be used with comparison mode");
        std::process::exit(1);
    }

    let flow_tab = args.tab == ChartTab::ModernMinard;
    if !args.pointer.is_empty() && !flow_tab {
        print_error("--pointer can only be used with --tab modern-minard");
        std::process::exit(1);
    }

    if !args.pointer.is_empty() && (args.image.is_some() || args.points) {
        print_error("--pointer cannot be used with --image or --points");
        std::process::exit(1);
    }

    if args.points && !flow_tab {
        print_error("--points can only be used with --tab modern-minard");
        std::process::exit(1);
    }

    if args.strategy != StrategyArg::Hit && args.pointer.is_empty() {
        print_error("--strategy can only be used with --pointer");
        std::process::exit(1);
    }

    if let Some(gap) = args.gap {
        if args.anchor != AnchorArg::Stacked {
            print_error("--gap can only be used with --anchor stacked");
            std::process::exit(1);
        }
        if !gap.is_finite() || gap < 0.0 {
            print_error("Gap must be a non-negative number");
            std::process::exit(1);
        }
    }

    // Validate image output path
    if let Some(ref path) = args.image {
        use std::path::Path;
        if let Some(parent) = Path::new(path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            print_error(&format!("Directory does not exist: {}", parent.display()));
            std::process::exit(1);
        }
        if flow_tab && !path.to_ascii_lowercase().ends_with(".svg") {
            print_error("--image for modern-minard must be an .svg file");
            std::process::exit(1);
        }
    }

    if args.theme.is_some() && args.image.is_none() {
        print_warning("--theme only affects --image output");
    }

    let theme: Theme = match args.theme {
        Some(ThemeArg::Parchment) => PARCHMENT,
        Some(ThemeArg::Manuscript) | None => MANUSCRIPT,
    };
    let strategy = match args.strategy {
        StrategyArg::Hit => HoverStrategy::HitTest,
        StrategyArg::NearestX => HoverStrategy::NearestX,
    };
    let layout = build_layout(&args);
    let dataset = args.files.first().map(String::as_str);

    // Dispatch to appropriate mode
    if comparing {
        mode::run_compare(&args.files, args.quiet);
    } else if !args.pointer.is_empty() {
        mode::run_hover(dataset, &layout, &args.pointer, strategy, args.quiet);
    } else {
        mode::run_inspect(
            dataset,
            args.tab,
            &layout,
            &theme,
            args.quiet,
            args.points,
            args.image.as_deref(),
        );
    }
}
