//! Hover interaction over the flow chart

mod hover;
mod surface;

pub use hover::{
    HitTarget, HoverResolver, HoverStrategy, TooltipPayload, format_count, format_temperature,
};
pub use surface::{ActiveHover, ChartSurface, HoverState, Listener, SurfaceEvent};
