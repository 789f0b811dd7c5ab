//! Chart surface: selected tab, hover state and change notifications

use std::fmt;

use tracing::debug;

use crate::data::{Campaign, WaypointRef};
use crate::error::{MinardError, Result};
use crate::geometry::{ChartLayout, FlowChartGeometry, Point, build_flow_chart};
use crate::panel::{ChartTab, Panel, build_panel};

use super::hover::{HoverResolver, HoverStrategy, TooltipPayload};

/// The waypoint currently under the pointer
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveHover {
    pub target: usize,
    pub waypoint: WaypointRef,
    /// Last pointer position, for placing the annotation
    pub pointer: Point,
    pub payload: TooltipPayload,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum HoverState {
    #[default]
    Idle,
    Hovering(ActiveHover),
}

impl HoverState {
    pub fn active(&self) -> Option<&ActiveHover> {
        match self {
            HoverState::Idle => None,
            HoverState::Hovering(active) => Some(active),
        }
    }
}

/// Emitted to subscribers when observable state changes
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceEvent {
    TabChanged(ChartTab),
    /// `None` when the annotation is dismissed
    HoverChanged(Option<TooltipPayload>),
}

pub type Listener = Box<dyn FnMut(&SurfaceEvent)>;

/// Owns a campaign, its flow geometry and the interaction state around it.
///
/// Geometry is built once up front; tab switches and hover changes never
/// rebuild it.
pub struct ChartSurface {
    campaign: Campaign,
    layout: ChartLayout,
    geometry: FlowChartGeometry,
    resolver: HoverResolver,
    tab: ChartTab,
    hover: HoverState,
    listeners: Vec<Listener>,
}

impl fmt::Debug for ChartSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChartSurface")
            .field("tab", &self.tab)
            .field("hover", &self.hover)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl ChartSurface {
    pub fn new(campaign: Campaign, layout: ChartLayout) -> Result<Self> {
        let geometry = build_flow_chart(&campaign, &layout)?;
        let resolver = HoverResolver::from_geometry(&geometry, HoverStrategy::default());
        Ok(Self {
            campaign,
            layout,
            geometry,
            resolver,
            tab: ChartTab::default(),
            hover: HoverState::Idle,
            listeners: Vec::new(),
        })
    }

    #[must_use]
    pub fn with_strategy(mut self, strategy: HoverStrategy) -> Self {
        self.resolver = HoverResolver::from_geometry(&self.geometry, strategy);
        self
    }

    #[must_use]
    pub fn with_tab(mut self, tab: ChartTab) -> Self {
        self.tab = tab;
        self
    }

    pub fn campaign(&self) -> &Campaign {
        &self.campaign
    }

    pub fn layout(&self) -> &ChartLayout {
        &self.layout
    }

    pub fn geometry(&self) -> &FlowChartGeometry {
        &self.geometry
    }

    pub fn resolver(&self) -> &HoverResolver {
        &self.resolver
    }

    pub fn tab(&self) -> ChartTab {
        self.tab
    }

    pub fn hover_state(&self) -> &HoverState {
        &self.hover
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&SurfaceEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Data for the selected tab
    pub fn panel(&self) -> Result<Panel> {
        match self.tab {
            ChartTab::ModernMinard => Ok(Panel::ModernMinard(Box::new(self.geometry.clone()))),
            tab => build_panel(tab, &self.campaign, &self.layout),
        }
    }

    /// Switch tabs. Any open annotation is dismissed since its dot is no
    /// longer drawn. Selecting the current tab is a no-op.
    pub fn select_tab(&mut self, tab: ChartTab) {
        if tab == self.tab {
            return;
        }
        self.hover_leave();
        self.tab = tab;
        debug!(tab = tab.slug(), "tab changed");
        self.emit(&SurfaceEvent::TabChanged(tab));
    }

    /// Pointer entered a registered target. Moves straight from one target to
    /// another without passing through `Idle`.
    ///
    /// Targets are only drawn on the flow chart tab; on any other tab every
    /// id is unknown.
    pub fn hover_enter(&mut self, target: usize, pointer: Point) -> Result<TooltipPayload> {
        let hit = self
            .resolver
            .target(target)
            .filter(|_| self.tab == ChartTab::ModernMinard)
            .ok_or(MinardError::UnknownTarget(target))?;
        let waypoint = hit.waypoint;
        let payload = TooltipPayload::from_waypoint(&self.campaign, waypoint)
            .ok_or(MinardError::UnknownTarget(target))?;

        if let HoverState::Hovering(active) = &mut self.hover
            && active.target == target
        {
            active.pointer = pointer;
            return Ok(payload);
        }

        debug!(
            target_id = target,
            label = %payload.label,
            phase = %payload.phase,
            "hover enter"
        );
        self.hover = HoverState::Hovering(ActiveHover {
            target,
            waypoint,
            pointer,
            payload: payload.clone(),
        });
        self.emit(&SurfaceEvent::HoverChanged(Some(payload.clone())));
        Ok(payload)
    }

    /// Pointer left every target; the annotation goes away at once
    pub fn hover_leave(&mut self) {
        if matches!(self.hover, HoverState::Idle) {
            return;
        }
        debug!("hover leave");
        self.hover = HoverState::Idle;
        self.emit(&SurfaceEvent::HoverChanged(None));
    }

    /// Resolve a raw pointer position and update the hover state.
    ///
    /// Only the flow chart has hover targets; on other tabs this dismisses
    /// any annotation and returns `None`.
    pub fn pointer_move(&mut self, pointer: Point) -> Option<TooltipPayload> {
        let hit = match self.tab {
            ChartTab::ModernMinard => self.resolver.resolve(pointer).map(|t| t.id),
            _ => None,
        };
        match hit {
            // Ids come from the resolver, so this cannot fail
            Some(id) => self.hover_enter(id, pointer).ok(),
            None => {
                self.hover_leave();
                None
            }
        }
    }

    fn emit(&mut self, event: &SurfaceEvent) {
        for listener in &mut self.listeners {
            listener(event);
        }
    }
}
