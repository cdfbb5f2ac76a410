//! Dashboard page.
//!
//! The header (headline stats, actions, tab strip) is a top panel. The body
//! is a central panel for every tab except the live digital twin: while the
//! twin is shown the central area is left empty so the 3D scene rendered by
//! the camera shows through, with its controls in a side panel.
//!
//! [`DashboardUi`] decides which [`TwinView`] should be active and
//! [`sync_twin_view`] requests the transition, so the scene is mounted only
//! while it is actually visible. Expanding the twin hides the header and
//! gives the scene the whole page.

mod analysis;
mod incidents;
mod live_feed;
mod routing_map;
mod twin;

#[cfg(test)]
mod tests;

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use rendering::camera::CameraCommand;
use simulation::app_state::{AppState, TwinView};
use simulation::fixtures::HEADLINE_STATS;
use simulation::live_feed::LiveFeed;

use crate::{theme, widgets};

pub use twin::TwinMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardTab {
    #[default]
    Overview,
    Incidents,
    Analysis,
    DigitalTwin,
    LiveFeed,
}

impl DashboardTab {
    pub const ALL: [(DashboardTab, &'static str); 5] = [
        (DashboardTab::Overview, "Overview"),
        (DashboardTab::Incidents, "Incidents"),
        (DashboardTab::Analysis, "Analysis"),
        (DashboardTab::DigitalTwin, "Digital Twin"),
        (DashboardTab::LiveFeed, "Live Feed"),
    ];
}

/// A panel blown up into the modal overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpandedPanel {
    IncidentReport,
    TrafficAnalysis,
    LiveFeed,
    DigitalTwin,
}

impl ExpandedPanel {
    pub fn title(self) -> &'static str {
        match self {
            ExpandedPanel::IncidentReport => "Incident Report",
            ExpandedPanel::TrafficAnalysis => "Traffic Analysis",
            ExpandedPanel::LiveFeed => "Live Traffic Feed",
            ExpandedPanel::DigitalTwin => "Digital Twin",
        }
    }
}

/// Transient dashboard UI state. Reset whenever the page is left.
#[derive(Resource, Debug, Clone, PartialEq, Default)]
pub struct DashboardUi {
    pub tab: DashboardTab,
    pub expanded: Option<ExpandedPanel>,
    pub twin_mode: TwinMode,
    /// Index into the incident fixtures shown in the expanded report.
    pub selected_incident: usize,
    /// Index into the alternative routes highlighted on the routing map.
    pub selected_route: Option<usize>,
}

impl DashboardUi {
    /// Twin view this UI state needs: live when the 3D twin is on screen,
    /// either in its tab or blown up in the modal.
    pub fn desired_twin_view(&self) -> TwinView {
        let twin_visible = match self.expanded {
            Some(panel) => panel == ExpandedPanel::DigitalTwin,
            None => self.tab == DashboardTab::DigitalTwin && self.twin_mode == TwinMode::ThreeD,
        };
        if twin_visible {
            TwinView::Live
        } else {
            TwinView::Hidden
        }
    }

    /// Whether the live feed panel is drawn this frame, either on its tab
    /// or in the modal.
    pub fn feed_visible(&self) -> bool {
        self.expanded == Some(ExpandedPanel::LiveFeed)
            || (self.tab == DashboardTab::LiveFeed && self.desired_twin_view() == TwinView::Hidden)
    }

    pub fn expand(&mut self, panel: ExpandedPanel) {
        info!("Expanding {} panel", panel.title());
        self.expanded = Some(panel);
    }

    pub fn collapse(&mut self) {
        self.expanded = None;
    }
}

pub struct DashboardPlugin;

impl Plugin for DashboardPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DashboardUi>()
            .add_systems(OnExit(AppState::Dashboard), reset_dashboard_ui);
    }
}

/// System: request the twin view the current UI state needs.
pub fn sync_twin_view(
    ui_state: Res<DashboardUi>,
    view: Option<Res<State<TwinView>>>,
    mut next_view: ResMut<NextState<TwinView>>,
) {
    let Some(view) = view else {
        return;
    };
    let desired = ui_state.desired_twin_view();
    if *view.get() != desired {
        debug!("Twin view {:?} -> {:?}", view.get(), desired);
        next_view.set(desired);
    }
}

pub fn reset_dashboard_ui(mut ui_state: ResMut<DashboardUi>) {
    *ui_state = DashboardUi::default();
}

pub fn dashboard_page(
    mut contexts: EguiContexts,
    mut ui_state: ResMut<DashboardUi>,
    mut feed: ResMut<LiveFeed>,
    mut camera_commands: EventWriter<CameraCommand>,
) {
    let ctx = contexts.ctx_mut();
    let twin_live = ui_state.desired_twin_view() == TwinView::Live;
    let twin_fullscreen = ui_state.expanded == Some(ExpandedPanel::DigitalTwin);
    feed.on_screen = ui_state.feed_visible();

    if !twin_fullscreen {
        egui::TopBottomPanel::top("dashboard_header")
            .frame(
                egui::Frame::NONE
                    .fill(theme::PAGE_BG)
                    .inner_margin(egui::Margin::symmetric(20, 12)),
            )
            .show(ctx, |ui| header(ui, &mut ui_state));
    }

    if twin_live {
        egui::SidePanel::right("twin_controls")
            .resizable(false)
            .default_width(300.0)
            .frame(
                egui::Frame::NONE
                    .fill(theme::PAGE_BG)
                    .inner_margin(egui::Margin::same(16)),
            )
            .show(ctx, |ui| {
                twin::controls(ui, &mut ui_state, &mut camera_commands);
            });
    } else {
        egui::CentralPanel::default()
            .frame(
                egui::Frame::NONE
                    .fill(theme::PAGE_BG)
                    .inner_margin(egui::Margin::symmetric(20, 8)),
            )
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| tab_body(ui, &mut ui_state, &mut feed));
            });
    }

    // The expanded twin fills the page instead of opening a modal.
    if let Some(panel) = ui_state.expanded.filter(|p| *p != ExpandedPanel::DigitalTwin) {
        expanded_modal(ctx, panel, &mut ui_state, &mut feed);
    }
}

fn header(ui: &mut egui::Ui, ui_state: &mut DashboardUi) {
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.label(
                egui::RichText::new("Traffic Management Dashboard")
                    .size(theme::FONT_TITLE)
                    .strong()
                    .color(theme::TEXT_HEADING),
            );
            widgets::caption(ui, "Real-time traffic insights and analytics");
        });
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if widgets::primary_button(ui, "Export").clicked() {
                info!("Export requested for the {:?} tab", ui_state.tab);
            }
            if widgets::secondary_button(ui, "Refresh").clicked() {
                info!("Refresh requested; dashboard data is static");
            }
            if widgets::secondary_button(ui, "Filter").clicked() {
                info!("Filter requested for the {:?} tab", ui_state.tab);
            }
        });
    });
    ui.add_space(theme::ITEM_SPACING);

    ui.columns(HEADLINE_STATS.len(), |cols| {
        for (col, stat) in cols.iter_mut().zip(HEADLINE_STATS) {
            widgets::stat_card(col, stat);
        }
    });
    ui.add_space(theme::ITEM_SPACING);

    let mut tab = ui_state.tab;
    if widgets::tab_bar(ui, &mut tab, &DashboardTab::ALL) {
        ui_state.tab = tab;
        info!("Dashboard tab: {:?}", tab);
    }
}

fn tab_body(ui: &mut egui::Ui, ui_state: &mut DashboardUi, feed: &mut LiveFeed) {
    match ui_state.tab {
        DashboardTab::Overview => overview(ui, ui_state),
        DashboardTab::Incidents => incidents::incidents_tab(ui, ui_state),
        DashboardTab::Analysis => analysis::analysis_tab(ui, ui_state),
        DashboardTab::DigitalTwin => twin::flat_view(ui, ui_state),
        DashboardTab::LiveFeed => {
            let (_, expand) = widgets::expandable_card(ui, "Live Traffic Feed", |ui| {
                live_feed::feed_panel(ui, feed, false);
            });
            if expand {
                ui_state.expand(ExpandedPanel::LiveFeed);
            }
        }
    }
}

fn overview(ui: &mut egui::Ui, ui_state: &mut DashboardUi) {
    ui.columns(2, |cols| {
        widgets::card(&mut cols[0], "Smart Routing", |ui| {
            routing_map::routing_map(ui, &mut ui_state.selected_route, 260.0);
        });
        let (_, expand) = widgets::expandable_card(&mut cols[1], "Live Incidents", |ui| {
            incidents::live_incident_list(ui);
        });
        if expand {
            ui_state.expand(ExpandedPanel::IncidentReport);
        }
    });
    ui.add_space(theme::ITEM_SPACING);
    let (_, expand) = widgets::expandable_card(ui, "Vehicle Types", |ui| {
        analysis::vehicle_type_chart(ui, false);
    });
    if expand {
        ui_state.expand(ExpandedPanel::TrafficAnalysis);
    }
}

fn expanded_modal(
    ctx: &egui::Context,
    panel: ExpandedPanel,
    ui_state: &mut DashboardUi,
    feed: &mut LiveFeed,
) {
    let screen = ctx.screen_rect();
    let mut open = true;
    let mut close_clicked = false;

    egui::Area::new(egui::Id::new("dashboard_modal_backdrop"))
        .order(egui::Order::Middle)
        .interactable(false)
        .fixed_pos(screen.min)
        .show(ctx, |ui| {
            ui.painter()
                .rect_filled(screen, 0.0, egui::Color32::from_black_alpha(120));
        });

    egui::Window::new(panel.title())
        .id(egui::Id::new("dashboard_expanded_panel"))
        .open(&mut open)
        .collapsible(false)
        .resizable(true)
        .default_size(egui::vec2(screen.width() * 0.8, screen.height() * 0.75))
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                match panel {
                    ExpandedPanel::IncidentReport => incidents::incident_report(ui, ui_state),
                    ExpandedPanel::TrafficAnalysis => analysis::traffic_report(ui),
                    ExpandedPanel::LiveFeed => live_feed::feed_panel(ui, feed, true),
                    ExpandedPanel::DigitalTwin => twin::summary(ui),
                }
                ui.add_space(theme::ITEM_SPACING);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                    close_clicked = widgets::secondary_button(ui, "Close").clicked();
                });
            });
        });

    if !open || close_clicked {
        ui_state.collapse();
    }
}
