use bevy::prelude::*;

pub mod charts;
pub mod dashboard;
pub mod detection_page;
pub mod image_preview;
pub mod landing;
pub mod navigation;
pub mod overlay;
pub mod theme;
pub mod widgets;

mod plugin_registration;

/// Ordering of the egui passes within a frame. Panels must be declared
/// before the central page that fills the remaining space.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum UiSet {
    Navigation,
    Page,
}

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(Update, (UiSet::Navigation, UiSet::Page).chain());

        plugin_registration::register_ui_systems(app);
    }
}
