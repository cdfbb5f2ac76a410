use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

const ZOOM_SPEED: f32 = 0.15;
/// Distance multiplier applied by one Zoom In button press.
const BUTTON_ZOOM_STEP: f32 = 0.8;
const MIN_DISTANCE: f32 = 20.0;
const MAX_DISTANCE: f32 = 200.0;
const MIN_PITCH: f32 = 5.0 * std::f32::consts::PI / 180.0; // 5 degrees (near street level)
const MAX_PITCH: f32 = 85.0 * std::f32::consts::PI / 180.0; // 85 degrees
const ORBIT_SENSITIVITY: f32 = 0.005;
const FIELD_OF_VIEW_DEGREES: f32 = 60.0;

/// Camera home position; the camera looks at the origin from here.
pub const HOME_POSITION: Vec3 = Vec3::new(0.0, 40.0, 70.0);

/// Orbital camera model: camera orbits around a focus point on the ground.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct OrbitCamera {
    /// Ground point the camera looks at
    pub focus: Vec3,
    /// Horizontal rotation in radians
    pub yaw: f32,
    /// Elevation angle in radians (clamped between MIN_PITCH and MAX_PITCH)
    pub pitch: f32,
    /// Distance from focus point
    pub distance: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            focus: Vec3::ZERO,
            yaw: 0.0,
            pitch: HOME_POSITION.y.atan2(HOME_POSITION.z),
            distance: HOME_POSITION.length(),
        }
    }
}

impl OrbitCamera {
    /// Scale the distance by `factor`, keeping it within the zoom limits.
    pub fn zoom_by(&mut self, factor: f32) {
        self.distance = (self.distance * factor).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }
}

/// Scene view commands issued by the twin toolbar.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraCommand {
    ZoomIn,
    ZoomOut,
    ResetView,
}

#[derive(Resource, Default)]
pub struct CameraOrbitDrag {
    pub dragging: bool,
    pub last_pos: Vec2,
}

pub fn setup_camera(mut commands: Commands) {
    let orbit = OrbitCamera::default();
    let (pos, look_at) = orbit_to_transform(&orbit);

    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: FIELD_OF_VIEW_DEGREES.to_radians(),
            ..default()
        }),
        Transform::from_translation(pos).looking_at(look_at, Vec3::Y),
    ));
    commands.insert_resource(orbit);
}

pub fn orbit_to_transform(orbit: &OrbitCamera) -> (Vec3, Vec3) {
    // Spherical to cartesian offset from focus
    let x = orbit.distance * orbit.pitch.cos() * orbit.yaw.sin();
    let y = orbit.distance * orbit.pitch.sin();
    let z = orbit.distance * orbit.pitch.cos() * orbit.yaw.cos();
    let pos = orbit.focus + Vec3::new(x, y, z);
    (pos, orbit.focus)
}

/// System: apply OrbitCamera state to the actual camera Transform each frame.
pub fn apply_orbit_camera(
    orbit: Res<OrbitCamera>,
    mut query: Query<&mut Transform, With<Camera3d>>,
) {
    if !orbit.is_changed() {
        return;
    }
    let (pos, look_at) = orbit_to_transform(&orbit);
    let Ok(mut transform) = query.get_single_mut() else {
        return;
    };
    *transform = Transform::from_translation(pos).looking_at(look_at, Vec3::Y);
}

/// Toolbar buttons: zoom in/out by a fixed step, or return home.
pub fn apply_camera_commands(
    mut commands: EventReader<CameraCommand>,
    mut orbit: ResMut<OrbitCamera>,
) {
    for command in commands.read() {
        match command {
            CameraCommand::ZoomIn => orbit.zoom_by(BUTTON_ZOOM_STEP),
            CameraCommand::ZoomOut => orbit.zoom_by(1.0 / BUTTON_ZOOM_STEP),
            CameraCommand::ResetView => *orbit = OrbitCamera::default(),
        }
    }
}

/// Right-mouse drag: orbit (horizontal = yaw, vertical = pitch).
pub fn camera_orbit_drag(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window>,
    mut contexts: EguiContexts,
    mut drag: ResMut<CameraOrbitDrag>,
    mut orbit: ResMut<OrbitCamera>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };

    if buttons.just_pressed(MouseButton::Right) && !pointer_over_ui(contexts.ctx_mut()) {
        if let Some(pos) = window.cursor_position() {
            drag.dragging = true;
            drag.last_pos = pos;
        }
    }

    if buttons.just_released(MouseButton::Right) {
        drag.dragging = false;
    }

    if drag.dragging {
        if let Some(pos) = window.cursor_position() {
            let delta = pos - drag.last_pos;
            orbit.yaw += delta.x * ORBIT_SENSITIVITY;
            orbit.pitch = (orbit.pitch - delta.y * ORBIT_SENSITIVITY).clamp(MIN_PITCH, MAX_PITCH);
            drag.last_pos = pos;
        }
    }
}

/// Dashboard panels sit on top of the twin; wheel and right-drag that start
/// over one of them, or that egui is already tracking, belong to the panel.
fn pointer_over_ui(ctx: &egui::Context) -> bool {
    ctx.is_pointer_over_area() || ctx.wants_pointer_input()
}

/// Scroll wheel: zoom (change distance).
pub fn camera_zoom(
    mut scroll_evts: EventReader<MouseWheel>,
    mut contexts: EguiContexts,
    mut orbit: ResMut<OrbitCamera>,
) {
    if pointer_over_ui(contexts.ctx_mut()) {
        scroll_evts.clear();
        return;
    }
    for evt in scroll_evts.read() {
        let dy = match evt.unit {
            MouseScrollUnit::Line => evt.y,
            MouseScrollUnit::Pixel => evt.y / 100.0,
        };
        orbit.zoom_by(1.0 - dy * ZOOM_SPEED);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_orbit_matches_home_position() {
        let (pos, look_at) = orbit_to_transform(&OrbitCamera::default());
        assert!((pos - HOME_POSITION).length() < 1e-3, "got {pos}");
        assert_eq!(look_at, Vec3::ZERO);
    }

    #[test]
    fn test_idle_egui_leaves_pointer_to_camera() {
        let ctx = egui::Context::default();
        let _ = ctx.run(egui::RawInput::default(), |_| {});
        assert!(!pointer_over_ui(&ctx));
    }

    #[test]
    fn test_zoom_is_clamped() {
        let mut orbit = OrbitCamera::default();
        for _ in 0..50 {
            orbit.zoom_by(BUTTON_ZOOM_STEP);
        }
        assert_eq!(orbit.distance, MIN_DISTANCE);
        for _ in 0..50 {
            orbit.zoom_by(1.0 / BUTTON_ZOOM_STEP);
        }
        assert_eq!(orbit.distance, MAX_DISTANCE);
    }

    #[test]
    fn test_camera_commands() {
        let mut app = App::new();
        app.add_event::<CameraCommand>()
            .init_resource::<OrbitCamera>()
            .add_systems(Update, apply_camera_commands);

        let home = OrbitCamera::default().distance;
        app.world_mut().send_event(CameraCommand::ZoomIn);
        app.update();
        let zoomed = app.world().resource::<OrbitCamera>().distance;
        assert!((zoomed - home * BUTTON_ZOOM_STEP).abs() < 1e-4);

        app.world_mut().send_event(CameraCommand::ZoomOut);
        app.world_mut().send_event(CameraCommand::ZoomOut);
        app.update();
        assert!(app.world().resource::<OrbitCamera>().distance > home);

        app.world_mut().resource_mut::<OrbitCamera>().yaw = 1.0;
        app.world_mut().send_event(CameraCommand::ResetView);
        app.update();
        assert_eq!(*app.world().resource::<OrbitCamera>(), OrbitCamera::default());
    }
}
