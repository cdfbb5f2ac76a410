//! Meshes for the digital-twin scene.
//!
//! Static geometry (ground, roads, markings, buildings, signal poles) is
//! spawned directly on mount. Vehicles are spawned by the simulation crate
//! and pick up their mesh here once they appear. Everything carries
//! [`SceneEntity`] so the simulation's unmount pass despawns it, and
//! [`SceneAssets`] is dropped on exit so the shared handles are released.

use bevy::prelude::*;

use simulation::config::{
    GROUND_SIZE, MARKING_LONG, MARKING_SHORT, MARKING_Y, ROAD_Y, SIGNAL_HOUSING_SIZE,
    SIGNAL_HOUSING_Y, SIGNAL_LAMP_RADIUS, SIGNAL_POLE_HEIGHT, SIGNAL_POLE_RADIUS, VEHICLE_SIZE,
};
use simulation::layout::{BUILDINGS, ROADS, SIGNAL_POSTS};
use simulation::scene::SceneEntity;
use simulation::signal::Axis;
use simulation::vehicles::VehicleProp;

const GROUND_COLOR: [u8; 3] = [0x1a, 0x5b, 0x1a];
const ROAD_COLOR: [u8; 3] = [0x33, 0x33, 0x33];
const POLE_COLOR: [u8; 3] = [0x33, 0x33, 0x33];
const HOUSING_COLOR: [u8; 3] = [0x22, 0x22, 0x22];
/// Sky behind the scene while it is mounted.
pub const SCENE_BACKGROUND: [u8; 3] = [0xf0, 0xf0, 0xf0];

/// Convert a fixture sRGB triple to a Bevy color.
pub fn srgb(rgb: [u8; 3]) -> Color {
    Color::srgb_u8(rgb[0], rgb[1], rgb[2])
}

/// Mesh handles shared by every instance of a prop kind. Exists only while
/// the scene is mounted.
#[derive(Resource)]
pub struct SceneAssets {
    pub vehicle: Handle<Mesh>,
    pub lamp: Handle<Mesh>,
}

/// System: build shared meshes and spawn the static layout. Runs on
/// entering the live twin view.
pub fn spawn_static_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let flat = |materials: &mut Assets<StandardMaterial>, rgb: [u8; 3]| {
        materials.add(StandardMaterial {
            base_color: srgb(rgb),
            perceptual_roughness: 0.9,
            ..default()
        })
    };

    // Ground
    commands.spawn((
        SceneEntity,
        Mesh3d(meshes.add(Plane3d::default().mesh().size(GROUND_SIZE, GROUND_SIZE))),
        MeshMaterial3d(flat(&mut materials, GROUND_COLOR)),
        Transform::IDENTITY,
    ));

    // Roads and their center-line dashes
    let road_material = flat(&mut materials, ROAD_COLOR);
    let marking_material = flat(&mut materials, [0xff, 0xff, 0xff]);
    let dash_along_z = meshes.add(Plane3d::default().mesh().size(MARKING_SHORT, MARKING_LONG));
    let dash_along_x = meshes.add(Plane3d::default().mesh().size(MARKING_LONG, MARKING_SHORT));
    for road in &ROADS {
        let center = road.center();
        let size = road.size();
        commands.spawn((
            SceneEntity,
            Mesh3d(meshes.add(Plane3d::default().mesh().size(size.x, size.y))),
            MeshMaterial3d(road_material.clone()),
            Transform::from_xyz(center.x, ROAD_Y, center.y),
        ));

        let dash = match road.axis {
            Axis::NorthSouth => dash_along_z.clone(),
            Axis::EastWest => dash_along_x.clone(),
        };
        for at in road.marking_centers() {
            commands.spawn((
                SceneEntity,
                Mesh3d(dash.clone()),
                MeshMaterial3d(marking_material.clone()),
                Transform::from_xyz(at.x, MARKING_Y, at.y),
            ));
        }
    }

    // Buildings stand on the ground: center at half height.
    for block in &BUILDINGS {
        commands.spawn((
            SceneEntity,
            Mesh3d(meshes.add(Cuboid::new(block.width, block.height, block.depth))),
            MeshMaterial3d(flat(&mut materials, block.color)),
            Transform::from_xyz(block.x, block.height / 2.0, block.z),
        ));
    }

    // Signal poles and housings. The lamps themselves are simulation
    // entities and get their meshes in `attach_lamp_meshes`.
    let pole = meshes.add(Cylinder::new(SIGNAL_POLE_RADIUS, SIGNAL_POLE_HEIGHT));
    let housing = meshes.add(Cuboid::new(
        SIGNAL_HOUSING_SIZE[0],
        SIGNAL_HOUSING_SIZE[1],
        SIGNAL_HOUSING_SIZE[2],
    ));
    let pole_material = flat(&mut materials, POLE_COLOR);
    let housing_material = flat(&mut materials, HOUSING_COLOR);
    for post in &SIGNAL_POSTS {
        commands.spawn((
            SceneEntity,
            Mesh3d(pole.clone()),
            MeshMaterial3d(pole_material.clone()),
            Transform::from_xyz(post.x, SIGNAL_POLE_HEIGHT / 2.0, post.z),
        ));
        commands.spawn((
            SceneEntity,
            Mesh3d(housing.clone()),
            MeshMaterial3d(housing_material.clone()),
            Transform::from_xyz(post.x, SIGNAL_HOUSING_Y, post.z),
        ));
    }

    commands.insert_resource(SceneAssets {
        vehicle: meshes.add(Cuboid::new(VEHICLE_SIZE[0], VEHICLE_SIZE[1], VEHICLE_SIZE[2])),
        lamp: meshes.add(Sphere::new(SIGNAL_LAMP_RADIUS)),
    });
    commands.insert_resource(ClearColor(srgb(SCENE_BACKGROUND)));
}

/// System: give newly spawned vehicle props a box mesh in their color.
pub fn attach_vehicle_meshes(
    mut commands: Commands,
    assets: Res<SceneAssets>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    vehicles: Query<(Entity, &VehicleProp), Added<VehicleProp>>,
) {
    for (entity, prop) in &vehicles {
        commands.entity(entity).insert((
            Mesh3d(assets.vehicle.clone()),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: srgb(prop.color),
                perceptual_roughness: 0.6,
                ..default()
            })),
        ));
    }
}

/// System: drop the shared scene handles. Runs on leaving the live view,
/// after which no entity references the meshes and Bevy frees them.
pub fn release_scene_assets(mut commands: Commands) {
    commands.remove_resource::<SceneAssets>();
    commands.insert_resource(ClearColor::default());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_srgb_converts_fixture_colors() {
        let c = srgb(GROUND_COLOR).to_srgba();
        assert!((c.red - 0x1a as f32 / 255.0).abs() < 1e-6);
        assert!((c.green - 0x5b as f32 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn test_static_scene_spawns_layout() {
        let mut app = App::new();
        app.init_resource::<Assets<Mesh>>()
            .init_resource::<Assets<StandardMaterial>>()
            .add_systems(Update, spawn_static_scene);
        app.update();

        let world = app.world_mut();
        let count = world
            .query_filtered::<Entity, With<SceneEntity>>()
            .iter(world)
            .count();
        let markings: usize = ROADS.iter().map(|r| r.marking_centers().len()).sum();
        // ground + roads + markings + buildings + pole and housing per post
        let expected = 1 + ROADS.len() + markings + BUILDINGS.len() + 2 * SIGNAL_POSTS.len();
        assert_eq!(count, expected);
        assert!(world.get_resource::<SceneAssets>().is_some());
    }
}
