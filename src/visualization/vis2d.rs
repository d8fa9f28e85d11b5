use bevy::app::AppExit;
use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::math::primitives::Circle;
use bevy::window::{PrimaryWindow, WindowResized, WindowResolution};

use crate::render::RenderSink;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::{NVec2, Rgb};

// World units map 1:1 to logical pixels; the 2D camera already puts the
// origin at the window center with +y up, same as the simulation.
const CENTER_MARK_RADIUS: f32 = 3.0;
const STEP_FACTOR: f64 = 1.2;

#[derive(Component)]
struct ParticleIndex(pub usize);

/// Disk centers of the current frame, in draw order
#[derive(Resource, Default)]
struct DiskFrame {
    centers: Vec<Vec2>,
}

/// Trails go straight to gizmos; disks are filled mesh entities, so the
/// sink only records where each one goes. Bevy presents the frame itself.
struct BevySink<'a, 'w, 's> {
    gizmos: &'a mut Gizmos<'w, 's>,
    frame: &'a mut DiskFrame,
}

fn to_color(c: Rgb) -> Color {
    Color::rgb_u8(c.0, c.1, c.2)
}

fn to_vec2(p: NVec2) -> Vec2 {
    Vec2::new(p.x as f32, p.y as f32)
}

impl RenderSink for BevySink<'_, '_, '_> {
    // color and radius are baked into each disk's material and mesh at spawn
    fn draw_particle(&mut self, position: NVec2, _color: Rgb, _radius: f64) {
        self.frame.centers.push(to_vec2(position));
    }

    fn draw_trail(&mut self, points: &[NVec2], color: Rgb) {
        self.gizmos
            .linestrip_2d(points.iter().copied().map(to_vec2), to_color(color));
    }

    fn present(&mut self) {}
}

pub fn run_2d(scenario: Scenario) {
    let extent = scenario.simulation.parameters().domain_extent;
    info!(
        "run_2d: starting Bevy 2D viewer with {} particles",
        scenario.simulation.particles().len()
    );
    println!("MENU");
    println!("t:   toggle trails");
    println!("k/l: slower/faster steps");
    println!("q:   exit");

    App::new()
        .insert_resource(scenario)
        .insert_resource(ClearColor(Color::BLACK))
        .init_resource::<DiskFrame>()
        .add_plugins((
            DefaultPlugins.set(WindowPlugin {
                primary_window: Some(Window {
                    title: "molsim".into(),
                    resolution: WindowResolution::new(extent.x as f32, extent.y as f32),
                    ..default()
                }),
                ..default()
            }),
            FrameTimeDiagnosticsPlugin,
        ))
        .add_systems(Startup, setup_particles_system)
        .add_systems(
            Update,
            (
                keyboard_system,
                resize_system,
                physics_step_system,
                draw_system,
                sync_transforms_system,
                title_system,
            )
                .chain(),
        )
        .run();
}

fn setup_particles_system(
    mut commands: Commands,
    scenario: Res<Scenario>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    // 2D camera
    commands.spawn(Camera2dBundle::default());

    let sim = &scenario.simulation;
    let radius = sim.parameters().collision_radius as f32;
    let disk = Mesh2dHandle(meshes.add(Circle::new(radius)));

    for (i, p) in sim.particles().iter().enumerate() {
        commands.spawn((
            MaterialMesh2dBundle {
                mesh: disk.clone(),
                material: materials.add(ColorMaterial::from(to_color(p.color()))),
                transform: Transform::from_xyz(p.x.x as f32, p.x.y as f32, 0.0),
                ..Default::default()
            },
            ParticleIndex(i),
        ));
    }
}

fn keyboard_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut scenario: ResMut<Scenario>,
    mut exit: EventWriter<AppExit>,
) {
    if keys.just_pressed(KeyCode::KeyK) {
        scenario.step *= STEP_FACTOR;
    }
    if keys.just_pressed(KeyCode::KeyL) {
        scenario.step /= STEP_FACTOR;
    }
    if keys.just_pressed(KeyCode::KeyT) {
        scenario.show_trail = !scenario.show_trail;
    }
    if keys.just_pressed(KeyCode::KeyQ) {
        exit.send(AppExit);
    }
}

fn resize_system(mut events: EventReader<WindowResized>, mut scenario: ResMut<Scenario>) {
    for e in events.read() {
        let extent = NVec2::new(e.width as f64, e.height as f64);
        if let Err(err) = scenario.simulation.resize_domain(extent) {
            warn!("window resize ignored: {}", err);
        }
    }
}

fn physics_step_system(mut scenario: ResMut<Scenario>) {
    scenario.tick();
}

fn draw_system(scenario: Res<Scenario>, mut gizmos: Gizmos, mut frame: ResMut<DiskFrame>) {
    gizmos.circle_2d(Vec2::ZERO, CENTER_MARK_RADIUS, Color::WHITE);

    frame.centers.clear();
    let mut sink = BevySink {
        gizmos: &mut gizmos,
        frame: &mut *frame,
    };
    scenario.simulation.render(&mut sink, scenario.show_trail);
}

fn sync_transforms_system(frame: Res<DiskFrame>, mut query: Query<(&ParticleIndex, &mut Transform)>) {
    for (ParticleIndex(i), mut transform) in &mut query {
        if let Some(c) = frame.centers.get(*i) {
            transform.translation.x = c.x;
            transform.translation.y = c.y;
        }
    }
}

fn title_system(
    scenario: Res<Scenario>,
    diagnostics: Res<DiagnosticsStore>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
) {
    let fps = diagnostics
        .get(&FrameTimeDiagnosticsPlugin::FPS)
        .and_then(|d| d.smoothed())
        .unwrap_or(0.0);

    if let Ok(mut window) = windows.get_single_mut() {
        window.title = format!(
            "step:{:5.2} | fps:{:3.0} | trace:{}",
            scenario.step * 1000.0,
            fps,
            scenario.show_trail
        );
    }
}
