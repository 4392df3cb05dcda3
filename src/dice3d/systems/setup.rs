//! Scene setup system
//!
//! This module contains the setup function that initializes the visible part
//! of the game: camera, lights, floor surface, shared dice assets, and the UI
//! overlay (results text, throw button, dice count selector, theme switcher).

use bevy::prelude::*;

use crate::dice3d::config::DiceTossConfig;
use crate::dice3d::meshes::create_d6_mesh;
use crate::dice3d::types::*;

use super::dice::DiceAssets;
use super::results::IDLE_PROMPT;

/// Main setup system - initializes the 3D scene and the UI
pub fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<DiceTossConfig>,
    theme: Res<Theme>,
    settings_state: Res<SettingsState>,
) {
    let palette = theme.palette(&settings_state.settings);

    // Camera, carrying the ambient light for its view
    commands.spawn((
        Camera3d::default(),
        table_camera_projection(&config.camera),
        table_camera_transform(&config.camera),
        AmbientLight {
            color: Color::WHITE,
            brightness: config.lights.ambient_brightness,
            ..default()
        },
        MainCamera,
    ));

    // Light
    commands.spawn((
        DirectionalLight {
            illuminance: config.lights.directional_illuminance,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_translation(config.lights.directional_position)
            .looking_at(Vec3::ZERO, Vec3::Y),
    ));

    // Floor surface (the collider is spawned by the physics plugin)
    let floor_size = config.floor_half_extent * 2.0;
    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(floor_size, config.floor_thickness, floor_size))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: palette.floor,
            perceptual_roughness: 0.9,
            ..default()
        })),
        Transform::from_xyz(0.0, -config.floor_thickness / 2.0, 0.0),
        FloorSurface,
    ));

    // Shared dice assets
    let m = &config.materials;
    commands.insert_resource(DiceAssets {
        body_mesh: meshes.add(create_d6_mesh(config.die_size, config.die_edge_radius)),
        body_material: materials.add(StandardMaterial {
            base_color: m.die_color,
            perceptual_roughness: m.die_roughness,
            metallic: m.die_metallic,
            ..default()
        }),
        pip_mesh: meshes.add(Cylinder::new(
            config.pips.radius * config.die_size,
            config.pips.height * config.die_size,
        )),
        pip_material: materials.add(StandardMaterial {
            base_color: m.pip_color,
            perceptual_roughness: m.pip_roughness,
            metallic: m.pip_metallic,
            ..default()
        }),
    });

    // UI - Results text at top
    commands.spawn((
        Text::new(IDLE_PROMPT),
        TextFont {
            font_size: 22.0,
            ..default()
        },
        TextColor(palette.text),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(12.0),
            left: Val::Px(12.0),
            ..default()
        },
        ResultsText,
    ));

    // UI - Control bar at bottom
    commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            bottom: Val::Px(20.0),
            width: Val::Percent(100.0),
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            column_gap: Val::Px(12.0),
            ..default()
        })
        .with_children(|bar| {
            for count in DiceCount::SELECTABLE {
                let label = match count.get() {
                    1 => "1 Die".to_string(),
                    n => format!("{} Dice", n),
                };
                spawn_button(bar, label, palette, DiceCountButton(count));
            }

            spawn_button(bar, "Throw".to_string(), palette, ThrowButton);

            bar.spawn((
                Button,
                button_node(),
                BackgroundColor(palette.button),
                ThemeButton,
            ))
            .with_children(|button| {
                button.spawn((
                    Text::new(theme.switch_label()),
                    TextFont {
                        font_size: 18.0,
                        ..default()
                    },
                    TextColor(palette.text),
                    ThemeButtonLabel,
                ));
            });
        });
}

fn button_node() -> Node {
    Node {
        padding: UiRect::axes(Val::Px(18.0), Val::Px(10.0)),
        justify_content: JustifyContent::Center,
        align_items: AlignItems::Center,
        ..default()
    }
}

fn spawn_button(
    parent: &mut ChildSpawnerCommands,
    label: String,
    palette: ThemePalette,
    marker: impl Bundle,
) {
    parent
        .spawn((
            Button,
            button_node(),
            BackgroundColor(palette.button),
            marker,
        ))
        .with_children(|button| {
            button.spawn((
                Text::new(label),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(palette.text),
            ));
        });
}
