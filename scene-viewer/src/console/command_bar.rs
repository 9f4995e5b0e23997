use bevy::input::ButtonState;
use bevy::input::keyboard::{Key, KeyboardInput};
use bevy::prelude::*;

use crate::console::dispatch::{CommandSubmitEvent, dispatch_commands};

/// Command bar state: the field's current text and whether it has keyboard
/// focus. All UI state lives here, not in globals.
#[derive(Resource, Default)]
pub struct CommandBar {
    pub value: String,
    pub focused: bool,
}

/// The clickable text field.
#[derive(Component)]
pub struct CommandInputField;

/// The text node showing the field's contents.
#[derive(Component)]
pub struct CommandInputText;

/// The GO trigger button.
#[derive(Component)]
pub struct CommandRunButton;

/// Command bar UI and dispatch wiring.
pub struct CommandBarPlugin;

impl Plugin for CommandBarPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CommandBar>()
            .add_event::<CommandSubmitEvent>()
            .add_systems(Startup, spawn_command_bar)
            .add_systems(
                Update,
                (
                    command_bar_focus,
                    command_bar_keyboard,
                    command_bar_button,
                    command_bar_display,
                    dispatch_commands,
                )
                    .chain(),
            );
    }
}

// Spawns the command bar across the bottom of the viewport: text field plus GO button
fn spawn_command_bar(mut commands: Commands) {
    commands
        .spawn((
            Name::new("CommandBar"),
            BackgroundColor(Color::srgba(0.10, 0.11, 0.13, 0.85)),
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                right: Val::Px(0.0),
                bottom: Val::Px(0.0),
                padding: UiRect::all(Val::Px(8.0)),
                display: Display::Flex,
                align_items: AlignItems::Center,
                column_gap: Val::Px(8.0),
                ..default()
            },
        ))
        .with_children(|parent| {
            parent
                .spawn((
                    CommandInputField,
                    Name::new("CommandInputField"),
                    BackgroundColor(Color::srgb(0.14, 0.16, 0.20)),
                    BorderColor(Color::srgba(0.0, 0.0, 0.0, 0.25)),
                    Interaction::default(),
                    Node {
                        flex_grow: 1.0,
                        height: Val::Px(28.0),
                        padding: UiRect::horizontal(Val::Px(6.0)),
                        display: Display::Flex,
                        align_items: AlignItems::Center,
                        border: UiRect::all(Val::Px(1.0)),
                        ..default()
                    },
                ))
                .with_children(|field| {
                    field.spawn((
                        CommandInputText,
                        Text::new(""),
                        TextFont { font_size: 14.0, ..default() },
                        TextColor(Color::srgb(1.0, 1.0, 1.0)),
                    ));
                });

            parent
                .spawn((
                    CommandRunButton,
                    Button,
                    Name::new("CommandRunButton"),
                    BackgroundColor(Color::srgb(0.22, 0.24, 0.28)),
                    BorderColor(Color::srgba(0.0, 0.0, 0.0, 0.25)),
                    Node {
                        width: Val::Px(48.0),
                        height: Val::Px(28.0),
                        display: Display::Flex,
                        align_items: AlignItems::Center,
                        justify_content: JustifyContent::Center,
                        border: UiRect::all(Val::Px(1.0)),
                        ..default()
                    },
                ))
                .with_children(|btn| {
                    btn.spawn((
                        Text::new("GO"),
                        TextFont { font_size: 14.0, ..default() },
                        TextColor(Color::srgb(1.0, 1.0, 1.0)),
                    ));
                });
        });
}

/// Clicking the field takes focus, Escape releases it; the border reflects
/// the state.
fn command_bar_focus(
    mut bar: ResMut<CommandBar>,
    interactions: Query<&Interaction, (Changed<Interaction>, With<CommandInputField>)>,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut borders: Query<&mut BorderColor, With<CommandInputField>>,
) {
    for interaction in &interactions {
        if *interaction == Interaction::Pressed {
            bar.focused = true;
        }
    }
    if keyboard.just_pressed(KeyCode::Escape) {
        bar.focused = false;
    }

    if !bar.is_changed() {
        return;
    }
    if let Ok(mut border) = borders.single_mut() {
        *border = BorderColor(if bar.focused {
            Color::srgb(1.0, 1.0, 1.0)
        } else {
            Color::srgba(0.0, 0.0, 0.0, 0.25)
        });
    }
}

/// Edit the field while focused; Enter submits its current text.
fn command_bar_keyboard(
    mut bar: ResMut<CommandBar>,
    mut keyboard_events: EventReader<KeyboardInput>,
    mut submissions: EventWriter<CommandSubmitEvent>,
) {
    if !bar.focused {
        keyboard_events.clear();
        return;
    }

    for event in keyboard_events.read() {
        if event.state != ButtonState::Pressed {
            continue;
        }
        match &event.logical_key {
            Key::Character(input) => {
                if input.chars().all(|c| !c.is_control()) {
                    bar.value.push_str(input);
                }
            }
            Key::Space => {
                bar.value.push(' ');
            }
            Key::Backspace => {
                bar.value.pop();
            }
            Key::Enter => {
                submissions.write(CommandSubmitEvent {
                    text: bar.value.clone(),
                });
            }
            _ => {}
        }
    }
}

/// Pressing GO submits the field's current text, focused or not.
fn command_bar_button(
    bar: Res<CommandBar>,
    mut interactions: Query<
        (&Interaction, &mut BackgroundColor),
        (Changed<Interaction>, With<CommandRunButton>),
    >,
    mut submissions: EventWriter<CommandSubmitEvent>,
) {
    for (interaction, mut background) in &mut interactions {
        match *interaction {
            Interaction::Pressed => {
                submissions.write(CommandSubmitEvent {
                    text: bar.value.clone(),
                });
                *background = BackgroundColor(Color::srgb(0.30, 0.34, 0.40));
            }
            Interaction::Hovered => {
                *background = BackgroundColor(Color::srgb(0.26, 0.29, 0.34));
            }
            Interaction::None => {
                *background = BackgroundColor(Color::srgb(0.22, 0.24, 0.28));
            }
        }
    }
}

/// Mirror the bar's text into the field's text node.
fn command_bar_display(bar: Res<CommandBar>, mut query: Query<&mut Text, With<CommandInputText>>) {
    if !bar.is_changed() {
        return;
    }
    for mut text in &mut query {
        text.0 = bar.value.clone();
    }
}
