//! Input handling systems
//!
//! Keyboard shortcuts and UI button clicks. Both paths funnel into the same
//! resources and messages, so a click and a key press behave identically.

use bevy::prelude::*;

use crate::dice3d::types::*;

/// Handle keyboard input: SPACE throws, 1/2 pick the dice count, T switches theme
pub fn handle_keyboard_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut throw_requests: MessageWriter<ThrowDiceRequest>,
    mut dice_count: ResMut<DiceCount>,
    mut theme: ResMut<Theme>,
) {
    if keyboard.just_pressed(KeyCode::Space) {
        throw_requests.write(ThrowDiceRequest);
    }

    for (key, count) in [(KeyCode::Digit1, 1), (KeyCode::Digit2, 2)] {
        if keyboard.just_pressed(key) {
            if let Ok(count) = DiceCount::new(count) {
                dice_count.set_if_neq(count);
            }
        }
    }

    if keyboard.just_pressed(KeyCode::KeyT) {
        let next = theme.toggled();
        *theme = next;
    }
}

/// Handle clicks on the throw button, the dice count selector, and the theme switcher
pub fn handle_button_clicks(
    throw_buttons: Query<&Interaction, (Changed<Interaction>, With<ThrowButton>)>,
    count_buttons: Query<(&Interaction, &DiceCountButton), Changed<Interaction>>,
    theme_buttons: Query<&Interaction, (Changed<Interaction>, With<ThemeButton>)>,
    mut throw_requests: MessageWriter<ThrowDiceRequest>,
    mut dice_count: ResMut<DiceCount>,
    mut theme: ResMut<Theme>,
) {
    for interaction in throw_buttons.iter() {
        if *interaction == Interaction::Pressed {
            throw_requests.write(ThrowDiceRequest);
        }
    }

    for (interaction, button) in count_buttons.iter() {
        if *interaction == Interaction::Pressed {
            dice_count.set_if_neq(button.0);
        }
    }

    for interaction in theme_buttons.iter() {
        if *interaction == Interaction::Pressed {
            let next = theme.toggled();
            *theme = next;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Resource, Default)]
    struct ThrowCount(usize);

    fn count_throws(mut reader: MessageReader<ThrowDiceRequest>, mut out: ResMut<ThrowCount>) {
        out.0 += reader.read().count();
    }

    fn input_app() -> App {
        let mut app = App::new();
        app.init_resource::<ButtonInput<KeyCode>>()
            .init_resource::<DiceCount>()
            .init_resource::<Theme>()
            .init_resource::<ThrowCount>()
            .add_message::<ThrowDiceRequest>()
            .add_systems(
                Update,
                (
                    (handle_keyboard_input, handle_button_clicks),
                    count_throws,
                )
                    .chain(),
            );
        app
    }

    fn press(app: &mut App, key: KeyCode) {
        let mut keyboard = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
        keyboard.clear();
        keyboard.press(key);
    }

    #[test]
    fn test_space_requests_a_throw() {
        let mut app = input_app();
        press(&mut app, KeyCode::Space);
        app.update();
        assert_eq!(app.world().resource::<ThrowCount>().0, 1);
    }

    #[test]
    fn test_digit_keys_select_dice_count() {
        let mut app = input_app();
        press(&mut app, KeyCode::Digit2);
        app.update();
        assert_eq!(app.world().resource::<DiceCount>().get(), 2);

        press(&mut app, KeyCode::Digit1);
        app.update();
        assert_eq!(app.world().resource::<DiceCount>().get(), 1);
        assert_eq!(app.world().resource::<ThrowCount>().0, 0);
    }

    #[test]
    fn test_t_toggles_theme() {
        let mut app = input_app();
        press(&mut app, KeyCode::KeyT);
        app.update();
        assert_eq!(*app.world().resource::<Theme>(), Theme::Dark);
    }

    #[test]
    fn test_pressed_buttons_act() {
        let mut app = input_app();
        app.world_mut().spawn((Interaction::Pressed, ThrowButton));
        app.world_mut()
            .spawn((Interaction::Pressed, DiceCountButton(DiceCount::new(2).unwrap())));
        app.world_mut().spawn((Interaction::Pressed, ThemeButton));
        app.update();

        assert_eq!(app.world().resource::<ThrowCount>().0, 1);
        assert_eq!(app.world().resource::<DiceCount>().get(), 2);
        assert_eq!(*app.world().resource::<Theme>(), Theme::Dark);
    }

    #[test]
    fn test_hovered_buttons_do_nothing() {
        let mut app = input_app();
        app.world_mut().spawn((Interaction::Hovered, ThrowButton));
        app.update();
        assert_eq!(app.world().resource::<ThrowCount>().0, 0);
    }
}
