//! Results display system

use bevy::prelude::*;

use crate::dice3d::types::*;

pub const IDLE_PROMPT: &str = "Press SPACE or click Throw to roll\n1 / 2 picks the dice, T switches theme";

/// Text shown in the results panel for the current roll state
pub fn format_results_panel(rolling: bool, results: &DiceResults, dice_count: DiceCount) -> String {
    if rolling {
        return "Rolling...".to_string();
    }
    if results.results.is_empty() {
        let noun = if dice_count.get() == 1 { "die" } else { "dice" };
        return format!("{} {} ready\n{}", dice_count.get(), noun, IDLE_PROMPT);
    }

    let mut text = String::from("Results:\n");
    for (i, value) in results.results.iter().enumerate() {
        text.push_str(&format!("Dice {}: {}\n", i + 1, value));
    }
    if results.results.len() > 1 {
        text.push_str(&format!("\nTOTAL: {}", results.total()));
    }
    text.push_str("\n\nPress SPACE to roll again");
    text
}

/// System to update the results display text
pub fn update_results_display(
    dice_results: Res<DiceResults>,
    roll_state: Res<RollState>,
    dice_count: Res<DiceCount>,
    mut text_query: Query<&mut Text, With<ResultsText>>,
) {
    // The roll timer ticks every frame, so compare the text instead of
    // relying on change detection of RollState.
    let panel = format_results_panel(roll_state.rolling, &dice_results, *dice_count);
    for mut text in text_query.iter_mut() {
        if text.0 != panel {
            text.0 = panel.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rolling_panel() {
        let text = format_results_panel(true, &DiceResults::default(), DiceCount::default());
        assert_eq!(text, "Rolling...");
    }

    #[test]
    fn test_idle_panel_names_dice_count() {
        let one = format_results_panel(false, &DiceResults::default(), DiceCount::default());
        assert!(one.starts_with("1 die ready"));
        let two = format_results_panel(false, &DiceResults::default(), DiceCount::new(2).unwrap());
        assert!(two.starts_with("2 dice ready"));
    }

    #[test]
    fn test_results_panel_lists_each_die() {
        let results = DiceResults {
            results: vec![3, 5],
        };
        let text = format_results_panel(false, &results, DiceCount::new(2).unwrap());
        assert!(text.contains("Dice 1: 3"));
        assert!(text.contains("Dice 2: 5"));
        assert!(text.contains("TOTAL: 8"));
    }

    #[test]
    fn test_single_die_has_no_total() {
        let results = DiceResults { results: vec![6] };
        let text = format_results_panel(false, &results, DiceCount::default());
        assert!(text.contains("Dice 1: 6"));
        assert!(!text.contains("TOTAL"));
    }

    #[test]
    fn test_display_system_updates_text() {
        let mut app = App::new();
        app.insert_resource(DiceResults {
            results: vec![4],
        })
        .init_resource::<RollState>()
        .init_resource::<DiceCount>()
        .add_systems(Update, update_results_display);
        let entity = app.world_mut().spawn((Text::new(""), ResultsText)).id();

        app.update();
        let text = app.world().get::<Text>(entity).unwrap();
        assert!(text.0.contains("Dice 1: 4"));
    }
}
