// Whole-session scenarios: name prompt, door loop, endings and the farewell.
use colordoors::config::{GameConfig, OpponentKind};
use colordoors::game::rooms::{CRYSTAL_MIRROR, EMERALD_AMULET, TRUTH_SCROLL};
use colordoors::game::{Adventure, GameError, Location, Progress};
mod common;
use common::{game_config, scripted, transcript, DOOR_PROMPT};

#[test]
fn accepting_the_nickname_renames_the_player() {
    let mut console = scripted(&["Ada", "y", "purple", "rest"]);
    let mut adventure = Adventure::new(&game_config(OpponentKind::Weighted));
    let summary = adventure.play(&mut console).expect("session");
    let out = transcript(console);

    assert_eq!(summary.player.name(), "Rainbow Unicorn");
    assert_eq!(summary.ending, Progress::Continue);
    assert!(out.contains("You are fun, RAINBOW UNICORN!"), "{}", out);
    assert!(out.contains("The end"), "{}", out);
    assert!(out.trim_end().ends_with("Thanks for playing, RAINBOW UNICORN"), "{}", out);
}

#[test]
fn declining_the_nickname_keeps_the_typed_name() {
    let mut console = scripted(&["  Ada  ", "No", "purple", "leave"]);
    let summary = Adventure::new(&game_config(OpponentKind::Weighted))
        .play(&mut console)
        .expect("session");
    let out = transcript(console);

    assert_eq!(summary.player.name(), "Ada");
    assert!(out.contains("Ok, picky. ADA it is."), "{}", out);
    assert!(out.trim_end().ends_with("Thanks for playing, ADA"), "{}", out);
}

#[test]
fn joking_about_the_nickname_adopts_it_anyway() {
    let mut console = scripted(&["Ada", "maybe", "purple", "rest"]);
    let summary = Adventure::new(&game_config(OpponentKind::Weighted))
        .play(&mut console)
        .expect("session");
    let out = transcript(console);

    assert_eq!(summary.player.name(), "Rainbow Unicorn");
    assert!(out.contains("Trying to be funny?"), "{}", out);
}

#[test]
fn blank_names_are_asked_again() {
    let mut console = scripted(&["   ", "Ada", "n", "purple", "rest"]);
    let summary = Adventure::new(&game_config(OpponentKind::Weighted))
        .play(&mut console)
        .expect("session");
    let out = transcript(console);

    assert_eq!(summary.player.name(), "Ada");
    assert_eq!(out.matches("Enter your player name:").count(), 2, "{}", out);
    assert!(out.contains("Name cannot be empty. Try again."), "{}", out);
}

#[test]
fn red_room_without_fleeing_is_fatal_and_ends_the_loop() {
    let mut console = scripted(&["Ada", "n", "red", "attack", "blue"]);
    let summary = Adventure::new(&game_config(OpponentKind::Weighted))
        .play(&mut console)
        .expect("session");
    let out = transcript(console);

    assert!(matches!(summary.ending, Progress::Died(_)), "{:?}", summary.ending);
    assert_eq!(out.matches(DOOR_PROMPT).count(), 1, "no second door prompt: {}", out);
    assert!(out.contains("Too bad!"), "{}", out);
    assert!(out.trim_end().ends_with("Thanks for playing, ADA"), "{}", out);
    assert_eq!(summary.player.health(), 80);
    assert!(summary.player.inventory().contains(TRUTH_SCROLL));
}

#[test]
fn fleeing_the_red_room_returns_to_the_doors() {
    let mut console = scripted(&["Ada", "n", "red", "I FLEE for my life", "purple", "rest"]);
    let summary = Adventure::new(&game_config(OpponentKind::Weighted))
        .play(&mut console)
        .expect("session");
    let out = transcript(console);

    assert_eq!(summary.ending, Progress::Continue);
    assert_eq!(out.matches(DOOR_PROMPT).count(), 2, "{}", out);
    assert_eq!(
        summary.player.choices(),
        &[Location::RedRoom, Location::PurpleRoom]
    );
    assert_eq!(summary.player.health(), 90);
}

#[test]
fn blue_room_door_first_is_fatal() {
    let mut console = scripted(&["Ada", "n", "blue", "guard", "door"]);
    let summary = Adventure::new(&game_config(OpponentKind::Weighted))
        .play(&mut console)
        .expect("session");
    let out = transcript(console);

    assert!(matches!(summary.ending, Progress::Died(_)), "{:?}", summary.ending);
    assert!(out.contains("your world goes dark"), "{}", out);
}

#[test]
fn blue_room_run_then_door_finishes_normally() {
    let mut console = scripted(&["Ada", "n", "blue door", "chest", "1", "1", "run", "door"]);
    let summary = Adventure::new(&game_config(OpponentKind::Weighted))
        .play(&mut console)
        .expect("session");
    let out = transcript(console);

    assert_eq!(summary.ending, Progress::Continue);
    assert_eq!(summary.player.choices(), &[Location::BlueRoom]);
    assert_eq!(summary.player.inventory().count(CRYSTAL_MIRROR), 1);
    assert_eq!(summary.player.health(), 130);
    assert!(out.contains("You just received [diamonds, gold, silver, sword]"), "{}", out);
    assert!(out.contains("home free"), "{}", out);
    assert!(out.trim_end().ends_with("Thanks for playing, ADA"), "{}", out);
}

#[test]
fn losing_in_the_green_room_flees_and_never_duplicates_the_amulet() {
    let mut console = scripted(&[
        "Ada", "n", "green", "rock", "GREEN", "paper", "purple", "rest",
    ]);
    let summary = Adventure::new(&game_config(OpponentKind::AlwaysWin))
        .play(&mut console)
        .expect("session");
    let out = transcript(console);

    assert_eq!(summary.ending, Progress::Continue);
    assert_eq!(out.matches(DOOR_PROMPT).count(), 3, "{}", out);
    assert_eq!(
        summary.player.choices(),
        &[Location::GreenRoom, Location::GreenRoom, Location::PurpleRoom]
    );
    assert_eq!(summary.player.inventory().count(EMERALD_AMULET), 1);
    assert_eq!(out.matches("whisked away").count(), 2, "{}", out);
}

#[test]
fn weighted_magician_ties_then_wins_and_sends_the_player_back() {
    let config = GameConfig {
        weights: vec![1.0, 0.0, 0.0],
        ..game_config(OpponentKind::Weighted)
    };
    let mut console = scripted(&["Ada", "n", "green", "rock", "scissors", "purple", "rest"]);
    let summary = Adventure::new(&config)
        .play(&mut console)
        .expect("session");
    let out = transcript(console);

    assert_eq!(summary.ending, Progress::Continue);
    assert!(out.contains("Rock. It's a tie!"), "{}", out);
    assert_eq!(out.matches("You tied and can play").count(), 1, "{}", out);
    assert!(out.contains("Rock. You lose!"), "{}", out);
    assert!(out.contains("whisked away"), "{}", out);
    assert_eq!(out.matches(DOOR_PROMPT).count(), 2, "{}", out);
    assert_eq!(
        summary.player.choices(),
        &[Location::GreenRoom, Location::PurpleRoom]
    );
    assert_eq!(summary.player.inventory().count(EMERALD_AMULET), 1);
    assert_eq!(summary.player.level(), 1);
}

#[test]
fn declining_the_magician_counts_as_a_loss() {
    let mut console = scripted(&["Ada", "n", "green", "No Thanks", "purple", "rest"]);
    let summary = Adventure::new(&game_config(OpponentKind::AlwaysLose))
        .play(&mut console)
        .expect("session");
    let out = transcript(console);

    assert_eq!(summary.ending, Progress::Continue);
    assert!(out.contains("The magician frowns."), "{}", out);
    assert_eq!(summary.player.level(), 1);
}

#[test]
fn beating_the_magician_wins_the_game() {
    let mut console = scripted(&["Ada", "n", "green", "scissors", "red"]);
    let summary = Adventure::new(&game_config(OpponentKind::AlwaysLose))
        .play(&mut console)
        .expect("session");
    let out = transcript(console);

    assert!(matches!(summary.ending, Progress::Won(_)), "{:?}", summary.ending);
    assert_eq!(summary.player.level(), 2);
    assert!(out.contains("Paper. You win!"), "{}", out);
    assert!(out.contains("You won!"), "{}", out);
    assert_eq!(out.matches(DOOR_PROMPT).count(), 1, "{}", out);
    assert!(out.trim_end().ends_with("Thanks for playing, ADA"), "{}", out);
}

#[test]
fn unknown_doors_reprompt_without_penalty() {
    let mut console = scripted(&["Ada", "n", "yellow", "", "Purple!", "rest"]);
    let summary = Adventure::new(&game_config(OpponentKind::Weighted))
        .play(&mut console)
        .expect("session");
    let out = transcript(console);

    assert_eq!(out.matches("weakest link").count(), 2, "{}", out);
    assert_eq!(summary.player.choices(), &[Location::PurpleRoom]);
    assert_eq!(summary.player.health(), 110);
}

#[test]
fn closed_input_aborts_the_session() {
    let mut console = scripted(&["Ada", "n", "blue", "chest"]);
    let err = Adventure::new(&game_config(OpponentKind::Weighted))
        .play(&mut console)
        .unwrap_err();
    assert!(matches!(err, GameError::InputClosed), "{:?}", err);
}

#[test]
fn same_seed_same_transcript() {
    let mut answers = vec!["Ada", "n", "green"];
    answers.extend(std::iter::repeat("rock").take(20));
    answers.extend(["purple", "rest"]);

    let run = || {
        let mut console = scripted(&answers);
        let result = Adventure::new(&game_config(OpponentKind::Weighted)).play(&mut console);
        (result.map(|s| s.ending).ok(), transcript(console))
    };
    let (first_ending, first) = run();
    let (second_ending, second) = run();
    assert_eq!(first_ending, second_ending);
    assert_eq!(first, second);
}

#[test]
fn summary_serializes_for_embedding() {
    let mut console = scripted(&["Ada", "n", "red", "attack"]);
    let summary = Adventure::new(&game_config(OpponentKind::Weighted))
        .play(&mut console)
        .expect("session");
    let json = serde_json::to_value(&summary).expect("json");
    assert_eq!(json["player"]["name"], "Ada");
    assert_eq!(json["player"]["choices"][0], "Red Room");
    assert_eq!(json["ending"]["status"], "died");
}
