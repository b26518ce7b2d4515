// The Blue Room guard puzzle, played from scripted input.
use colordoors::game::guard;
use colordoors::game::Progress;
mod common;
use common::{scripted, transcript};

fn play(answers: &[&str]) -> (Progress, String) {
    let mut console = scripted(answers);
    let progress = guard::encounter(&mut console).expect("encounter");
    (progress, transcript(console))
}

#[test]
fn run_then_door_escapes() {
    let (progress, out) = play(&["run", "door"]);
    assert_eq!(progress, Progress::Continue);
    assert!(out.contains("home free"), "{}", out);
}

#[test]
fn door_first_is_fatal() {
    let (progress, _) = play(&["door"]);
    assert!(matches!(progress, Progress::Died(_)), "{:?}", progress);
}

#[test]
fn running_twice_is_fatal() {
    let (progress, out) = play(&["RUN", "Run"]);
    assert!(matches!(progress, Progress::Died(_)), "{:?}", progress);
    assert_eq!(out.matches("looks the other way").count(), 1, "{}", out);
}

#[test]
fn unrecognized_answers_change_nothing() {
    let (plain, _) = play(&["run", "door"]);
    let (noisy, out) = play(&["foo", "run", "dance", "door"]);
    assert_eq!(plain, noisy);
    assert_eq!(out.matches("Not sure what you meant there").count(), 2, "{}", out);
}

#[test]
fn unrecognized_answers_do_not_distract_the_guard() {
    let (progress, _) = play(&["foo", "door"]);
    assert!(matches!(progress, Progress::Died(_)), "{:?}", progress);
}
