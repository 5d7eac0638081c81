//! End-to-end sessions against a real score file and a forced opponent.
use roshambo::*;
use std::io::Cursor;
use std::path::Path;

type Transcript = Lines<Cursor<Vec<u8>>, Vec<u8>>;

fn console(input: &str) -> Transcript {
    Lines::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

fn transcript(console: Transcript) -> String {
    String::from_utf8(console.into_inner().1).expect("utf8")
}

fn play(path: &Path, input: &str, rival: impl Player) -> (Summary, String) {
    let mut console = console(input);
    let summary = Session::new(&mut console, Disk::new(path), Human, rival, Blank)
        .run()
        .expect("session");
    (summary, transcript(console))
}

#[test]
fn fresh_player_wins_first_round() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("scores.txt");
    let (summary, transcript) = play(&path, "stone\nno\n", Fixed::from(Choice::Scissors));
    assert_eq!(std::fs::read_to_string(&path).expect("read"), "1\n0\n");
    assert_eq!(summary.score, Score::new(1, 0));
    assert_eq!(summary.verdict, Outcome::UserWins);
    assert!(transcript.contains("You win this round!"));
    assert!(transcript.contains("Congratulations! You won the game!"));
}

#[test]
fn draw_leaves_record_untouched() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("scores.txt");
    std::fs::write(&path, "3\n5\n").expect("write");
    let (summary, transcript) = play(&path, "paper\nno\n", Fixed::from(Choice::Paper));
    assert_eq!(Disk::new(&path).load(), Score::new(3, 5));
    assert_eq!(summary.verdict, Outcome::ComputerWins);
    assert!(transcript.contains("It's a draw!"));
    assert!(transcript.contains("Score: You 3 - 5 Computer"));
}

#[test]
fn computer_wins_against_scissors() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("scores.txt");
    std::fs::write(&path, "2\n2\n").expect("write");
    let (summary, transcript) = play(&path, "scissors\nno\n", Fixed::from(Choice::Stone));
    assert_eq!(std::fs::read_to_string(&path).expect("read"), "2\n3\n");
    assert_eq!(summary.verdict, Outcome::ComputerWins);
    assert!(transcript.contains("Computer wins this round!"));
    assert!(transcript.contains("Better luck next time!"));
}

#[test]
fn corrupt_record_starts_from_zero() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("scores.txt");
    std::fs::write(&path, "lots\nof\nwins\n").expect("write");
    let (summary, _) = play(&path, "paper\nno\n", Fixed::from(Choice::Stone));
    assert_eq!(summary.score, Score::new(1, 0));
    assert_eq!(std::fs::read_to_string(&path).expect("read"), "1\n0\n");
}

#[test]
fn typos_are_reprompted_not_fatal() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("scores.txt");
    let (summary, transcript) = play(
        &path,
        "rockk\nSTONE\nperhaps\nyes\nPaper\nNO\n",
        Fixed::from(Choice::Scissors),
    );
    assert_eq!(summary.rounds, 2);
    assert_eq!(summary.score, Score::new(1, 1));
    assert_eq!(transcript.matches(CHOICE_PROMPT).count(), 3);
    assert_eq!(
        transcript
            .matches("Invalid choice! Please choose one of: stone, paper, scissors.")
            .count(),
        1
    );
    assert_eq!(transcript.matches("Invalid input.").count(), 1);
}

#[test]
fn score_carries_across_sessions() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("scores.txt");
    play(&path, "stone\nno\n", Fixed::from(Choice::Scissors));
    play(&path, "stone\nno\n", Fixed::from(Choice::Paper));
    let (summary, _) = play(&path, "stone\nno\n", Fixed::from(Choice::Scissors));
    assert_eq!(summary.score, Score::new(2, 1));
}

#[test]
fn decided_rounds_match_score_growth() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("scores.txt");
    std::fs::write(&path, "10\n20\n").expect("write");
    let n = 25;
    let input = "stone\nyes\n".repeat(n - 1) + "stone\nno\n";
    let (summary, transcript) = play(&path, &input, Robot::seeded(1234));
    let draws = transcript.matches("It's a draw!").count();
    let gained = summary.score.since(&Score::new(10, 20));
    assert_eq!(summary.rounds, n);
    assert_eq!(gained.total() as usize, n - draws);
    assert_eq!(Disk::new(&path).load(), summary.score);
}

#[test]
fn unwritable_record_is_fatal() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("scores.txt");
    std::fs::create_dir_all(path.join("blocker")).expect("mkdir");
    let result = Session::new(
        console("stone\nno\n"),
        Disk::new(&path),
        Human,
        Fixed::from(Choice::Paper),
        Blank,
    )
    .run();
    assert!(matches!(result, Err(Error::Persistence(_))));
}
