use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn maze_score_output_right_answer() {
    let mut cmd = Command::cargo_bin("maze_score").unwrap();
    cmd.arg("tests/data/maze_small.txt");

    cmd.assert().success().stdout(str::contains("7036"));
}

#[test]
fn maze_score_on_larger_maze() {
    let mut cmd = Command::cargo_bin("maze_score").unwrap();
    cmd.arg("tests/data/maze_large.txt");

    cmd.assert().success().stdout(str::contains("11048"));
}

#[test]
fn maze_seats_output_right_answer() {
    let mut cmd = Command::cargo_bin("maze_seats").unwrap();
    cmd.arg("tests/data/maze_small.txt");

    cmd.assert().success().stdout(str::contains("45"));
}

#[test]
fn maze_seats_on_larger_maze() {
    let mut cmd = Command::cargo_bin("maze_seats").unwrap();
    cmd.arg("tests/data/maze_large.txt");

    cmd.assert().success().stdout(str::contains("64"));
}

#[test]
fn walled_maze_reports_no_path() {
    let mut cmd = Command::cargo_bin("maze_score").unwrap();
    cmd.arg("tests/data/maze_walled.txt");

    cmd.assert()
        .success()
        .stderr(str::contains("no path"))
        .stdout(str::is_empty());
}

#[test]
fn missing_file_fails() {
    let mut cmd = Command::cargo_bin("maze_score").unwrap();
    cmd.arg("tests/data/no_such_maze.txt");

    cmd.assert()
        .failure()
        .stderr(str::contains("Failed to read maze"));
}
