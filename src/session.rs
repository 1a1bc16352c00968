//! Line-oriented hot-seat session on top of `RoundController`.

use std::io::{BufRead, Write};

use anyhow::Result;
use common_sense::{
    Agreement, Attribute, AttributeSet, Phase, PlayerId, RoundController, RoundError,
};

const HELP: &str = "\
commands:
  draw                          draw a new card
  set <player> <attribute> <value>
                                choose a value (omit value to unset)
  lock <player>                 lock in / unlock
  clear <player>                unset all of a player's choices
  check                         compare selections
  show                          print the round
  reset                         zero the scoreboard
  help                          this text
  quit                          leave";

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Draw,
    Set {
        player: PlayerId,
        attribute: Attribute,
        value: String,
    },
    Lock(PlayerId),
    Clear(PlayerId),
    Check,
    Show,
    Reset,
    Help,
    Quit,
}

fn parse_player(word: Option<&str>) -> Result<PlayerId, String> {
    let word = word.ok_or("missing player number")?;
    PlayerId::from_seat(word).ok_or_else(|| format!("not a player number: {word}"))
}

fn parse_command(line: &str) -> Result<Option<Command>, String> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(None);
    };

    let command = match verb.to_ascii_lowercase().as_str() {
        "draw" | "d" => Command::Draw,
        "set" | "s" => {
            let player = parse_player(words.next())?;
            let name = words.next().ok_or("missing attribute")?;
            let attribute =
                Attribute::parse(name).ok_or_else(|| format!("unknown attribute: {name}"))?;
            let value = words.collect::<Vec<_>>().join(" ");
            Command::Set {
                player,
                attribute,
                value,
            }
        }
        "lock" | "l" => Command::Lock(parse_player(words.next())?),
        "clear" => Command::Clear(parse_player(words.next())?),
        "check" | "c" => Command::Check,
        "show" => Command::Show,
        "reset" => Command::Reset,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => return Err(format!("unknown command: {other} (try `help`)")),
    };
    Ok(Some(command))
}

/// Run commands from `input` until `quit` or end of input.
pub fn run<R: BufRead, W: Write>(round: &mut RoundController, input: R, out: &mut W) -> Result<()> {
    writeln!(out, "Press `draw` to draw a card! (`help` lists commands)")?;

    for line in input.lines() {
        let line = line?;
        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                writeln!(out, "{message}")?;
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Show => render(round, out)?,
            Command::Draw => match round.draw() {
                Some(draw) => {
                    writeln!(out, "{draw}")?;
                    writeln!(out, "Players, make your selections...")?;
                }
                None => writeln!(out, "A deck is empty; nothing to draw.")?,
            },
            Command::Set {
                player,
                attribute,
                value,
            } => report(out, round.select(player, attribute, &value))?,
            Command::Lock(player) => match round.toggle_lock(player) {
                Ok(true) => {
                    writeln!(out, "{player}: Locked In!")?;
                    if round.can_check() {
                        writeln!(out, "Type `check` to see if you've got Common Sense!")?;
                    }
                }
                Ok(false) => writeln!(out, "{player}: unlocked")?,
                Err(err) => writeln!(out, "{err}")?,
            },
            Command::Clear(player) => report(out, round.clear(player))?,
            Command::Check => match round.check() {
                Ok(outcome) => {
                    writeln!(out, "{}", outcome.message())?;
                    render(round, out)?;
                }
                Err(err) => writeln!(out, "{err}")?,
            },
            Command::Reset => {
                round.reset_scores();
                writeln!(out, "Scores reset.")?;
            }
        }
    }
    Ok(())
}

fn report<W: Write>(out: &mut W, result: Result<(), RoundError>) -> Result<()> {
    if let Err(err) = result {
        writeln!(out, "{err}")?;
    }
    Ok(())
}

/// Print the phrase, each player's choices, and the scoreboard.
///
/// Locked players' choices stay hidden until the round is checked.
fn render<W: Write>(round: &RoundController, out: &mut W) -> Result<()> {
    let view = round.view();
    let board = &view.scoreboard;

    writeln!(
        out,
        "Round {}: {}",
        board.rounds_drawn(),
        view.phrase.as_deref().unwrap_or("(no card drawn)")
    )?;

    let revealed = view.phase == Phase::Checked;
    for player in &view.players {
        if player.locked && !revealed {
            writeln!(out, "  {}: Locked In!", player.player)?;
            continue;
        }

        let choices: Vec<String> = Attribute::ALL
            .iter()
            .zip(&player.selections)
            .filter(|(_, value)| value.as_str() != AttributeSet::UNSET)
            .map(|(attr, value)| {
                let mark = match view.last_check.as_ref().map(|c| c.agreement(*attr)) {
                    Some(Agreement::Agree) => " +",
                    Some(Agreement::Disagree) => " x",
                    None => "",
                };
                format!("{attr}={value}{mark}")
            })
            .collect();

        let choices = if choices.is_empty() {
            "(nothing chosen)".to_string()
        } else {
            choices.join(", ")
        };
        writeln!(out, "  {}: {choices}", player.player)?;
    }

    writeln!(
        out,
        "Correct: {}  Incorrect: {}  Match rate: {}%  Streak: {} (best {})",
        board.correct(),
        board.incorrect(),
        board.match_rate(),
        board.streak(),
        board.best_streak()
    )?;
    for entry in board.history() {
        let icon = if entry.matched { "✓" } else { "✗" };
        writeln!(out, "  {icon} {}", entry.phrase)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use common_sense::{Decks, GameConfig};

    fn controller() -> RoundController {
        let decks = Decks::from_entries(["Things that are"], ["very"], ["sticky"]);
        RoundController::new(decks, GameConfig::new().with_seed(9)).unwrap()
    }

    fn play(script: &str) -> (RoundController, String) {
        let mut round = controller();
        let mut out = Vec::new();
        run(&mut round, script.as_bytes(), &mut out).unwrap();
        (round, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_command("   "), Ok(None));
        assert_eq!(parse_command("DRAW"), Ok(Some(Command::Draw)));
        assert_eq!(parse_command("lock 2"), Ok(Some(Command::Lock(PlayerId::TWO))));
        assert_eq!(
            parse_command("set 1 color red"),
            Ok(Some(Command::Set {
                player: PlayerId::ONE,
                attribute: Attribute::Color,
                value: "red".into(),
            }))
        );
        assert_eq!(
            parse_command("set 1 volume"),
            Ok(Some(Command::Set {
                player: PlayerId::ONE,
                attribute: Attribute::Volume,
                value: String::new(),
            }))
        );
        assert!(parse_command("set 1 weight heavy").is_err());
        assert!(parse_command("lock").is_err());
        assert!(parse_command("dance").is_err());
    }

    #[test]
    fn test_matching_round() {
        let (round, out) = play(
            "draw\n\
             set 1 texture sticky\n\
             set 2 texture sticky\n\
             lock 1\n\
             lock 2\n\
             check\n\
             quit\n\
             draw\n",
        );

        assert!(out.contains("Things that are very sticky"));
        assert!(out.contains("Now that's some Common Sense!"));
        assert!(out.contains("Texture=Sticky +"));
        assert_eq!(round.scoreboard().correct(), 1);
        // Nothing after `quit` runs.
        assert_eq!(round.scoreboard().rounds_drawn(), 1);
    }

    #[test]
    fn test_locked_choices_hidden_until_check() {
        let (_, out) = play("draw\nset 1 color red\nlock 1\nshow\n");

        assert!(out.contains("Player 1: Locked In!"));
        assert!(!out.contains("Color=Red"));
    }

    #[test]
    fn test_checked_choices_cannot_change() {
        let (round, out) = play(
            "draw\n\
             set 1 texture sticky\n\
             set 2 texture sticky\n\
             lock 1\n\
             lock 2\n\
             check\n\
             lock 1\n\
             set 1 texture smooth\n\
             clear 2\n\
             show\n",
        );

        assert!(out.contains("this card was already checked"));
        assert!(!out.contains("Texture=Smooth"));
        let shown = out.rsplit("Round 1:").next().unwrap();
        assert_eq!(shown.matches("Texture=Sticky +").count(), 2);
        assert_eq!(round.phase(), Phase::Checked);
    }

    #[test]
    fn test_errors_are_reported_not_fatal() {
        let (round, out) = play("check\nset 1 color plaid\nlock 3\ndraw\n");

        assert!(out.contains("cannot check: no card has been drawn"));
        assert!(out.contains("\"plaid\" is not a value for Color"));
        assert!(out.contains("Player 3 is not seated at this game"));
        assert_eq!(round.phase(), Phase::Selecting);
    }
}
