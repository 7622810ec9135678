//! Line-oriented quiz for the `quiz` subcommand.

use std::io::{self, BufRead, Write};

use crate::quiz::{Progress, QuizSession};

/// How a terminal quiz ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizOutcome {
    Completed { score: usize, total: usize },
    Quit { score: usize, answered: usize },
}

/// Drive `session` to completion, reading answers from `input`.
///
/// Answers are `1`-`4`; `q` or end of input quits early.
pub fn run_quiz<R: BufRead, W: Write>(
    session: &mut QuizSession,
    mut input: R,
    out: &mut W,
) -> io::Result<QuizOutcome> {
    let total = session.total();
    let mut answered = 0;

    while let Some(question) = session.current_question().cloned() {
        writeln!(out, "\nQuestion {} of {total}", session.current_index() + 1)?;
        writeln!(out, "{}", question.prompt)?;
        for (i, option) in question.options.iter().enumerate() {
            writeln!(out, "  {}) {option}", i + 1)?;
        }

        let feedback = loop {
            write!(out, "Your answer (1-{}, q to quit): ", question.options.len())?;
            out.flush()?;
            let Some(line) = read_line(&mut input)? else {
                return Ok(QuizOutcome::Quit { score: session.score(), answered });
            };
            if line.eq_ignore_ascii_case("q") {
                return Ok(QuizOutcome::Quit { score: session.score(), answered });
            }
            let choice = match line.parse::<usize>() {
                Ok(n) if n >= 1 => n - 1,
                _ => {
                    writeln!(out, "Please type a number between 1 and {}.", question.options.len())?;
                    continue;
                }
            };
            match session.select_answer(choice) {
                Ok(feedback) => break feedback,
                Err(e) => writeln!(out, "{e}")?,
            }
        };
        answered += 1;

        if feedback.correct {
            writeln!(out, "Correct!")?;
        } else {
            writeln!(
                out,
                "Incorrect. The answer was {}) {}",
                feedback.correct_option + 1,
                question.options[feedback.correct_option]
            )?;
        }
        writeln!(out, "{}", feedback.explanation)?;

        if !session.is_last_question() {
            write!(out, "Press Enter for the next question...")?;
            out.flush()?;
            if read_line(&mut input)?.is_none() {
                return Ok(QuizOutcome::Quit { score: session.score(), answered });
            }
        }

        if let Ok(Progress::Finished { score, total }) = session.advance() {
            writeln!(out, "\nQuiz Completed! Your Score: {score} / {total}")?;
            return Ok(QuizOutcome::Completed { score, total });
        }
    }

    Ok(QuizOutcome::Completed { score: session.score(), total })
}

fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn play(script: &str) -> (QuizOutcome, String) {
        let mut session = QuizSession::default();
        let mut out = Vec::new();
        let outcome = run_quiz(&mut session, Cursor::new(script), &mut out).expect("io on memory buffers");
        (outcome, String::from_utf8(out).expect("utf8 output"))
    }

    #[test]
    fn perfect_run() {
        let (outcome, text) = play("2\n\n2\n\n3\n");
        assert_eq!(outcome, QuizOutcome::Completed { score: 3, total: 3 });
        assert!(text.contains("Question 3 of 3"));
        assert!(text.contains("Your Score: 3 / 3"));
    }

    #[test]
    fn invalid_input_reprompts() {
        let (outcome, text) = play("seven\n0\n5\n1\n\n2\n\n3\n");
        assert!(text.contains("Please type a number between 1 and 4."));
        assert!(text.contains("option 4 does not exist"));
        assert!(text.contains("Incorrect. The answer was 2) place-items"));
        assert_eq!(outcome, QuizOutcome::Completed { score: 2, total: 3 });
    }

    #[test]
    fn quit_reports_progress() {
        let (outcome, _) = play("2\n\nq\n");
        assert_eq!(outcome, QuizOutcome::Quit { score: 1, answered: 1 });
    }

    #[test]
    fn end_of_input_quits() {
        let (outcome, _) = play("");
        assert_eq!(outcome, QuizOutcome::Quit { score: 0, answered: 0 });
    }
}
