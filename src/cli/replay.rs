use std::io::{self, BufRead, Write};

use super::messages::Lang;
use super::read_line_lossy;

/// Map an answer to the replay question. `None` means ask again.
pub fn parse_replay(answer: &str) -> Option<bool> {
    match answer.trim().to_lowercase().as_str() {
        "y" | "yes" | "是" => Some(true),
        "n" | "no" | "否" => Some(false),
        _ => None,
    }
}

/// Ask whether to start another session until a recognised answer arrives.
///
/// Running out of input counts as "no".
pub fn ask_replay<R, W>(input: &mut R, out: &mut W, lang: Lang) -> io::Result<bool>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    loop {
        write!(out, "{}", lang.replay_prompt())?;
        out.flush()?;

        let line = match read_line_lossy(input) {
            Ok(Some(line)) => line,
            Ok(None) => {
                writeln!(out)?;
                writeln!(out, "{}", lang.replay_read_failure())?;
                return Ok(false);
            }
            Err(e) => {
                log::debug!("replay prompt read failed: {}", e);
                writeln!(out)?;
                writeln!(out, "{}", lang.replay_read_failure())?;
                return Ok(false);
            }
        };

        match parse_replay(&line) {
            Some(answer) => {
                log::debug!("replay answer: {}", answer);
                return Ok(answer);
            }
            None => writeln!(out, "{}", lang.replay_hint())?,
        }
    }
}
