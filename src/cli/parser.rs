//! Terminal command parser for scacchiera

//! Whitespace tokenizer; notation strings are passed through untouched and
//! decoded by the session according to the current phase.

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Command {
    /// A placement (`Ke1`) during setup or a move (`Ke1e2`) during play
    Notation(String),
    /// End the current setup phase
    Next,
    Save { path: String },
    Board,
    Help,
    Quit,
    Unknown(String),
}

/// Parse a command from a line of input (simple tokenizer)
pub fn parse_command(line: &str) -> Command {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Command::Unknown("".to_string());
    }

    let parts: Vec<&str> = trimmed.split_whitespace().collect();
    match parts[0] {
        "next" => Command::Next,
        "board" | "show" => Command::Board,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        "save" => {
            // expected: save <path>, the path may contain spaces
            if parts.len() >= 2 {
                Command::Save {
                    path: parts[1..].join(" "),
                }
            } else {
                Command::Unknown(trimmed.to_string())
            }
        }
        token if parts.len() == 1 => Command::Notation(token.to_string()),
        _ => Command::Unknown(trimmed.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords() {
        assert_eq!(parse_command("next"), Command::Next);
        assert_eq!(parse_command("  quit \n"), Command::Quit);
        assert_eq!(parse_command("show"), Command::Board);
        assert_eq!(parse_command("?"), Command::Help);
    }

    #[test]
    fn test_notation_passthrough() {
        assert_eq!(parse_command("Ke1"), Command::Notation("Ke1".to_string()));
        assert_eq!(parse_command("Bf1b5\r\n"), Command::Notation("Bf1b5".to_string()));
        // validated later, not here
        assert_eq!(parse_command("zz"), Command::Notation("zz".to_string()));
    }

    #[test]
    fn test_save_requires_path() {
        assert_eq!(
            parse_command("save my board.txt"),
            Command::Save {
                path: "my board.txt".to_string()
            }
        );
        assert_eq!(parse_command("save"), Command::Unknown("save".to_string()));
        assert_eq!(parse_command(""), Command::Unknown("".to_string()));
        assert_eq!(
            parse_command("Ke1 Ke2"),
            Command::Unknown("Ke1 Ke2".to_string())
        );
    }
}
