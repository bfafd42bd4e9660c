/// Every command the shell understands.
///
/// A command is recognised by its full name or by its first letter, and only
/// when it comes with the expected number of tokens (the command word
/// included). `step` exists twice: once alone and once with a count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    New,
    Ant,
    Unant,
    Step,
    MultipleSteps,
    Print,
    Clear,
    Resize,
    Dump,
    Help,
    Quit,
}

impl Command {
    pub const ALL: [Command; 11] = [
        Command::New,
        Command::Ant,
        Command::Unant,
        Command::Step,
        Command::MultipleSteps,
        Command::Print,
        Command::Clear,
        Command::Resize,
        Command::Dump,
        Command::Help,
        Command::Quit,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Command::New => "new",
            Command::Ant => "ant",
            Command::Unant => "unant",
            Command::Step | Command::MultipleSteps => "step",
            Command::Print => "print",
            Command::Clear => "clear",
            Command::Resize => "resize",
            Command::Dump => "dump",
            Command::Help => "help",
            Command::Quit => "quit",
        }
    }

    /// Number of whitespace separated tokens, command word included.
    pub fn tokens(self) -> usize {
        match self {
            Command::New => 4,
            Command::Ant | Command::Resize => 3,
            Command::MultipleSteps => 2,
            _ => 1,
        }
    }

    pub fn help(self) -> &'static str {
        match self {
            Command::New => "new <cols> <rows> <config>: Creates a new board.",
            Command::Ant => {
                "ant <x> <y>: Adds a new ant to the board. Only one ant at once is possible."
            }
            Command::Unant => "unant: Removes the current ant from the board.",
            Command::Step => "step: Computes the next round i.e. the ant moves once.",
            Command::MultipleSteps => {
                "step <n>: Computes the next n rounds i.e. the next n moves of the ant. \
                 A negative n rolls back -n rounds."
            }
            Command::Print => "print: Prints the current state of the board.",
            Command::Clear => "clear: Resets the entire board to its initial state.",
            Command::Resize => {
                "resize <cols> <rows>: Resizes the current board. If the ant is out of range it is deleted."
            }
            Command::Dump => "dump: Prints the current state of the board as JSON.",
            Command::Help => "help: Prints this help text.",
            Command::Quit => "quit: Exits this program.",
        }
    }

    /// Finds the command matching the tokens of an input line.
    pub fn identify(tokens: &[&str]) -> Option<Command> {
        let word = tokens.first()?.to_lowercase();
        let mut letters = word.chars();
        let abbreviation = match (letters.next(), letters.next()) {
            (Some(letter), None) => Some(letter),
            _ => None,
        };

        Command::ALL.into_iter().find(|command| {
            let name_matches =
                command.name() == word || command.name().chars().next() == abbreviation;
            name_matches && command.tokens() == tokens.len()
        })
    }
}
