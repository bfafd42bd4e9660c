use crate::command::Command;
use crate::error::ShellError;
use crate::render;
use langton_engine::{Grid, GridError};
use log::info;
use std::cmp::Ordering;
use std::io::{self, BufRead, Write};

const PROMPT: &str = "ant> ";

/// Whether the shell keeps reading input after a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// The interactive shell for Langton's Ant.
///
/// Holds at most one board. Results go to `out`, error messages to `err`.
pub struct Shell {
    grid: Option<Grid>,
    color: bool,
}

impl Shell {
    pub fn new(color: bool) -> Shell {
        Shell { grid: None, color }
    }

    /// Reads commands line by line until `quit` or the end of the input.
    pub fn run<R: BufRead, W: Write, E: Write>(
        &mut self,
        input: R,
        out: &mut W,
        err: &mut E,
    ) -> io::Result<()> {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        for line in input.lines() {
            if self.execute(&line?, out, err)? == Flow::Quit {
                return Ok(());
            }
            write!(out, "{PROMPT}")?;
            out.flush()?;
        }

        // End of input behaves like `quit`
        writeln!(out)?;
        Ok(())
    }

    /// Runs a single input line.
    pub fn execute<W: Write, E: Write>(
        &mut self,
        line: &str,
        out: &mut W,
        err: &mut E,
    ) -> io::Result<Flow> {
        let tokens: Vec<&str> = line.split_whitespace().collect();

        let result = match Command::identify(&tokens) {
            Some(Command::Quit) => return Ok(Flow::Quit),
            Some(Command::New) => self.new_board(&tokens),
            Some(Command::Ant) => self.place_ant(&tokens),
            Some(Command::Unant) => self.remove_ant(),
            Some(Command::Step) => self.step(out, 1),
            Some(Command::MultipleSteps) => self.multiple_steps(out, &tokens),
            Some(Command::Print) => self.print(out),
            Some(Command::Clear) => self.board_mut().map(Grid::clear),
            Some(Command::Resize) => self.resize(&tokens),
            Some(Command::Dump) => self.dump(out),
            Some(Command::Help) => print_help(out),
            None => Err(ShellError::UnknownCommand.into()),
        };

        match result {
            Ok(()) => {}
            Err(Failure::User(error)) => writeln!(err, "{error}")?,
            Err(Failure::Io(error)) => return Err(error),
        }
        Ok(Flow::Continue)
    }

    fn board(&self) -> Result<&Grid, Failure> {
        Ok(self.grid.as_ref().ok_or(ShellError::NoBoard)?)
    }

    fn board_mut(&mut self) -> Result<&mut Grid, Failure> {
        Ok(self.grid.as_mut().ok_or(ShellError::NoBoard)?)
    }

    fn new_board(&mut self, tokens: &[&str]) -> Result<(), Failure> {
        let cols = parse_non_negative(tokens[1])?;
        let rows = parse_non_negative(tokens[2])?;
        let grid = Grid::new(cols, rows, tokens[3])?;

        info!("New {cols}x{rows} board with configuration {}", tokens[3]);
        self.grid = Some(grid);
        Ok(())
    }

    fn place_ant(&mut self, tokens: &[&str]) -> Result<(), Failure> {
        let grid = self.board_mut()?;
        if !grid.agents().is_empty() {
            return Err(ShellError::TooManyAnts.into());
        }

        let x = parse_non_negative(tokens[1])?;
        let y = parse_non_negative(tokens[2])?;
        grid.set_agent(x, y)?;
        Ok(())
    }

    fn remove_ant(&mut self) -> Result<(), Failure> {
        let grid = self.board_mut()?;
        if grid.agents().is_empty() {
            return Err(ShellError::NoAnt.into());
        }

        grid.clear_agents();
        Ok(())
    }

    fn step<W: Write>(&mut self, out: &mut W, steps: i64) -> Result<(), Failure> {
        let grid = self.board_mut()?;
        let step_count = grid.perform_step(steps)?;
        writeln!(out, "{step_count}")?;
        Ok(())
    }

    /// `step <n>` moves forward for positive `n` and rolls back for negative `n`.
    fn multiple_steps<W: Write>(&mut self, out: &mut W, tokens: &[&str]) -> Result<(), Failure> {
        let steps = parse_number(tokens[1])?;
        let grid = self.board_mut()?;

        let step_count = match steps.cmp(&0) {
            Ordering::Greater => grid.perform_step(steps)?,
            Ordering::Less => grid.reset(steps.checked_neg().ok_or(ShellError::InvalidInput)?)?,
            Ordering::Equal => return Err(ShellError::InvalidInput.into()),
        };

        writeln!(out, "{step_count}")?;
        Ok(())
    }

    fn print<W: Write>(&self, out: &mut W) -> Result<(), Failure> {
        render::draw(out, self.board()?, self.color)?;
        Ok(())
    }

    fn resize(&mut self, tokens: &[&str]) -> Result<(), Failure> {
        let grid = self.board_mut()?;
        let cols = parse_non_negative(tokens[1])?;
        let rows = parse_non_negative(tokens[2])?;
        grid.resize(cols, rows)?;
        Ok(())
    }

    fn dump<W: Write>(&self, out: &mut W) -> Result<(), Failure> {
        let json = self
            .board()?
            .snapshot()
            .to_json()
            .map_err(io::Error::other)?;
        writeln!(out, "{json}")?;
        Ok(())
    }
}

/// Either a message for the user or a broken output stream.
#[derive(Debug)]
enum Failure {
    User(ShellError),
    Io(io::Error),
}

impl From<ShellError> for Failure {
    fn from(error: ShellError) -> Failure {
        Failure::User(error)
    }
}

impl From<GridError> for Failure {
    fn from(error: GridError) -> Failure {
        Failure::User(error.into())
    }
}

impl From<io::Error> for Failure {
    fn from(error: io::Error) -> Failure {
        Failure::Io(error)
    }
}

fn print_help<W: Write>(out: &mut W) -> Result<(), Failure> {
    writeln!(out, "\n=== All possible commands: ===\n")?;
    for command in Command::ALL {
        writeln!(out, "{}\n", command.help())?;
    }
    Ok(())
}

fn parse_number(token: &str) -> Result<i64, ShellError> {
    token.parse().map_err(|_| ShellError::InvalidInput)
}

fn parse_non_negative(token: &str) -> Result<i64, ShellError> {
    let number = parse_number(token)?;
    if number < 0 {
        return Err(ShellError::InvalidInput);
    }
    Ok(number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Runs a whole session and returns what went to stdout and stderr.
    fn session(input: &str) -> (String, String) {
        let mut shell = Shell::new(false);
        let mut out = Vec::new();
        let mut err = Vec::new();
        shell.run(Cursor::new(input), &mut out, &mut err).unwrap();

        (
            String::from_utf8(out).unwrap().replace(PROMPT, ""),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn when_running_the_classic_ant_the_steps_and_board_are_printed() {
        let (out, err) = session("new 3 3 RL\nant 1 1\nstep\nprint\nquit\n");

        assert_eq!(out, "1\n000\n^10\n000\n");
        assert_eq!(err, "");
    }

    #[test]
    fn when_stepping_back_the_board_is_restored() {
        let (out, err) = session("n 5 5 RL\na 2 2\ns 10\ns -10\np\nq\n");

        assert_eq!(out, "10\n0\n00000\n00000\n00<00\n00000\n00000\n");
        assert_eq!(err, "");
    }

    #[test]
    fn when_stepping_back_too_far_an_error_is_reported() {
        let (out, err) = session("new 3 3 RL\nant 1 1\nstep 2\nstep -3\nq\n");

        assert_eq!(out, "2\n");
        assert_eq!(err, "Error! Not enough steps to reset.\n");
    }

    #[test]
    fn when_using_commands_without_a_board_an_error_is_reported() {
        let (_, err) = session("ant 0 0\nunant\nstep\nstep 3\nprint\nclear\nresize 2 2\ndump\n");

        assert_eq!(err, "Error! No board existing.\n".repeat(8));
    }

    #[test]
    fn when_creating_a_board_with_bad_arguments_an_error_is_reported() {
        let (_, err) = session("new -1 3 RL\nnew x 3 RL\nnew 3 3 RX\nnew 3 3 RLRLRLRLRLRLR\nprint\n");

        assert_eq!(
            err,
            "Error! Invalid input.\n\
             Error! Invalid input.\n\
             Error! Invalid states.\n\
             Error! Invalid states.\n\
             Error! No board existing.\n"
        );
    }

    #[test]
    fn when_placing_a_second_ant_an_error_is_reported() {
        let (_, err) = session("new 3 3 RL\nant 0 0\nant 1 1\n");

        assert_eq!(err, "Error! Only one ant is allowed at once.\n");
    }

    #[test]
    fn when_placing_an_ant_outside_the_board_an_error_is_reported() {
        let (_, err) = session("new 3 3 RL\nant 3 0\nant -1 0\nant a b\n");

        assert_eq!(
            err,
            "Error! Index out of range.\nError! Invalid input.\nError! Invalid input.\n"
        );
    }

    #[test]
    fn when_stepping_or_removing_without_an_ant_an_error_is_reported() {
        let (_, err) = session("new 3 3 RL\nstep\nstep 4\nunant\n");

        assert_eq!(err, "Error! No ant existing.\n".repeat(3));
    }

    #[test]
    fn when_stepping_zero_times_an_error_is_reported() {
        let (out, err) = session("new 3 3 RL\nant 1 1\nstep 0\nstep x\n");

        assert_eq!(out, "\n");
        assert_eq!(err, "Error! Invalid input.\n".repeat(2));
    }

    #[test]
    fn when_removing_the_ant_a_new_one_can_be_placed() {
        let (out, err) = session("new 2 2 RL\nant 0 0\nunant\nant 1 1\nprint\n");

        assert_eq!(out, "00\n0<\n\n");
        assert_eq!(err, "");
    }

    #[test]
    fn when_resizing_the_ant_out_of_range_it_is_deleted() {
        let (out, err) = session("new 4 4 RL\nant 0 0\nresize 2 2\nprint\nstep\nresize -1 2\n");

        assert_eq!(out, "00\n00\n\n");
        assert_eq!(err, "Error! No ant existing.\nError! Invalid input.\n");
    }

    #[test]
    fn when_asking_for_a_huge_board_an_error_is_reported_and_the_old_board_is_kept() {
        let (out, err) = session(
            "new 4294967296 4294967296 RL\nnew 2 2 RL\nresize 4294967296 4294967296\nprint\n",
        );

        assert_eq!(out, "00\n00\n\n");
        assert_eq!(err, "Error! Invalid input.\nError! Invalid input.\n");
    }

    #[test]
    fn when_clearing_the_board_the_ant_and_steps_are_gone() {
        let (out, err) = session("new 3 2 RL\nant 2 1\nstep 3\nclear\nprint\nstep\n");

        assert_eq!(out, "3\n000\n000\n\n");
        assert_eq!(err, "Error! No ant existing.\n");
    }

    #[test]
    fn when_dumping_the_board_json_is_printed() {
        let (out, _) = session("new 2 1 RL\ndump\nquit\n");

        assert!(out.contains("\"width\": 2"));
        assert!(out.contains("\"config\": \"RL\""));
        assert!(out.contains("\"agent\": null"));
    }

    #[test]
    fn when_asking_for_help_every_command_is_listed() {
        let (out, _) = session("help\nq\n");

        assert!(out.starts_with("\n=== All possible commands: ===\n"));
        for command in Command::ALL {
            assert!(out.contains(command.help()));
        }
    }

    #[test]
    fn when_typing_an_unknown_command_an_error_is_reported() {
        let (_, err) = session("jump\n\nprint 3\nq\n");

        assert_eq!(err, "Error! This command does not exist.\n".repeat(3));
    }

    #[test]
    fn when_quitting_later_commands_are_not_run() {
        let (out, err) = session("quit\nnew 3 3 RL\nprint\n");

        assert_eq!(out, "");
        assert_eq!(err, "");
    }

    #[test]
    fn when_executing_a_line_the_flow_tells_whether_to_go_on() {
        let mut shell = Shell::new(false);
        let mut out = Vec::new();
        let mut err = Vec::new();

        assert_eq!(
            shell.execute("new 3 3 RL", &mut out, &mut err).unwrap(),
            Flow::Continue
        );
        assert_eq!(
            shell.execute("QUIT", &mut out, &mut err).unwrap(),
            Flow::Quit
        );
    }
}
