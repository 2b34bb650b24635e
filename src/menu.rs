//! Interactive menu driving a bid table over any line-based input and output

use crate::{
    Bid, ChainedHashTable,
    config::Config,
    error::Result,
    loader::load_bids,
};
use log::{debug, warn};
use std::{
    fmt,
    io::{self, BufRead, Write},
    time::{Duration, Instant},
};

/// An entry of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Load bids from the configured CSV file
    Load,
    /// Print every stored bid grouped by bucket
    DisplayAll,
    /// Look up one bid
    Find,
    /// Remove one bid
    Remove,
    /// Leave the menu
    Exit,
}

impl MenuChoice {
    /// Parses a menu selection; unknown selections yield `None`
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().parse::<u8>().ok()? {
            1 => Some(Self::Load),
            2 => Some(Self::DisplayAll),
            3 => Some(Self::Find),
            4 => Some(Self::Remove),
            9 => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Menu session owning the table it operates on
pub struct Menu<R, W> {
    /// The table every command operates on
    table: ChainedHashTable,
    /// CSV path, column layout and bucket count of the run
    config: Config,
    /// Id used by the find command, replaced by every id the user enters
    bid_key: String,
    /// Source of menu selections and ids
    input: R,
    /// Destination of prompts and results
    output: W,
}

impl<R, W> fmt::Debug for Menu<R, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Menu")
            .field("table", &self.table)
            .field("config", &self.config)
            .field("bid_key", &self.bid_key)
            .finish_non_exhaustive()
    }
}

impl<R: BufRead, W: Write> Menu<R, W> {
    /// Creates a menu with an empty table sized by `config.bucket_count`.
    ///
    /// # Errors
    ///
    /// Fails if the configured bucket count is invalid.
    pub fn new(config: Config, input: R, output: W) -> Result<Self> {
        let table = ChainedHashTable::with_capacity(config.bucket_count)?;
        let bid_key = config.bid_key.clone();
        Ok(Self { table, config, bid_key, input, output })
    }

    /// Returns the table
    #[must_use]
    pub fn table(&self) -> &ChainedHashTable {
        &self.table
    }

    /// Returns the id the next find command falls back to
    #[must_use]
    pub fn bid_key(&self) -> &str {
        &self.bid_key
    }

    /// Consumes the menu and returns its output
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs the menu until the exit entry is chosen or the input ends.
    ///
    /// # Errors
    ///
    /// Fails if reading the input or writing the output fails.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.print_menu()?;

            let Some(line) = self.read_line()? else {
                debug!("Input closed, leaving menu");
                writeln!(self.output, "Good bye.")?;
                return Ok(());
            };

            let choice = MenuChoice::parse(&line);
            debug!("Menu input {line:?} -> {choice:?}");

            match choice {
                Some(MenuChoice::Load) => self.load()?,
                Some(MenuChoice::DisplayAll) => self.display_all()?,
                Some(MenuChoice::Find) => self.find()?,
                Some(MenuChoice::Remove) => self.remove()?,
                Some(MenuChoice::Exit) => {
                    writeln!(self.output, "Good bye.")?;
                    return Ok(());
                }
                None => writeln!(self.output, "Invalid choice. Please try again.")?,
            }
        }
    }

    /// Prints the menu entries and the choice prompt
    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "Menu:")?;
        writeln!(self.output, "  1. Load Bids")?;
        writeln!(self.output, "  2. Display All Bids")?;
        writeln!(self.output, "  3. Find Bid")?;
        writeln!(self.output, "  4. Remove Bid")?;
        writeln!(self.output, "  9. Exit")?;
        self.prompt("Enter choice: ")
    }

    /// Writes `text` without a newline and flushes it
    fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.output, "{text}")?;
        self.output.flush()
    }

    /// Reads one trimmed line, `None` once the input is exhausted
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_owned()))
    }

    /// Loads the configured CSV file and reports count and time
    fn load(&mut self) -> Result<()> {
        writeln!(self.output, "Loading CSV file {}", self.config.csv_path.display())?;
        writeln!(self.output)?;

        let start = Instant::now();
        let report = load_bids(&self.config.csv_path, &self.config.columns, &mut self.table);
        let elapsed = start.elapsed();

        if let Some(e) = &report.error {
            writeln!(self.output, "Error: {e}")?;
        }
        writeln!(self.output, "{} bids read", report.rows_read)?;
        write_elapsed(&mut self.output, elapsed)?;
        Ok(())
    }

    /// Prints every bid, one `Key` line per occupied bucket
    fn display_all(&mut self) -> Result<()> {
        for (index, mut chain) in self.table.chains() {
            if let Some(head) = chain.next() {
                writeln!(self.output, "Key {index}: {}", Row(head))?;
            }
            for bid in chain {
                writeln!(self.output, "   {}", Row(bid))?;
            }
        }
        Ok(())
    }

    /// Asks for an id and prints the matching bid with the search time
    fn find(&mut self) -> Result<()> {
        let prompt = format!("Enter Bid Id to find [{}]: ", self.bid_key);
        self.prompt(&prompt)?;
        if let Some(id) = self.read_line()?.filter(|id| !id.is_empty()) {
            self.bid_key = id;
        }

        let start = Instant::now();
        let found = self.table.search(&self.bid_key);
        let elapsed = start.elapsed();

        match found {
            Some(bid) => writeln!(self.output, "{bid}")?,
            None => writeln!(self.output, "Bid Id {} not found.", self.bid_key)?,
        }
        write_elapsed(&mut self.output, elapsed)?;
        Ok(())
    }

    /// Asks for an id and removes its bid
    fn remove(&mut self) -> Result<()> {
        self.prompt("Enter Bid Id to remove: ")?;
        let Some(id) = self.read_line()?.filter(|id| !id.is_empty()) else {
            writeln!(self.output, "No Bid Id entered.")?;
            return Ok(());
        };

        if self.table.remove(&id).is_some() {
            writeln!(self.output, "Bid Id {id} removed.")?;
        } else {
            warn!("Remove of unknown bid {id}");
            writeln!(self.output, "Bid Id {id} not found.")?;
        }
        self.bid_key = id;
        Ok(())
    }
}

/// Line layout of the display-all listing
struct Row<'a>(&'a Bid);

impl fmt::Display for Row<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self(bid) = self;
        write!(f, "{} | {} | {} | {}", bid.id, bid.title, bid.amount, bid.fund)
    }
}

/// Prints an elapsed time in microseconds and seconds
fn write_elapsed<W: Write>(output: &mut W, elapsed: Duration) -> io::Result<()> {
    writeln!(output, "time: {} microseconds", elapsed.as_micros())?;
    writeln!(output, "time: {:.6} seconds", elapsed.as_secs_f64())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(config: Config, input: &str) -> (ChainedHashTable, String) {
        let mut menu = Menu::new(config, Cursor::new(input.to_owned()), Vec::new()).unwrap();
        menu.run().unwrap();
        let Menu { table, output, .. } = menu;
        (table, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_parse_choice() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::Load));
        assert_eq!(MenuChoice::parse(" 2\n"), Some(MenuChoice::DisplayAll));
        assert_eq!(MenuChoice::parse("3"), Some(MenuChoice::Find));
        assert_eq!(MenuChoice::parse("4"), Some(MenuChoice::Remove));
        assert_eq!(MenuChoice::parse("9"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("5"), None);
        assert_eq!(MenuChoice::parse("load"), None);
        assert_eq!(MenuChoice::parse(""), None);
    }

    #[test]
    fn test_invalid_choice_keeps_looping() {
        let (_, output) = run(Config::default(), "7\nfoo\n9\n");
        assert_eq!(output.matches("Invalid choice. Please try again.").count(), 2);
        assert!(output.ends_with("Good bye.\n"));
    }

    #[test]
    fn test_end_of_input_exits() {
        let (table, output) = run(Config::default(), "");
        assert!(output.ends_with("Good bye.\n"));
        assert!(table.is_empty());
    }

    #[test]
    fn test_invalid_bucket_count_is_rejected() {
        let config = Config::default().bucket_count(0);
        assert!(Menu::new(config, Cursor::new(String::new()), Vec::new()).is_err());
    }

    #[test]
    fn test_find_and_remove_on_empty_table() {
        let (_, output) = run(Config::default(), "3\n\n4\n98223\n9\n");
        assert!(output.contains("Bid Id 98223 not found."));
        assert!(output.contains("time: "));
    }

    #[test]
    fn test_display_all_groups_by_bucket() {
        let mut menu =
            Menu::new(Config::default().bucket_count(5), Cursor::new("2\n9\n"), Vec::new())
                .unwrap();
        menu.table.extend([
            Bid::new("0", "a", "F", 1.0),
            Bid::new("5", "b", "F", 2.5),
            Bid::new("1", "c", "G", 3.0),
        ]);
        menu.run().unwrap();

        let output = String::from_utf8(menu.into_output()).unwrap();
        assert!(output.contains("Key 0: 0 | a | 1 | F\n   5 | b | 2.5 | F\nKey 1: 1 | c | 3 | G\n"));
    }

    #[test]
    fn test_remove_updates_bid_key() {
        let mut menu =
            Menu::new(Config::default(), Cursor::new("4\n42\n3\n\n9\n"), Vec::new()).unwrap();
        menu.table.insert(Bid::new("42", "Lamp", "F", 4.0));
        menu.run().unwrap();

        assert_eq!(menu.bid_key(), "42");
        assert!(menu.table().is_empty());
        let output = String::from_utf8(menu.into_output()).unwrap();
        assert!(output.contains("Bid Id 42 removed."));
        assert!(output.contains("Bid Id 42 not found."));
    }
}
