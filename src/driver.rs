//! Line-oriented command driver
//!
//! Reads whitespace-delimited commands (`insert K`, `decrease K V`,
//! `delete K`, `extract-min`, `exit`) and dispatches them to a
//! [`FibonacciHeap`]. The driver owns the key-to-handle lookup table that
//! resolves `decrease`/`delete` commands to live entries; the heap itself
//! only ever sees handles.
//!
//! Recoverable conditions (unknown key, rejected decrease) are reported on
//! stderr and the command is skipped. `delete` prints the heap afterwards,
//! and the heap is printed once more when the loop ends.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use rustc_hash::FxHashMap;

use crate::arena::EntryId;
use crate::heap::FibonacciHeap;

/// One parsed driver command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Insert(i32),
    /// Decrease the entry at `key` to `key - delta`.
    Decrease { key: i32, delta: i32 },
    Delete(i32),
    ExtractMin,
    Exit,
}

/// Whitespace tokenizer over buffered input. Commands may span lines.
struct Tokens<R> {
    input: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(input: R) -> Self {
        Self {
            input,
            pending: VecDeque::new(),
        }
    }

    fn next(&mut self) -> io::Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
        Ok(self.pending.pop_front())
    }

    /// Next token parsed as an integer. `None` on end of input or a
    /// non-numeric token (which is consumed).
    fn next_int(&mut self) -> io::Result<Option<i32>> {
        Ok(self.next()?.and_then(|tok| tok.parse().ok()))
    }
}

/// Command-loop state: the heap plus the driver-owned lookup table.
#[derive(Debug, Default)]
pub struct Session {
    heap: FibonacciHeap,
    by_key: FxHashMap<i32, EntryId>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn heap(&self) -> &FibonacciHeap {
        &self.heap
    }

    /// Applies one command. Returns `false` when the session should end.
    pub fn apply<W: Write>(&mut self, cmd: Command, out: &mut W) -> io::Result<bool> {
        match cmd {
            Command::Insert(key) => {
                let id = self.heap.insert(key);
                self.by_key.insert(key, id);
            }
            Command::ExtractMin => {
                if let Some(key) = self.heap.extract_min() {
                    self.by_key.remove(&key);
                }
            }
            Command::Decrease { key, delta } => {
                match self.by_key.get(&key).copied() {
                    None => eprintln!("decrease {key}: key not found"),
                    Some(id) => {
                        let new_key = key.saturating_sub(delta);
                        match self.heap.decrease_key(id, new_key) {
                            Ok(()) => {
                                // Keep the table keyed by the live key.
                                self.by_key.remove(&key);
                                self.by_key.insert(new_key, id);
                            }
                            Err(err) => eprintln!("decrease {key}: {err}"),
                        }
                    }
                }
            }
            Command::Delete(key) => {
                match self.by_key.get(&key).copied() {
                    None => eprintln!("delete {key}: key not found"),
                    Some(id) => {
                        if self.heap.delete(id).is_ok() {
                            self.by_key.remove(&key);
                        }
                    }
                }
                self.print_heap(out)?;
            }
            Command::Exit => return Ok(false),
        }
        Ok(true)
    }

    /// Prints the forest, one tree per line: roots in ascending
    /// `(degree, key)` order, each tree's keys breadth-first.
    pub fn print_heap<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for root in self.heap.roots() {
            for key in self.heap.level_order(root) {
                write!(out, "{} ", key)?;
            }
            writeln!(out)?;
        }
        Ok(())
    }
}

/// Runs the command loop until `exit` or end of input, then prints the
/// remaining heap.
pub fn run<R: BufRead, W: Write>(input: R, mut out: W) -> io::Result<()> {
    let mut tokens = Tokens::new(input);
    let mut session = Session::new();

    while let Some(word) = tokens.next()? {
        let cmd = match word.as_str() {
            "insert" => match tokens.next_int()? {
                Some(key) => Command::Insert(key),
                None => {
                    writeln!(out, "Invalid command")?;
                    continue;
                }
            },
            "decrease" => match (tokens.next_int()?, tokens.next_int()?) {
                (Some(key), Some(delta)) => Command::Decrease { key, delta },
                _ => {
                    writeln!(out, "Invalid command")?;
                    continue;
                }
            },
            "delete" => match tokens.next_int()? {
                Some(key) => Command::Delete(key),
                None => {
                    writeln!(out, "Invalid command")?;
                    continue;
                }
            },
            "extract-min" => Command::ExtractMin,
            "exit" => Command::Exit,
            _ => {
                writeln!(out, "Invalid command")?;
                continue;
            }
        };
        if !session.apply(cmd, &mut out)? {
            break;
        }
    }

    session.print_heap(&mut out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_script(script: &str) -> String {
        let mut out = Vec::new();
        run(script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn insert_and_exit_prints_roots() {
        let out = run_script("insert 3\ninsert 1\ninsert 2\nexit\n");
        assert_eq!(out, "1 \n2 \n3 \n");
    }

    #[test]
    fn commands_may_span_lines() {
        let out = run_script("insert\n5 insert 4 exit");
        assert_eq!(out, "4 \n5 \n");
    }

    #[test]
    fn delete_prints_heap() {
        let out = run_script("insert 5 insert 2 insert 8 delete 5 exit");
        // delete consolidates {2, 8} into one tree, printed after delete
        // and again at exit.
        assert_eq!(out, "2 8 \n2 8 \n");
    }

    #[test]
    fn decrease_moves_key() {
        let mut out = Vec::new();
        let mut session = Session::new();
        for cmd in [
            Command::Insert(5),
            Command::Insert(2),
            Command::Insert(8),
            Command::ExtractMin,
            Command::Decrease { key: 8, delta: 1 },
        ] {
            assert!(session.apply(cmd, &mut out).unwrap());
        }
        assert_eq!(session.heap().find_min().map(|(_, k)| k), Some(5));
        // The table follows the key: the entry is now addressable as 7.
        assert!(session
            .apply(Command::Decrease { key: 7, delta: 3 }, &mut out)
            .unwrap());
        assert_eq!(session.heap().find_min().map(|(_, k)| k), Some(4));
    }

    #[test]
    fn unknown_key_is_skipped() {
        let out = run_script("insert 5 delete 42 exit");
        // delete still prints the (unchanged) heap.
        assert_eq!(out, "5 \n5 \n");
    }

    #[test]
    fn unknown_word_reports_invalid_command() {
        let out = run_script("frobnicate exit");
        assert_eq!(out, "Invalid command\n");
    }

    #[test]
    fn end_of_input_acts_like_exit() {
        let out = run_script("insert 9");
        assert_eq!(out, "9 \n");
    }
}
