//! Interactive menu shell.
//!
//! The shell is a state machine over [`ShellState`]. [`transition`] maps the
//! current state and one operator line to the next state and an [`Action`];
//! [`Shell`] performs the action. The only blocking point is
//! [`LineSource::read_line`].

use crate::cli::View;
use crate::commands::{explore_domain, explore_merged, parse_domain_list, Explored};
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use cartographer_domain::{DomainSource, Topic};
use cartographer_store::JsonArchive;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{DefaultEditor, Editor};
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;

/// Where the operator is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellState {
    /// Top-level menu
    MainMenu,
    /// Exploring one domain
    DomainMenu(String),
    /// Exploring a merge of several domains
    MergedMenu(Vec<String>),
    /// Session finished
    Exit,
}

/// What the shell does in response to a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Nothing (blank line)
    None,
    /// Print the topic index
    ListTopics,
    /// Ask for a domain id and enter it
    PromptDomain,
    /// Ask for a comma-separated id list and enter the merge
    PromptMerge,
    /// Print a view of the explored domain
    Show(View),
    /// Print the commands of the current menu
    Help,
    /// Leave the explored domain
    Back,
    /// End the session
    Quit,
    /// Report an unrecognized command
    Unknown(String),
}

/// Compute the next state and action for one operator line.
pub fn transition(state: &ShellState, input: &str) -> (ShellState, Action) {
    let input = input.trim();
    let stay = |action| (state.clone(), action);

    if input.is_empty() {
        return stay(Action::None);
    }

    match (state, input.to_lowercase().as_str()) {
        (_, "exit" | "quit" | "q") => (ShellState::Exit, Action::Quit),
        (_, "help" | "?") => stay(Action::Help),

        (ShellState::MainMenu, "1" | "topics" | "list") => stay(Action::ListTopics),
        (ShellState::MainMenu, "2" | "explore" | "load") => stay(Action::PromptDomain),
        (ShellState::MainMenu, "3" | "merge") => stay(Action::PromptMerge),
        (ShellState::MainMenu, "4") => (ShellState::Exit, Action::Quit),

        (ShellState::DomainMenu(_) | ShellState::MergedMenu(_), command) => match command {
            "1" | "entities" => stay(Action::Show(View::Entities)),
            "2" | "relationships" | "rels" => stay(Action::Show(View::Relationships)),
            "3" | "sources" => stay(Action::Show(View::Sources)),
            "4" | "analysis" | "analyze" => stay(Action::Show(View::Analysis)),
            "5" | "back" => (ShellState::MainMenu, Action::Back),
            _ => stay(Action::Unknown(input.to_string())),
        },

        _ => stay(Action::Unknown(input.to_string())),
    }
}

/// Result of asking the operator for a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    /// A line was entered
    Line(String),
    /// Ctrl-C
    Interrupted,
    /// Ctrl-D or end of input
    Eof,
}

/// Something the shell reads operator lines from.
pub trait LineSource {
    /// Block until the operator enters a line.
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome>;
}

/// Line source backed by a rustyline editor with persistent history.
pub struct EditorInput {
    editor: DefaultEditor,
    history_path: Option<PathBuf>,
}

impl EditorInput {
    /// Create an editor, loading history from the config directory.
    pub fn new(config: &Config) -> Result<Self> {
        let editor_config = rustyline::Config::builder()
            .max_history_size(config.settings.history_size)?
            .auto_add_history(false)
            .build();
        let mut editor: DefaultEditor = Editor::<(), DefaultHistory>::with_config(editor_config)?;

        let history_path = Config::history_path().ok();
        if let Some(path) = &history_path {
            let _ = editor.load_history(path);
        }

        Ok(Self {
            editor,
            history_path,
        })
    }

    /// Persist history.
    pub fn save_history(&mut self) {
        if let Some(path) = &self.history_path {
            if let Err(e) = self.editor.save_history(path) {
                debug!("Failed to save history: {}", e);
            }
        }
    }
}

impl LineSource for EditorInput {
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    self.editor.add_history_entry(line.as_str()).ok();
                }
                Ok(ReadOutcome::Line(line))
            }
            Err(ReadlineError::Interrupted) => Ok(ReadOutcome::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadOutcome::Eof),
            Err(e) => Err(e.into()),
        }
    }
}

/// An interactive session.
///
/// Holds the only mutable state of the program: the menu position and the
/// domain currently being explored.
pub struct Shell<'a, S: DomainSource + ?Sized> {
    source: &'a S,
    formatter: &'a Formatter,
    topics: Vec<Topic>,
    state: ShellState,
    explored: Option<Explored>,
}

impl<'a, S: DomainSource + ?Sized> Shell<'a, S> {
    /// Create a session over an already-read topic index.
    pub fn new(source: &'a S, formatter: &'a Formatter, topics: Vec<Topic>) -> Self {
        Self {
            source,
            formatter,
            topics,
            state: ShellState::MainMenu,
            explored: None,
        }
    }

    /// Current state.
    pub fn state(&self) -> &ShellState {
        &self.state
    }

    /// Run until the operator exits or input ends.
    pub fn run<L, W>(&mut self, input: &mut L, out: &mut W) -> Result<()>
    where
        L: LineSource,
        W: Write,
    {
        while self.state != ShellState::Exit {
            self.print_menu(out)?;

            let line = match input.read_line(self.prompt())? {
                ReadOutcome::Line(line) => line,
                ReadOutcome::Interrupted => {
                    writeln!(out, "{}", self.formatter.info("Use 'exit' to quit"))?;
                    continue;
                }
                ReadOutcome::Eof => break,
            };

            let (next, action) = transition(&self.state, &line);
            self.state = next;
            self.perform(action, input, out)?;
        }

        Ok(())
    }

    fn prompt(&self) -> &'static str {
        match self.state {
            ShellState::MainMenu => "command > ",
            _ => "sub-command > ",
        }
    }

    fn perform<L, W>(&mut self, action: Action, input: &mut L, out: &mut W) -> Result<()>
    where
        L: LineSource,
        W: Write,
    {
        match action {
            Action::None => {}
            Action::ListTopics => self.list_topics(out)?,
            Action::PromptDomain => self.prompt_domain(input, out)?,
            Action::PromptMerge => self.prompt_merge(input, out)?,
            Action::Show(view) => match &self.explored {
                Some(explored) => {
                    writeln!(out, "{}", self.formatter.format_view(view, &explored.domain)?)?
                }
                None => writeln!(out, "{}", self.formatter.warning("No domain loaded"))?,
            },
            Action::Help => self.print_help(out)?,
            Action::Back => self.explored = None,
            Action::Quit => {
                writeln!(out, "{}", self.formatter.banner("The expedition ends. Farewell!"))?
            }
            Action::Unknown(command) => writeln!(
                out,
                "{}",
                self.formatter
                    .warning(&format!("Unknown command: '{}'. Type 'help' for commands.", command))
            )?,
        }
        Ok(())
    }

    fn list_topics<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "{}", self.formatter.format_topics(&self.topics)?)?;
        Ok(())
    }

    fn prompt_domain<L, W>(&mut self, input: &mut L, out: &mut W) -> Result<()>
    where
        L: LineSource,
        W: Write,
    {
        self.list_topics(out)?;
        let ReadOutcome::Line(line) = input.read_line("domain id > ")? else {
            return Ok(());
        };

        match explore_domain(self.source, &self.topics, &line) {
            Ok(explored) => self.enter(explored, out),
            Err(e) => {
                writeln!(out, "{}", self.formatter.warning(&e.to_string()))?;
                Ok(())
            }
        }
    }

    fn prompt_merge<L, W>(&mut self, input: &mut L, out: &mut W) -> Result<()>
    where
        L: LineSource,
        W: Write,
    {
        self.list_topics(out)?;
        writeln!(
            out,
            "{}",
            self.formatter
                .info("Enter domain ids separated by commas (e.g. quantum-computing,artificial-intelligence)")
        )?;
        let ReadOutcome::Line(line) = input.read_line("domain ids > ")? else {
            return Ok(());
        };

        match explore_merged(self.source, &self.topics, parse_domain_list(&line)) {
            Ok(explored) => {
                writeln!(
                    out,
                    "{}",
                    self.formatter
                        .banner(&format!("Merged domains: {}", explored.domain_ids.join(", ")))
                )?;
                self.enter(explored, out)
            }
            Err(e) => {
                writeln!(out, "{}", self.formatter.warning(&e.to_string()))?;
                Ok(())
            }
        }
    }

    fn enter<W: Write>(&mut self, explored: Explored, out: &mut W) -> Result<()> {
        for diagnostic in &explored.diagnostics {
            writeln!(out, "{}", self.formatter.diagnostic(diagnostic))?;
        }

        self.state = if explored.is_merged() {
            ShellState::MergedMenu(explored.domain_ids.clone())
        } else {
            ShellState::DomainMenu(explored.label())
        };
        self.explored = Some(explored);
        Ok(())
    }

    fn print_menu<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out)?;
        match &self.state {
            ShellState::MainMenu => {
                writeln!(out, "{}", self.formatter.heading("Knowledge Cartographer"))?;
                writeln!(out, "1. List knowledge domains")?;
                writeln!(out, "2. Load and explore a domain")?;
                writeln!(out, "3. Merge and explore several domains")?;
                writeln!(out, "4. Exit")?;
            }
            ShellState::DomainMenu(id) => self.print_domain_menu(id, out)?,
            ShellState::MergedMenu(ids) => {
                self.print_domain_menu(&format!("merged: {}", ids.join(", ")), out)?
            }
            ShellState::Exit => {}
        }
        Ok(())
    }

    fn print_domain_menu<W: Write>(&self, title: &str, out: &mut W) -> Result<()> {
        writeln!(out, "{}", self.formatter.heading(&format!("[{}] Domain Explorer", title)))?;
        writeln!(out, "1. Entities")?;
        writeln!(out, "2. Relationships")?;
        writeln!(out, "3. Sources")?;
        writeln!(out, "4. Graph analysis")?;
        writeln!(out, "5. Back")?;
        Ok(())
    }

    fn print_help<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "{}", self.formatter.info("Available commands:"))?;
        match self.state {
            ShellState::MainMenu => {
                writeln!(out, "  1, topics     - List knowledge domains")?;
                writeln!(out, "  2, explore    - Load and explore a domain")?;
                writeln!(out, "  3, merge      - Merge two or more domains")?;
                writeln!(out, "  4, exit, q    - Exit")?;
            }
            _ => {
                writeln!(out, "  1, entities       - List entities")?;
                writeln!(out, "  2, relationships  - List relationships")?;
                writeln!(out, "  3, sources        - List sources")?;
                writeln!(out, "  4, analysis       - Degree analysis and cluster centers")?;
                writeln!(out, "  5, back           - Return to the main menu")?;
                writeln!(out, "  exit, q           - Exit")?;
            }
        }
        Ok(())
    }
}

/// Run the interactive shell on the terminal.
pub fn run_shell(config: &Config, archive: &JsonArchive, formatter: &Formatter) -> Result<()> {
    println!("{}", formatter.banner("Welcome to the Knowledge Cartographer!"));
    if let Ok(metadata) = archive.load_metadata() {
        println!("{}", formatter.format_metadata(&metadata)?);
    }

    let topics = match archive.load_topics() {
        Ok(topics) => topics,
        Err(e) => {
            eprintln!("{}", formatter.warning(&e.to_string()));
            Vec::new()
        }
    };

    let mut input = EditorInput::new(config)?;
    let mut shell = Shell::new(archive, formatter, topics);
    let result = shell.run(&mut input, &mut std::io::stdout());
    input.save_history();
    result
}
