use std::io::{self, BufRead, Write};
use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::consts::{SUMMARY, TITLE};
use crate::core::{AnswerSet, Category, EntryOutcome, RoundController, RoundState, RoundTimer};
use crate::error::AppError;
use crate::output::{
    RoundEnd, divider, entry_feedback, entry_prompt, header, records_table, round_report,
};
use crate::records::{FileRecordStore, RecordStore};
use crate::source::{AnswerSetProvider, CatalogOptions, WscCatalog};
use crate::utils::debug_enabled;

const CATEGORY_PROMPT: &str =
    "\nEnter the scientific name of the spider family you now wish to attempt: ";
const MENU_PROMPT: &str = "\n\nWould you like to QUIT or REPLAY?\n>";

/// Answer to the replay/quit menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MenuChoice {
    Quit,
    Replay,
}

impl MenuChoice {
    pub(crate) fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "quit" | "q" | "exit" => Some(MenuChoice::Quit),
            "restart" | "replay" | "retry" | "r" => Some(MenuChoice::Replay),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct SessionOptions {
    pub(crate) timer: RoundTimer,
    pub(crate) width: usize,
    pub(crate) show_banner: bool,
}

/// Interactive play: category prompt, timed rounds, replay menu
pub(crate) struct Session<'a, R, W> {
    provider: &'a dyn AnswerSetProvider,
    store: &'a dyn RecordStore,
    options: SessionOptions,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub(crate) fn new(
        provider: &'a dyn AnswerSetProvider,
        store: &'a dyn RecordStore,
        options: SessionOptions,
        input: R,
        output: W,
    ) -> Self {
        Self {
            provider,
            store,
            options,
            input,
            output,
        }
    }

    /// Play rounds until the user quits or input ends
    pub(crate) fn run(&mut self, first_category: Option<String>) -> Result<(), AppError> {
        if self.options.show_banner {
            let interval = self.options.timer.interval().as_secs().to_string();
            writeln!(self.output, "{}", header(self.options.width, TITLE))?;
            writeln!(self.output, "\n{}", SUMMARY.replace("{interval}", &interval))?;
        }

        let mut preset = first_category;
        loop {
            let Some((category, answers)) = self.choose_category(preset.take())? else {
                break;
            };
            if self.play_round(category, &answers)? == RoundEnd::InputClosed {
                break;
            }
            if self.ask_replay()? == MenuChoice::Quit {
                break;
            }
        }

        writeln!(self.output, "*** Thanks for playing! ***\n")?;
        self.output.flush()?;
        Ok(())
    }

    /// Write `prompt` and read one line; `None` at end of input
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, AppError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        // Bytes, not `read_line`: a non-UTF-8 line is just a wrong entry
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Prompt until a category resolves to an answer set
    fn choose_category(
        &mut self,
        mut preset: Option<String>,
    ) -> Result<Option<(Category, AnswerSet)>, AppError> {
        loop {
            if self.options.show_banner {
                writeln!(self.output, "\n{}", divider(self.options.width))?;
            }

            let raw = match preset.take() {
                Some(raw) => raw,
                None => match self.read_line(CATEGORY_PROMPT)? {
                    Some(line) => line,
                    None => return Ok(None),
                },
            };

            let category = match Category::parse(&raw) {
                Ok(category) => category,
                Err(e) => {
                    writeln!(self.output, "\n\n*** ERROR! {e} ***")?;
                    continue;
                }
            };

            write!(
                self.output,
                "Fetching genera from {}... ",
                self.provider.display_name()
            )?;
            self.output.flush()?;

            match self.provider.fetch(&category) {
                Ok(answers) => {
                    writeln!(self.output, "{} found.\n\n", answers.total_known())?;
                    return Ok(Some((category, answers)));
                }
                Err(e) => writeln!(self.output, "\n\n*** ERROR! {e} ***")?,
            }
        }
    }

    /// One timed round; persists a new best when one is set
    fn play_round(&mut self, category: Category, answers: &AnswerSet) -> Result<RoundEnd, AppError> {
        let previous_best = self.store.get(&category);
        if debug_enabled() {
            eprintln!("[debug] previous best for {category}: {previous_best}");
        }

        let mut round = RoundController::new(
            category,
            answers,
            previous_best,
            self.options.timer,
            Instant::now(),
        );

        let end = loop {
            if round.poll(Instant::now()) == RoundState::RoundOver {
                break RoundEnd::TimeUp;
            }

            let seconds_left = round.time_remaining(Instant::now()).unwrap_or(0);
            let Some(line) = self.read_line(&entry_prompt(seconds_left))? else {
                break RoundEnd::InputClosed;
            };

            let outcome = round.submit(&line, Instant::now());
            if outcome == EntryOutcome::RoundOver {
                break RoundEnd::TimeUp;
            }
            if debug_enabled() {
                match &outcome {
                    EntryOutcome::Accepted { entry, position } => {
                        eprintln!("[debug] accepted {entry} as #{position}")
                    }
                    EntryOutcome::NotFound { entry } => {
                        eprintln!("[debug] rejected {entry}: not in answer set")
                    }
                    EntryOutcome::Duplicate { entry, position } => {
                        eprintln!("[debug] rejected {entry}: duplicate of #{position}")
                    }
                    EntryOutcome::RoundOver => {}
                }
            }
            if let Some(message) = entry_feedback(&outcome, round.category()) {
                writeln!(self.output, "{message}")?;
            }
        };

        let summary = round.finish(Instant::now());
        write!(self.output, "{}", round_report(&summary, end))?;
        if summary.is_new_best()
            && let Err(e) = self.store.append(&summary.category, summary.total())
        {
            eprintln!("Warning: {e}");
        }
        writeln!(self.output)?;

        Ok(end)
    }

    fn ask_replay(&mut self) -> Result<MenuChoice, AppError> {
        loop {
            let Some(response) = self.read_line(MENU_PROMPT)? else {
                return Ok(MenuChoice::Quit);
            };
            match MenuChoice::parse(&response) {
                Some(choice) => return Ok(choice),
                None => writeln!(
                    self.output,
                    "*** ERROR! I didn't understand that response. ***"
                )?,
            }
        }
    }
}

/// Dispatch the parsed command line
pub(crate) fn run(cli: &Cli) -> Result<(), AppError> {
    let store = FileRecordStore::new(
        cli.records_dir
            .clone()
            .unwrap_or_else(FileRecordStore::default_dir),
    );
    if debug_enabled() {
        eprintln!("[debug] records in {}", store.dir().display());
    }

    let catalog = || {
        WscCatalog::new(CatalogOptions {
            offline: cli.offline,
            cache_dir: cli.cache_dir.clone(),
        })
    };

    match &cli.command {
        Some(Commands::Records) => {
            let records = store.list()?;
            println!("{}", records_table(&records, store.dir(), cli.use_color()));
        }
        Some(Commands::Families) => {
            let families = catalog().families()?;
            if families.is_empty() {
                println!("No families found.");
            }
            for family in families {
                println!("{family}");
            }
        }
        Some(Commands::Play { category }) => play(cli, &catalog(), &store, category.clone())?,
        None => play(cli, &catalog(), &store, None)?,
    }

    Ok(())
}

fn play(
    cli: &Cli,
    provider: &dyn AnswerSetProvider,
    store: &dyn RecordStore,
    first_category: Option<String>,
) -> Result<(), AppError> {
    let options = SessionOptions {
        timer: RoundTimer::new(cli.interval()?),
        width: cli.width(),
        show_banner: !cli.no_banner,
    };
    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new(provider, store, options, stdin.lock(), stdout.lock()).run(first_category)
}
