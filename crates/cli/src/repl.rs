//! Interactive session: one command per line. The frame is redrawn after
//! every command and again whenever a request finishes.

use std::io::Write;
use std::str::FromStr;

use anyhow::Result;
use api_universe_core::demo::SUGGESTIONS;
use api_universe_core::{AgentRequest, AgentResult, SearchResponse, View};
use api_universe_render::render_app;
use api_universe_service::{AppController, ServiceError};
use colored::Colorize;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use crate::commands::build_controller;
use crate::settings::Settings;

const HELP: &str = "\
commands:
  search <query>     semantic search
  agent <query>      ask the multi-step agent
  compare            compare the current live results
  suggest <n>        search with suggestion n
  tab <view>         switch to search|results|compare|observability
  back               return to the search view
  expand <n>         show or hide the endpoints of result n
  trace              show or hide the trace panel
  help               this text
  quit               leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Command {
    Search(String),
    Agent(String),
    Compare,
    Suggest(usize),
    Tab(View),
    Back,
    Expand(usize),
    Trace,
    Help,
    Quit,
    Redraw,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();
        match word.to_lowercase().as_str() {
            "" => Ok(Self::Redraw),
            "search" | "s" => Ok(Self::Search(rest.to_owned())),
            "agent" | "a" => Ok(Self::Agent(rest.to_owned())),
            "compare" => Ok(Self::Compare),
            "suggest" => ordinal(rest).map(Self::Suggest),
            "tab" | "view" => View::from_str(rest).map(Self::Tab).map_err(|e| e.to_string()),
            "back" => Ok(Self::Back),
            "expand" | "x" => ordinal(rest).map(Self::Expand),
            "trace" => Ok(Self::Trace),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            other => Err(format!("unknown command: {other} (try help)")),
        }
    }
}

/// 1-based number typed by the user, as a 0-based index.
fn ordinal(text: &str) -> Result<usize, String> {
    match text.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n - 1),
        _ => Err(format!("expected a number from 1, got {text:?}")),
    }
}

/// A finished request waiting to be applied.
enum Outcome {
    Search(Result<SearchResponse, ServiceError>),
    Agent(Result<AgentResult, ServiceError>),
}

/// Controller plus the requests it has sent out. Requests run on their own
/// tasks, so commands keep applying while they are in flight; outcomes are
/// applied in arrival order.
struct Session {
    controller: AppController,
    outcomes: mpsc::UnboundedSender<Outcome>,
    in_flight: usize,
}

impl Session {
    fn new(controller: AppController) -> (Self, mpsc::UnboundedReceiver<Outcome>) {
        let (outcomes, receiver) = mpsc::unbounded_channel();
        (Self { controller, outcomes, in_flight: 0 }, receiver)
    }

    fn handle(&mut self, command: Command) {
        match command {
            Command::Search(query) => self.search(&query),
            Command::Suggest(index) => match SUGGESTIONS.get(index) {
                Some(suggestion) => self.search(suggestion),
                None => {
                    println!("{}", format!("only {} suggestions", SUGGESTIONS.len()).yellow());
                },
            },
            Command::Agent(query) => {
                if let Some(request) = self.controller.prepare_agent(&query) {
                    self.spawn_agent(request);
                }
            },
            Command::Compare => {
                if let Some(request) = self.controller.prepare_compare() {
                    self.spawn_agent(request);
                }
            },
            Command::Tab(view) => self.controller.switch_view(view),
            Command::Back => self.controller.switch_view(View::Search),
            Command::Expand(index) => self.controller.toggle_card(index),
            Command::Trace => self.controller.toggle_trace(),
            Command::Redraw | Command::Help | Command::Quit => {},
        }
    }

    fn settle(&mut self, outcome: Outcome) {
        self.in_flight = self.in_flight.saturating_sub(1);
        match outcome {
            Outcome::Search(result) => self.controller.apply_search(result),
            Outcome::Agent(result) => self.controller.apply_agent(result),
        }
    }

    fn search(&mut self, query: &str) {
        let Some(request) = self.controller.prepare_search(query) else {
            return;
        };
        let dispatcher = self.controller.dispatcher();
        let outcomes = self.outcomes.clone();
        self.in_flight += 1;
        tokio::spawn(async move {
            let outcome = dispatcher.search(&request).await;
            if outcomes.send(Outcome::Search(outcome)).is_err() {
                tracing::debug!("session closed before search finished");
            }
        });
    }

    fn spawn_agent(&mut self, request: AgentRequest) {
        let dispatcher = self.controller.dispatcher();
        let outcomes = self.outcomes.clone();
        self.in_flight += 1;
        tokio::spawn(async move {
            let outcome = dispatcher.agent(&request).await;
            if outcomes.send(Outcome::Agent(outcome)).is_err() {
                tracing::debug!("session closed before agent finished");
            }
        });
    }
}

pub(crate) async fn run(settings: &Settings) -> Result<()> {
    let mut controller = build_controller(settings)?;
    controller.authenticate(&settings.user_id).await;
    draw(&controller)?;

    let (mut session, mut outcomes) = Session::new(controller);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;
    // After end of input, wait for in-flight requests so piped sessions
    // still print their results.
    while stdin_open || session.in_flight > 0 {
        tokio::select! {
            line = lines.next_line(), if stdin_open => {
                let Some(line) = line? else {
                    stdin_open = false;
                    continue;
                };
                match line.parse::<Command>() {
                    Ok(Command::Quit) => break,
                    Ok(Command::Help) => {
                        println!("{HELP}");
                        prompt()?;
                    },
                    Ok(command) => {
                        session.handle(command);
                        draw(&session.controller)?;
                    },
                    Err(message) => {
                        println!("{}", message.yellow());
                        prompt()?;
                    },
                }
            },
            Some(outcome) = outcomes.recv() => {
                session.settle(outcome);
                draw(&session.controller)?;
            },
        }
    }
    Ok(())
}

fn draw(controller: &AppController) -> Result<()> {
    println!("{}", render_app(controller.state()));
    prompt()
}

fn prompt() -> Result<()> {
    let mut stdout = std::io::stdout();
    write!(stdout, "{} ", "›".cyan().bold())?;
    stdout.flush()?;
    Ok(())
}
