use super::{Address, Config, DiskFile, Listing, Stack, Var};
use crate::error;
use crate::lang::{Error, Keyword, Line, LineNumber};
use std::collections::VecDeque;
use std::time::Duration;

type Result<T> = std::result::Result<T, Error>;

/// ## Interpreter context
///
/// Owns the program store and all run state. The REPL drives it by
/// calling `execute` and reacting to the returned `Event`.

pub struct Runtime {
    pub(super) config: Config,
    pub(super) listing: Listing,
    pub(super) var: Var,
    pub(super) stack: Stack<Address>,
    pub(super) for_loop: Option<ForLoop>,
    pub(super) file: Option<DiskFile>,
    pub(super) input: Option<String>,
    pub(super) input_resume: Option<usize>,
    pub(super) print_buffer: String,
    state: State,
    pc: Address,
    events: VecDeque<Event>,
    interrupted: bool,
    tr: bool,
}

/// Single FOR/NEXT loop register.
#[derive(Debug, Clone, Copy)]
pub struct ForLoop {
    pub var: u8,
    pub to: i32,
    pub step: i32,
    pub address: Address,
}

#[derive(Debug)]
pub enum Event {
    Stopped,
    Running,
    Print(String),
    Input(String),
    Sleep(Duration),
    Error(Error),
    Halted(Halt),
}

/// How a run ended without an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Halt {
    Normal,
    End(LineNumber),
    Stop(LineNumber),
    Break(LineNumber),
    Exit,
}

impl std::fmt::Display for Halt {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Halt::Normal | Halt::Exit => Ok(()),
            Halt::End(n) => write!(f, "end at line {}", n),
            Halt::Stop(n) => write!(f, "stop at line {}", n),
            Halt::Break(n) => write!(f, "break in line {}", n),
        }
    }
}

/// What a statement handler asks the run loop to do next.
#[derive(Debug)]
pub enum Flow {
    Continue,
    Jump(Address),
    Input(usize),
    Sleep(Duration),
    Halt(Halt),
}

#[derive(Debug, PartialEq)]
enum State {
    Idle,
    Running,
    Input(String),
}

impl Default for Runtime {
    fn default() -> Self {
        Runtime::new(Config::default())
    }
}

impl Runtime {
    pub fn new(config: Config) -> Runtime {
        Runtime {
            listing: Listing::new(config.buffer_size),
            var: Var::new(),
            stack: Stack::new(config.stack_depth),
            for_loop: None,
            file: None,
            input: None,
            input_resume: None,
            print_buffer: String::new(),
            state: State::Idle,
            pc: 0,
            events: VecDeque::new(),
            interrupted: false,
            tr: false,
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Store, replace or delete one numbered line.
    pub fn enter(&mut self, s: &str) -> Result<()> {
        if s.trim_end_matches(|c| c == '\r' || c == '\n').len() > self.config.max_line_len {
            return Err(error!(LineBufferOverflow));
        }
        let line = Line::new(s)?;
        self.listing.insert_line(line)
    }

    pub fn listing(&self) -> &Listing {
        &self.listing
    }

    pub fn set_listing(&mut self, listing: Listing) {
        self.listing = listing;
    }

    /// NEW: forget the program and every variable.
    pub fn new_program(&mut self) {
        self.listing.clear();
        self.var.clear();
    }

    /// Clear variables, array, GOSUB stack, loop register and open file.
    pub fn reset(&mut self) {
        self.var.clear();
        self.stack.clear();
        self.for_loop = None;
        self.file = None;
    }

    pub fn toggle_trace(&mut self) -> bool {
        self.tr = !self.tr;
        self.tr
    }

    pub fn interrupt(&mut self) {
        match self.state {
            State::Idle => {}
            State::Input(_) => {
                self.state = State::Running;
                self.interrupted = true;
            }
            State::Running => self.interrupted = true,
        }
    }

    pub fn is_running(&self) -> bool {
        self.state != State::Idle
    }

    /// Start the program. `None` (or line 0) starts fresh from the first
    /// line; a line number resumes there keeping all variables and stacks.
    pub fn run(&mut self, start: Option<LineNumber>) -> Result<()> {
        if self.listing.is_empty() {
            return Err(error!(BufferEmpty));
        }
        self.listing.check_integrity()?;
        self.pc = match start.filter(|&n| n != 0) {
            Some(n) => self.listing.resolve_line_address(n, false)?,
            None => {
                self.reset();
                0
            }
        };
        tracing::debug!(pc = self.pc, "run");
        self.input = None;
        self.input_resume = None;
        self.interrupted = false;
        self.state = State::Running;
        Ok(())
    }

    /// Answer a pending INPUT.
    pub fn input(&mut self, s: &str) {
        if let State::Input(_) = self.state {
            self.input = Some(s.trim_end_matches(|c| c == '\r' || c == '\n').to_string());
            self.state = State::Running;
        }
    }

    pub fn execute(&mut self, cycles: usize) -> Event {
        if let Some(event) = self.next_event() {
            return event;
        }
        match &self.state {
            State::Idle => return Event::Stopped,
            State::Input(prompt) => return Event::Input(prompt.clone()),
            State::Running => {}
        }
        for _ in 0..cycles {
            let line = match self.listing.line_at(self.pc) {
                Some(line) => line.clone(),
                None => {
                    self.halt(Halt::Normal);
                    break;
                }
            };
            let number = line.number();
            if self.interrupted {
                self.interrupted = false;
                self.halt(Halt::Break(number));
                break;
            }
            match self.dispatch(&line) {
                Ok(Flow::Continue) => self.pc = number + 1,
                Ok(Flow::Jump(address)) => self.pc = address,
                Ok(Flow::Input(resume)) => {
                    self.input_resume = Some(resume);
                    let prompt = match self.print_buffer.rfind('\n') {
                        Some(index) => self.print_buffer.split_off(index + 1),
                        None => std::mem::take(&mut self.print_buffer),
                    };
                    self.state = State::Input(prompt);
                    break;
                }
                Ok(Flow::Sleep(duration)) => {
                    self.pc = number + 1;
                    self.events.push_back(Event::Sleep(duration));
                    break;
                }
                Ok(Flow::Halt(halt)) => {
                    self.halt(halt);
                    break;
                }
                Err(error) => {
                    let error = error.in_line_number(number);
                    tracing::debug!(%error, "run failed");
                    self.state = State::Idle;
                    self.events.push_back(Event::Error(error));
                    break;
                }
            }
        }
        match self.next_event() {
            Some(event) => event,
            None => match self.state {
                State::Idle => Event::Stopped,
                State::Input(ref prompt) => Event::Input(prompt.clone()),
                State::Running => Event::Running,
            },
        }
    }

    fn next_event(&mut self) -> Option<Event> {
        if !self.print_buffer.is_empty() {
            return Some(Event::Print(std::mem::take(&mut self.print_buffer)));
        }
        self.events.pop_front()
    }

    fn halt(&mut self, halt: Halt) {
        tracing::debug!(?halt, "halt");
        self.state = State::Idle;
        self.events.push_back(Event::Halted(halt));
    }

    fn dispatch(&mut self, line: &Line) -> Result<Flow> {
        if line.is_empty() {
            return Ok(Flow::Continue);
        }
        let mut fields = line.fields().skip(1);
        let keyword = fields.next().unwrap_or_default();
        let option = fields.next().unwrap_or_default();
        let value = fields.next().unwrap_or_default();

        if self.tr && self.input_resume.is_none() {
            self.print_buffer.push_str(&format!("TRACE: line [{}]\n", line));
        }
        tracing::trace!(line = line.number(), keyword, "dispatch");

        let number = line.number();
        if number == 0 {
            return Err(error!(LineNumberOutOfRange));
        }
        let keyword = match Keyword::from_str(keyword) {
            Some(keyword) => keyword,
            None => return Err(error!(SyntaxError)),
        };
        use Keyword::*;
        match keyword {
            End => Ok(Flow::Halt(Halt::End(number))),
            Exit => Ok(Flow::Halt(Halt::Exit)),
            Stop => Ok(Flow::Halt(Halt::Stop(number))),
            Rem => Ok(Flow::Continue),
            Dim => self.dim(option),
            Goto => self.goto(option),
            Gosub => self.gosub(number, option),
            Return => self.r#return(),
            Sleep => self.sleep(option),
            Delay => self.delay(option),
            Clear => {
                self.var.clear();
                Ok(Flow::Continue)
            }
            Let => self.r#let(line),
            Print => self.print(line),
            Input => self.input_statement(line),
            If => self.r#if(line),
            For => self.r#for(line),
            Next => self.next(line),
            FileOpen => self.fileopen(option, value),
            FileClose => self.fileclose(),
            FileWrite => self.filewrite(line),
            FileRead => self.fileread(line),
        }
    }
}
