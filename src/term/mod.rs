extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
use crate::lang::{Error, ErrorCode, LineNumber};
use crate::mach::{Event, Halt, Listing, Runtime};
use crate::error;
use ansi_term::Style;
use linefeed::{Interface, ReadResult, Signal, Terminal};
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

const PROMPT: &str = "Ok> ";

pub fn main() {
    init_tracing();
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    if let Err(error) = ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    }) {
        eprintln!("{}", error);
    }
    if let Err(error) = main_loop(interrupted, std::env::args().nth(1)) {
        eprintln!("{}", error);
    }
}

/// Diagnostics go to stderr only when `RUST_LOG` asks for them.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn main_loop(interrupted: Arc<AtomicBool>, filename: Option<String>) -> std::io::Result<()> {
    let mut runtime = Runtime::default();
    let command = Interface::new("BASIC")?;
    command.set_prompt(PROMPT)?;
    let input = Interface::new("INPUT")?;
    input.set_report_signal(Signal::Interrupt, true);

    command.write_fmt(format_args!(
        "Tiny BASIC\n{} bytes free\n",
        runtime.listing().free()
    ))?;
    if let Some(filename) = filename {
        let started = load(&filename, runtime.config().buffer_size)
            .and_then(|listing| {
                runtime.set_listing(listing);
                runtime.run(None)
            });
        if let Err(error) = started {
            print_error(&command, &error)?;
        }
    }

    let mut line_start = true;
    loop {
        if interrupted.swap(false, Ordering::SeqCst) && runtime.is_running() {
            runtime.interrupt();
        }
        match runtime.execute(5000) {
            Event::Stopped => {
                let string = match command.read_line()? {
                    ReadResult::Input(string) => string,
                    ReadResult::Signal(_) | ReadResult::Eof => break,
                };
                if string.trim().is_empty() {
                    continue;
                }
                command.add_history_unique(string.clone());
                match do_command(&command, &mut runtime, &string) {
                    Ok(true) => {}
                    Ok(false) => break,
                    Err(error) => print_error(&command, &error)?,
                }
            }
            Event::Input(prompt) => {
                input.set_prompt(&prompt)?;
                match input.read_line()? {
                    ReadResult::Input(string) => runtime.input(&string),
                    ReadResult::Signal(Signal::Interrupt) => {
                        input.set_buffer("")?;
                        runtime.interrupt();
                    }
                    ReadResult::Signal(_) | ReadResult::Eof => break,
                }
                line_start = true;
            }
            Event::Running => {}
            Event::Print(s) => {
                line_start = s.ends_with('\n');
                command.write_fmt(format_args!("{}", s))?;
            }
            Event::Sleep(duration) => std::thread::sleep(duration),
            Event::Error(error) => {
                if !line_start {
                    command.write_fmt(format_args!("\n"))?;
                    line_start = true;
                }
                print_error(&command, &error)?;
            }
            Event::Halted(Halt::Exit) => break,
            Event::Halted(halt) => {
                if !line_start {
                    command.write_fmt(format_args!("\n"))?;
                    line_start = true;
                }
                let message = halt.to_string();
                if !message.is_empty() {
                    command.write_fmt(format_args!("{}\n", message))?;
                }
            }
        }
    }
    Ok(())
}

fn print_error<T: Terminal>(interface: &Interface<T>, error: &Error) -> std::io::Result<()> {
    interface.write_fmt(format_args!(
        "{}\n",
        Style::new().bold().paint(error.to_string())
    ))
}

/// One line typed at the prompt. `Ok(false)` asks the loop to quit.
fn do_command<T: Terminal>(
    interface: &Interface<T>,
    runtime: &mut Runtime,
    line: &str,
) -> Result<bool, Error> {
    if line.trim_start().starts_with(|c: char| c.is_ascii_digit()) {
        runtime.enter(line.trim_start())?;
        return Ok(true);
    }
    let mut words = line.split_whitespace();
    let cmd = words.next().unwrap_or_default().to_ascii_lowercase();
    let arg = words.next().unwrap_or_default();
    let out = |s: &str| {
        interface
            .write_fmt(format_args!("{}", s))
            .map_err(|e| error!(InternalError; &e.to_string()))
    };
    match cmd.as_str() {
        "exit" => return Ok(false),
        "run" => {
            let start = match arg {
                "" => None,
                arg => match arg.parse::<LineNumber>() {
                    Ok(number) => Some(number),
                    Err(_) => return Err(error!(LineNumberOutOfRange)),
                },
            };
            runtime.run(start)?;
        }
        "trace" => {
            if runtime.toggle_trace() {
                out("Trace ON\n")?;
            } else {
                out("Trace OFF\n")?;
            }
        }
        "list" => out(&runtime.listing().to_string())?,
        "new" => runtime.new_program(),
        "dump" => out(&dump(&runtime.listing().to_bytes()))?,
        "mem" | "size" => out(&format!(
            "Basic Program Storage: {} bytes free\n",
            runtime.listing().free()
        ))?,
        "load" => {
            if arg.is_empty() {
                return Err(error!(LoadUsage));
            }
            let listing = load(arg, runtime.config().buffer_size)?;
            runtime.set_listing(listing);
        }
        "save" => {
            if arg.is_empty() {
                return Err(error!(SaveUsage));
            }
            save(runtime.listing(), arg)?;
        }
        "flist" => {
            if arg.is_empty() {
                return Err(error!(FlistUsage));
            }
            let text = std::fs::read_to_string(arg)
                .map_err(|e| error!(ReadError; &e.to_string()))?;
            out(&text)?;
        }
        "dir" => out(&dir()?)?,
        "delete" => {
            if arg.is_empty() {
                return Err(error!(DeleteUsage));
            }
            std::fs::remove_file(arg).map_err(|e| error!(FileNotFound; &e.to_string()))?;
        }
        _ => return Err(error!(SyntaxError)),
    }
    Ok(true)
}

/// Hex and ASCII, sixteen bytes per row, short rows zero padded.
pub fn dump(bytes: &[u8]) -> String {
    let mut s = String::new();
    for (row, chunk) in bytes.chunks(16).enumerate() {
        s.push_str(&format!("{:04X}  ", row * 16));
        for n in 0..16 {
            s.push_str(&format!("{:02X} ", chunk.get(n).copied().unwrap_or(0)));
        }
        s.push_str("  ");
        for n in 0..16 {
            match chunk.get(n) {
                Some(&b) if b.is_ascii_graphic() || b == b' ' => s.push(char::from(b)),
                _ => s.push('.'),
            }
        }
        s.push('\n');
    }
    s.push('\n');
    s
}

fn dir() -> Result<String, Error> {
    let entries = std::fs::read_dir(".").map_err(|e| error!(DirectoryError; &e.to_string()))?;
    let mut names = vec![];
    for entry in entries {
        let entry = entry.map_err(|e| error!(DirectoryError; &e.to_string()))?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    names.sort();
    let mut s = String::from("\n");
    for name in names {
        s.push_str(&name);
        s.push('\n');
    }
    Ok(s)
}

fn load(filename: &str, capacity: usize) -> Result<Listing, Error> {
    let mut listing = Listing::new(capacity);
    let reader = match File::open(filename) {
        Ok(file) => BufReader::new(file),
        Err(error) => {
            let msg = error.to_string();
            match error.kind() {
                ErrorKind::NotFound => return Err(error!(FileNotFound; msg.as_str())),
                _ => return Err(error!(ReadError; msg.as_str())),
            }
        }
    };
    for (index, line) in reader.lines().enumerate() {
        match line {
            Err(error) => return Err(error!(ReadError; error.to_string().as_str())),
            Ok(line) => {
                if let Err(error) = listing.load_str(&line) {
                    let context = load_context(error.code(), index + 1);
                    return Err(error.message(&context));
                }
            }
        }
    }
    Ok(listing)
}

fn load_context(code: ErrorCode, line: usize) -> String {
    match code {
        ErrorCode::SyntaxError
        | ErrorCode::LineNumberOutOfRange
        | ErrorCode::BadCharInLineNumber => {
            format!("in line {} of the file (not a BASIC line number)", line)
        }
        _ => format!("in line {} of the file", line),
    }
}

fn save(listing: &Listing, filename: &str) -> Result<(), Error> {
    if listing.is_empty() {
        return Err(error!(BufferEmpty));
    }
    let mut file = match File::create(filename) {
        Ok(file) => file,
        Err(error) => return Err(error!(CreateError; error.to_string().as_str())),
    };
    if let Err(error) = file.write_all(&listing.to_bytes()) {
        return Err(error!(CreateError; error.to_string().as_str()));
    }
    Ok(())
}
