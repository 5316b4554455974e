#![allow(dead_code)]
use basic::mach::{Event, Halt, Runtime};

pub fn exec(runtime: &mut Runtime) -> String {
    exec_n(runtime, 5000)
}

pub fn exec_n(runtime: &mut Runtime, cycles: usize) -> String {
    let mut s = String::new();
    let mut prev_running = false;
    loop {
        let event = runtime.execute(cycles);
        match &event {
            Event::Stopped => {
                break;
            }
            Event::Error(error) => {
                s.push_str(&format!("{}\n", error));
            }
            Event::Running => {
                if prev_running {
                    s.push_str(&format!("\n{} Execution cycles exceeded.\n", cycles));
                    break;
                }
            }
            Event::Print(ps) => {
                s.push_str(&ps);
            }
            Event::Input(ps) => {
                s.push_str(&ps);
                break;
            }
            Event::Sleep(_) => {}
            Event::Halted(Halt::Normal) | Event::Halted(Halt::Exit) => {}
            Event::Halted(halt) => {
                s.push_str(&format!("{}\n", halt));
            }
        }
        match event {
            Event::Running => prev_running = true,
            _ => prev_running = false,
        }
    }
    s
}

/// Enter every line, then run from the start.
pub fn run_program(runtime: &mut Runtime, lines: &[&str]) -> String {
    for line in lines {
        if let Err(error) = runtime.enter(line) {
            return format!("{}\n", error);
        }
    }
    if let Err(error) = runtime.run(None) {
        return format!("{}\n", error);
    }
    exec(runtime)
}
