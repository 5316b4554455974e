mod common;
use basic::mach::{Config, Runtime};
use common::*;
use std::path::PathBuf;

fn runtime() -> Runtime {
    Runtime::new(Config {
        max_line_len: 255,
        ..Config::default()
    })
}

fn temp_path(tag: &str) -> PathBuf {
    std::env::temp_dir().join(format!("tiny_basic_{}_{}.dat", std::process::id(), tag))
}

#[test]
fn test_write_then_read() {
    let path = temp_path("write_then_read");
    let p = path.display();
    let mut r = runtime();
    let s = run_program(
        &mut r,
        &[
            &format!("10 fileopen \"{}\" w", p),
            "20 let a=12,b=34",
            "30 filewrite a",
            "40 filewrite b",
            "50 fileclose",
            &format!("60 fileopen \"{}\" r", p),
            "70 fileread x,y",
            "80 fileread z",
            "90 fileclose",
            "100 print x;\" \";y;\" \";z",
        ],
    );
    assert_eq!(s, "12 34 -1\n");
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "12\n34\n");
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_write_text_and_separators() {
    let path = temp_path("separators");
    let mut r = runtime();
    let s = run_program(
        &mut r,
        &[
            &format!("10 fileopen \"{}\" W", path.display()),
            "20 let n$=\"Bob\",a=7",
            "30 filewrite \"name \";n$,a;",
            "40 filewrite \"!\"",
            "50 fileclose",
        ],
    );
    assert_eq!(s, "");
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "name Bob   7!\n");
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_append() {
    let path = temp_path("append");
    std::fs::write(&path, "1\n").unwrap();
    let mut r = runtime();
    let s = run_program(
        &mut r,
        &[
            &format!("10 fileopen \"{}\" a", path.display()),
            "20 filewrite 2",
            "30 fileclose",
        ],
    );
    assert_eq!(s, "bad char in line number in line 20\n");
    let mut r = runtime();
    let s = run_program(
        &mut r,
        &[
            &format!("10 fileopen \"{}\" a", path.display()),
            "20 let t=2",
            "30 filewrite t",
            "40 fileclose",
        ],
    );
    assert_eq!(s, "");
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "1\n2\n");
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_read_missing_file() {
    let path = temp_path("missing");
    let mut r = runtime();
    let s = run_program(&mut r, &[&format!("10 fileopen \"{}\" r", path.display())]);
    assert!(s.starts_with("file not found in line 10"));
}

#[test]
fn test_file_state_errors() {
    let mut r = runtime();
    assert_eq!(
        run_program(&mut r, &["10 filewrite a"]),
        "no file open for write in line 10\n"
    );
    let mut r = runtime();
    assert_eq!(
        run_program(&mut r, &["10 fileread a"]),
        "no file open for read in line 10\n"
    );
    let mut r = runtime();
    assert_eq!(
        run_program(&mut r, &["10 fileclose"]),
        "file not open in line 10\n"
    );
    let mut r = runtime();
    assert_eq!(
        run_program(&mut r, &["10 fileopen \"x.dat\""]),
        "usage: fileopen filename Rr/Ww/Aa in line 10\n"
    );
    let mut r = runtime();
    assert_eq!(
        run_program(&mut r, &["10 fileopen \"x.dat\" q"]),
        "bad mode in fileopen in line 10\n"
    );
}

#[test]
fn test_open_twice() {
    let path = temp_path("twice");
    let mut r = runtime();
    let s = run_program(
        &mut r,
        &[
            &format!("10 fileopen \"{}\" w", path.display()),
            &format!("20 fileopen \"{}\" w", path.display()),
        ],
    );
    assert_eq!(s, "file already open in line 20\n");
    r.reset();
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_read_into_wrong_mode() {
    let path = temp_path("wrong_mode");
    let mut r = runtime();
    let s = run_program(
        &mut r,
        &[
            &format!("10 fileopen \"{}\" w", path.display()),
            "20 fileread a",
        ],
    );
    assert_eq!(s, "no file open for read in line 20\n");
    r.reset();
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_negative_numbers_read_back() {
    let path = temp_path("negative");
    let p = path.display();
    let mut r = runtime();
    let s = run_program(
        &mut r,
        &[
            &format!("10 fileopen \"{}\" w", p),
            "20 let a=-5,b=7",
            "30 filewrite a",
            "40 filewrite b",
            "50 fileclose",
            &format!("60 fileopen \"{}\" r", p),
            "70 fileread c,d",
            "80 fileclose",
            "90 print c;\" \";d",
        ],
    );
    assert_eq!(s, "-5 7\n");
    std::fs::remove_file(&path).unwrap();
}
