#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Keyword {
    Clear,
    Delay,
    Dim,
    End,
    Exit,
    FileClose,
    FileOpen,
    FileRead,
    FileWrite,
    For,
    Gosub,
    Goto,
    If,
    Input,
    Let,
    Next,
    Print,
    Rem,
    Return,
    Sleep,
    Stop,
}

impl Keyword {
    pub fn from_str(s: &str) -> Option<Keyword> {
        use Keyword::*;
        Some(match s {
            "clear" => Clear,
            "delay" => Delay,
            "dim" => Dim,
            "end" => End,
            "exit" => Exit,
            "fileclose" => FileClose,
            "fileopen" => FileOpen,
            "fileread" => FileRead,
            "filewrite" => FileWrite,
            "for" => For,
            "gosub" => Gosub,
            "goto" => Goto,
            "if" => If,
            "input" => Input,
            "let" => Let,
            "next" => Next,
            "print" => Print,
            "rem" => Rem,
            "return" => Return,
            "sleep" => Sleep,
            "stop" => Stop,
            _ => return None,
        })
    }

    pub fn as_str(self) -> &'static str {
        use Keyword::*;
        match self {
            Clear => "clear",
            Delay => "delay",
            Dim => "dim",
            End => "end",
            Exit => "exit",
            FileClose => "fileclose",
            FileOpen => "fileopen",
            FileRead => "fileread",
            FileWrite => "filewrite",
            For => "for",
            Gosub => "gosub",
            Goto => "goto",
            If => "if",
            Input => "input",
            Let => "let",
            Next => "next",
            Print => "print",
            Rem => "rem",
            Return => "return",
            Sleep => "sleep",
            Stop => "stop",
        }
    }
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_str().to_ascii_uppercase())
    }
}
