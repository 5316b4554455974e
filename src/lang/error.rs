use super::LineNumber;

#[derive(Clone, PartialEq)]
pub struct Error {
    code: ErrorCode,
    line_number: Option<LineNumber>,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, $line:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_line_number($line)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, $line:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            line_number: None,
            message: String::new(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn line_number(&self) -> Option<LineNumber> {
        self.line_number
    }

    pub fn in_line_number(self, line: LineNumber) -> Error {
        debug_assert!(self.line_number.is_none());
        Error {
            line_number: Some(line),
            ..self
        }
    }

    pub fn message(self, message: &str) -> Error {
        debug_assert!(self.message.is_empty());
        Error {
            message: message.to_string(),
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    SyntaxError,
    BadCharInLineNumber,
    OutOfMemory,
    BufferEmpty,
    LineNumberOutOfRange,
    LineNotFound,
    LineBufferOverflow,
    FileNotFound,
    ReadError,
    CreateError,
    CorruptProgram,
    ArrayRedimension,
    ArraySizeError,
    DimNoAction,
    ArrayTooBig,
    StackFull,
    ReturnWithoutGosub,
    BadFormat,
    BadExpression,
    BadArray,
    ArrayIndexTooLarge,
    UnknownVariable,
    NextWithoutFor,
    UnexpectedNext,
    FileOpenUsage,
    LoadUsage,
    SaveUsage,
    FlistUsage,
    DeleteUsage,
    FileAlreadyOpen,
    BadFileMode,
    FileNotOpen,
    NoFileOpenForWrite,
    NoFileOpenForRead,
    UnterminatedString,
    UnterminatedLine,
    UnterminatedQuotes,
    ExpressionEmpty,
    MissingParen,
    ArrayBounds,
    DivisionByZero,
    UnknownOperand,
    IndexMustBeVariable,
    LogicalEval,
    DirectoryError,
    InternalError,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        use ErrorCode::*;
        match self {
            SyntaxError => "syntax error",
            BadCharInLineNumber => "bad char in line number",
            OutOfMemory => "out of memory",
            BufferEmpty => "buffer is empty",
            LineNumberOutOfRange => "line number is out of range",
            LineNotFound => "line not found",
            LineBufferOverflow => "line buffer overflow",
            FileNotFound => "file not found",
            ReadError => "error reading file",
            CreateError => "error creating file",
            CorruptProgram => "basic file is corrupt",
            ArrayRedimension => "array re-dimension",
            ArraySizeError => "array size error",
            DimNoAction => "dim: no action taken",
            ArrayTooBig => "array too big",
            StackFull => "stack full",
            ReturnWithoutGosub => "return without gosub",
            BadFormat => "bad format",
            BadExpression => "bad expression",
            BadArray => "bad array",
            ArrayIndexTooLarge => "array index too large",
            UnknownVariable => "unknown variable",
            NextWithoutFor => "next without for",
            UnexpectedNext => "unexpected next error",
            FileOpenUsage => "usage: fileopen filename Rr/Ww/Aa",
            LoadUsage => "usage: load filename",
            SaveUsage => "usage: save filename",
            FlistUsage => "usage: flist filename",
            DeleteUsage => "usage: delete filename",
            FileAlreadyOpen => "file already open",
            BadFileMode => "bad mode in fileopen",
            FileNotOpen => "file not open",
            NoFileOpenForWrite => "no file open for write",
            NoFileOpenForRead => "no file open for read",
            UnterminatedString => "unterminated string",
            UnterminatedLine => "unterminated line",
            UnterminatedQuotes => "unterminated quotes",
            ExpressionEmpty => "expression empty",
            MissingParen => "missing closing )",
            ArrayBounds => "array bounds error",
            DivisionByZero => "divide by zero error",
            UnknownOperand => "unknown operand error",
            IndexMustBeVariable => "index to array must be a variable",
            LogicalEval => "logical eval error",
            DirectoryError => "directory error",
            InternalError => "unexpected error",
        }
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.code.as_str())?;
        if let Some(line_number) = self.line_number {
            write!(f, " in line {}", line_number)?;
        }
        if !self.message.is_empty() {
            write!(f, "; {}", self.message)?;
        }
        Ok(())
    }
}
