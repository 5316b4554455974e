/*!
# Statements
*/

#[path = "statements/clear.rs"]
#[allow(non_snake_case)]
pub mod CLEAR;

#[path = "statements/delay.rs"]
#[allow(non_snake_case)]
pub mod DELAY;

#[path = "statements/dim.rs"]
#[allow(non_snake_case)]
pub mod DIM;

#[path = "statements/end.rs"]
#[allow(non_snake_case)]
pub mod END;

#[path = "statements/exit.rs"]
#[allow(non_snake_case)]
pub mod EXIT;

#[path = "statements/fileclose.rs"]
#[allow(non_snake_case)]
pub mod FILECLOSE;

#[path = "statements/fileopen.rs"]
#[allow(non_snake_case)]
pub mod FILEOPEN;

#[path = "statements/fileread.rs"]
#[allow(non_snake_case)]
pub mod FILEREAD;

#[path = "statements/filewrite.rs"]
#[allow(non_snake_case)]
pub mod FILEWRITE;

#[path = "statements/for.rs"]
#[allow(non_snake_case)]
pub mod FOR;

#[path = "statements/gosub.rs"]
#[allow(non_snake_case)]
pub mod GOSUB;

#[path = "statements/goto.rs"]
#[allow(non_snake_case)]
pub mod GOTO;

#[path = "statements/if.rs"]
#[allow(non_snake_case)]
pub mod IF;

#[path = "statements/input.rs"]
#[allow(non_snake_case)]
pub mod INPUT;

#[path = "statements/let.rs"]
#[allow(non_snake_case)]
pub mod LET;

#[path = "statements/next.rs"]
#[allow(non_snake_case)]
pub mod NEXT;

#[path = "statements/print.rs"]
#[allow(non_snake_case)]
pub mod PRINT;

#[path = "statements/rem.rs"]
#[allow(non_snake_case)]
pub mod REM;

#[path = "statements/return.rs"]
#[allow(non_snake_case)]
pub mod RETURN;

#[path = "statements/sleep.rs"]
#[allow(non_snake_case)]
pub mod SLEEP;

#[path = "statements/stop.rs"]
#[allow(non_snake_case)]
pub mod STOP;
