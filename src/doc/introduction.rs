/*!
# Introduction

Tiny BASIC keeps your program as plain numbered lines and reads each
line again every time it runs. Type a line starting with a number to
store it. Typing the same number replaces the line and typing the
number alone deletes it. Line numbers run from 1 to 32767 and lines
are kept in order no matter how they are typed.

Everything outside quotes and parentheses is folded to lowercase when
a line is stored, so `PRINT` and `print` are the same statement.

## Commands

Commands are typed at the `Ok>` prompt without a line number.

| Command | Action |
|---|---|
| `run [n]` | Run from the start, clearing all variables. With a line number, continue there and keep them. |
| `list` | Show the program. |
| `new` | Erase the program and variables. |
| `trace` | Toggle printing `TRACE: line [...]` before each line runs. |
| `dump` | Hex dump of the stored program text. |
| `mem` or `size` | Show free program storage. |
| `load <file>` | Replace the program with one from disk. |
| `save <file>` | Write the program to disk exactly as `list` shows it. |
| `flist <file>` | Show any file. |
| `dir` | List the current directory. |
| `delete <file>` | Remove a file. |
| `exit` | Leave. |

Pressing Ctrl-C stops a running program with `break in line n`.

Run the executable with a file name to load and run it immediately.

*/
