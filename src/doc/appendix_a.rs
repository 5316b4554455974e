/*!
# Error Messages

Errors stop the program and print the message with the line number,
for example `divide by zero error in line 30`.

| Message | Cause |
|---|---|
| syntax error | Unknown statement or a malformed target. |
| bad char in line number | A line number with letters in it, or an item `FILEWRITE`/`FILEREAD` can't take. |
| out of memory | The program store is full. |
| buffer is empty | `run` with no program. |
| line number is out of range | Outside 1 to 32767. |
| line not found | `GOTO`, `GOSUB`, `IF` or `run n` to a missing line. |
| line buffer overflow | A line longer than 80 characters. |
| file not found | `FILEOPEN`, `load` or `delete` couldn't open the file. |
| basic file is corrupt | The stored program holds a NUL byte. |
| array re-dimension | A second `DIM` in one run. |
| array size error | `DIM` larger than 65536 or not a number. |
| dim: no action taken | `DIM` smaller than 1. |
| array too big | An index longer than 15 characters in `LET`. |
| array index too large | `LET @(n)` outside the array. |
| array bounds error | Reading `@(n)` outside the array. |
| stack full | More than ten nested `GOSUB`s. |
| return without gosub | `RETURN` with no `GOSUB` pending. |
| next without for | `NEXT` doesn't match the active `FOR`. |
| divide by zero error | `/` or `%` by zero. |
| logical eval error | An `IF` condition that isn't `variable operator value`. |
| usage: fileopen filename Rr/Ww/Aa | `FILEOPEN` without a mode. |
| file already open | `FILEOPEN` with a file already open. |
| no file open for write | `FILEWRITE` without a file opened `W` or `A`. |
| no file open for read | `FILEREAD` without a file opened `R`. |

*/
