/*!
# `REM <comment>`

## Purpose
Ignored by the interpreter.

*/
