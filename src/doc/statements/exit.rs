/*!
# `EXIT`

## Purpose
Stops the program and leaves the interpreter.

*/
