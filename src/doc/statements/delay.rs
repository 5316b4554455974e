/*!
# `DELAY <milliseconds>`

## Purpose
Pauses the program for a number of milliseconds.

## Remarks
The argument is a literal number or a single variable.
Zero or a negative value does nothing.

## Example
```text
10 LET D=250
20 DELAY D
```

*/
