/*!
# `PRINT [<item>[{,|;}<item>...]]`

## Purpose
Writes quoted text, variables, array elements and expression
results to the terminal.

## Remarks
A comma writes three spaces and a semicolon writes nothing.
A line ending in a semicolon does not end the output line.

## Example
```text
10 LET A=4
20 PRINT "A=";A,A*A
RUN
A=4   16
```

*/
