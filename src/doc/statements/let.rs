/*!
# `LET <target>=<expression>[,<target>=<expression>...]`

## Purpose
Assigns values to variables and array elements.

## Remarks
The word `LET` is required. Targets are `A` to `Z`, `@(index)`, or a
text variable `A$` to `Z$` which takes a quoted string. The index of
`@()` is written in lower case.

## Example
```text
10 DIM 10
20 LET A=3,B=A*2
30 LET @(b)=A
40 LET N$="HELLO"
50 PRINT @(b)
60 PRINT N$
RUN
3
HELLO
```

*/
