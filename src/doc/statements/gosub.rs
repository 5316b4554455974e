/*!
# `GOSUB <line number>`

## Purpose
Jumps to a subroutine, remembering the line after the `GOSUB`.

## Remarks
Subroutines nest ten deep; the eleventh is a `stack full` error.
`RETURN` goes back.

## Example
```text
10 GOSUB 100
20 END
100 PRINT "IN SUB"
110 RETURN
```

*/
