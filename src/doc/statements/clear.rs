/*!
# `CLEAR`

## Purpose
Sets every integer variable to zero, empties every text variable,
and frees the array.

## Remarks
`DIM` may be used again after `CLEAR`.

## Example
```text
10 LET A=5
20 CLEAR
30 PRINT A
RUN
0
```

*/
