/*!
# `FILEWRITE <item>[{,|;}<item>...]`

## Purpose
Writes variables, text variables, array elements and quoted text
to the open file, using the same separators as `PRINT`.

## Remarks
Numeric literals and expressions are not accepted; store them in a
variable first.

## Example
```text
10 FILEOPEN "scores.dat" W
20 LET A=7
30 FILEWRITE A
40 FILECLOSE
```

*/
