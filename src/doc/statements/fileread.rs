/*!
# `FILEREAD <variable>[,<variable>...]`

## Purpose
Reads integers from the open file into variables.

## Remarks
Each number is a run of digits, optionally led by `-`, ended by any
single other character. Two separators in a row read as a 0.
When the file has nothing left the variable is set to -1 and
the rest of the list is skipped.

## Example
```text
10 FILEOPEN "scores.dat" R
20 FILEREAD A,B
30 IF A=-1 THEN 60
40 PRINT A;" ";B
50 GOTO 20
60 FILECLOSE
```

*/
