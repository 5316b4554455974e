/*!
# `FILEOPEN <filename> <mode>`

## Purpose
Opens a data file for `FILEREAD` or `FILEWRITE`.

## Remarks
Mode is `R` to read, `W` to create or truncate, or `A` to append.
Only one file can be open at a time. Quote the filename to keep
its case.

## Example
```text
10 FILEOPEN "scores.dat" W
```

*/
