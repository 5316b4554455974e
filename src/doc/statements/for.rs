/*!
# `FOR <variable>=x TO y [STEP z]`
Where x, y, and z are expressions.
## Purpose
Used with `NEXT` to repeat the lines between them while counting.

## Remarks
The variable is assigned x, then y and z are evaluated.
A step of 0 counts by 1.
The body always runs at least once.

Loops do not nest. A second `FOR` replaces the first, so the
outer `NEXT` then reports `next without for`.

## Example
```text
10 FOR N=1 TO 5 STEP 2
20 PRINT N
30 NEXT N
RUN
1
3
5
```

*/
