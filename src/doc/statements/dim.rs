/*!
# `DIM <size>`

## Purpose
Creates the array `@()` with `<size>` elements, numbered from 0.

## Remarks
There is only one array and it can be dimensioned once per run.
A second `DIM` is an `array re-dimension` error until `CLEAR`,
`NEW` or `RUN`. A size below 1 does nothing and reports
`dim: no action taken`. The largest size is 65536.

## Example
```text
10 DIM 5
20 LET @(2)=9
30 PRINT @(2)
RUN
9
```

*/
