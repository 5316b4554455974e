/*!
# `RETURN`

## Purpose
Continues after the most recent `GOSUB`.

## Remarks
With no `GOSUB` pending this is a `return without gosub` error.

*/
