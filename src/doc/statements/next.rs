/*!
# `NEXT <variable>`

## Purpose
Steps the variable of the active `FOR` and loops back while it is
still within the bound.

## Remarks
The variable must match the `FOR`, otherwise `next without for`.

*/
