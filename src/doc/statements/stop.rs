/*!
# `STOP`

## Purpose
Stops the program and reports the line it stopped on.

## Remarks
`RUN <line number>` continues with every variable intact.

*/
