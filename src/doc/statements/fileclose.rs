/*!
# `FILECLOSE`

## Purpose
Closes the file opened by `FILEOPEN`, writing out anything buffered.

## Remarks
Closing when nothing is open is a `file not open` error.

*/
