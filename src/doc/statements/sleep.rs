/*!
# `SLEEP <seconds>`

## Purpose
Pauses the program for a whole number of seconds.

*/
