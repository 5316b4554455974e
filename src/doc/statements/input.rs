/*!
# `INPUT ["<prompt>"] <variable>[,<variable>...]`

## Purpose
Suspends execution and awaits a response from the terminal.

## Remarks
One line is read for every variable. Integer variables take the
leading number of the reply, or 0. Text variables like `N$` take the
whole reply.

## Example
```text
10 INPUT "NAME? " N$
20 INPUT "AGE? " A
```

*/
