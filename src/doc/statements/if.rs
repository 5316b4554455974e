/*!
# `IF <condition> {THEN|GOTO|GOSUB} <line number>`
# `IF <condition> {RETURN|STOP}`

## Purpose
Transfers control when the condition is true.

## Remarks
The condition is exactly `left operator right` with no spaces.
The left side is a variable or `@(v)` indexed by a variable; the
right side is a number or a variable.

| Operator | True when |
|---|---|
| `=` | equal |
| `#` | not equal |
| `<` | less |
| `>` | greater |
| `&` `\|` `^` | the bitwise result is not zero |

## Example
```text
10 LET A=5
20 IF A=5 THEN 40
30 PRINT "NO"
40 PRINT "YES"
```

*/
