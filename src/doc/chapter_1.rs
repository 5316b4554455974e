/*!
# Expressions and Variables

There are 26 integer variables `a` to `z`. They are signed 32-bit and
wrap around on overflow. There are also 26 text variables `a$` to `z$`
each holding up to one line of text, and a single integer array `@()`
created with `DIM`.

Expressions are evaluated strictly left to right. There is no
operator precedence and no parentheses for grouping.

```text
10 PRINT 2+3*4
RUN
20
```

| Operator | Meaning |
|---|---|
| `+` `-` `*` `/` | Arithmetic. Division truncates toward zero. |
| `%` | Remainder. |
| `&` `\|` `^` | Bitwise and, or, exclusive or. |
| `E` | Power, so `2E3` is 8. `X E 0` is 1, where some Tiny BASICs give `X`. |
| `~` | Complement of everything to its left. |

A minus sign in front of a value negates that value only.

```text
10 PRINT -2+5
RUN
3
```

Dividing by zero is a `divide by zero error`. An expression ends at a
comma, a space, or the end of the line.

Array elements are written `@(n)` or `@(v)` where the index is a number
or a single variable.

Letters inside parentheses keep the case they were typed in, and only
lower case names are variables. Write `@(i)` and `ABS(x)`, not `@(I)`.

*/
