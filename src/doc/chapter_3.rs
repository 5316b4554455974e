/*!
# Functions

A function stands for the whole expression it appears in. If `ABS(`
or `RANDOM()` occurs anywhere in an expression, everything else in
that expression is ignored.
*/

pub mod ABS {
    /*!
    ## `ABS(x)` Returns the absolute value of the variable x.
    The argument must be a single variable written in lower case.
    ```text
    10 LET X=-12
    20 LET Y=ABS(x)
    30 PRINT Y
    RUN
    12
    ```
    */
}

pub mod RANDOM {
    /*!
    ## `RANDOM()` Returns a random integer from 0 to 2147483647.
    Anything else in the expression is ignored, so arithmetic on the
    result goes in a separate `LET`.
    ```text
    10 LET R=RANDOM()
    20 LET D=R%6+1
    30 PRINT D
    ```
    */
}
