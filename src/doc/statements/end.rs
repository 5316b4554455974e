/*!
# `END`

## Purpose
Stops the program and reports the line it ended on.

## Example
```text
10 PRINT "DONE"
20 END
RUN
DONE
end at line 20
```

*/
