use once_cell::sync::Lazy;
use regex::Regex;

// Lines are trimmed before matching, so every pattern is anchored at both ends.

pub(super) static CONST_DEF: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^def\s+([_A-Z][_A-Za-z0-9]*)\s*:=\s*(\S.*)$").expect("valid const-def pattern")
});

pub(super) static NAMED_OPEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([_a-zA-Z0-9]+)\s*->\s*\{$").expect("valid named-open pattern")
});

// Greedy capture: the last period on the line is the terminator.
pub(super) static ENTRY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([_a-zA-Z0-9]+)\s*->\s*(\S+)\.$").expect("valid entry pattern")
});
