use tracing::debug;

/// Filler phrases stripped from a transcript before symbol substitution.
///
/// Removed in order, each as a global substring removal ("equals" must come
/// before "equal" so both forms are consumed).
const FILLERS: [&str; 5] = ["what is", "calculate", "equals", "equal", "what's"];

/// Spoken phrase → operator symbol table.
///
/// Applied in order, each as a global substring substitution. The order is
/// authoritative: "divided by" must fire before "divide", and "multiplied by"
/// sits after "multiply" because neither is a substring of the other.
const REPLACEMENTS: [(&str, &str); 16] = [
    ("plus", "+"),
    ("add", "+"),
    ("and", "+"),
    ("minus", "-"),
    ("subtract", "-"),
    ("take away", "-"),
    ("times", "*"),
    ("multiply", "*"),
    ("multiplied by", "*"),
    ("x", "*"),
    ("divided by", "/"),
    ("divide", "/"),
    ("over", "/"),
    ("percent", "/100"),
    ("squared", "**2"),
    ("cubed", "**3"),
];

/// Rewrite a raw transcript into a compact arithmetic expression string.
///
/// Lower-cases the transcript, strips filler phrases, applies the
/// phrase→symbol table, and trims surrounding whitespace. Matches are plain
/// substrings, not whole words, so a rule like "x" → "*" also fires inside
/// words the table does not know ("expand" comes out as "e*p+"). Unrecognized
/// tokens pass through untouched and are rejected by the evaluator, not here.
pub fn normalize(transcript: &str) -> String {
    let mut text = transcript.to_lowercase();

    for filler in FILLERS {
        text = text.replace(filler, "");
    }

    for (phrase, symbol) in REPLACEMENTS {
        text = text.replace(phrase, symbol);
    }

    let normalized = text.trim().to_string();
    debug!("Normalized {:?} -> {:?}", transcript, normalized);

    normalized
}
