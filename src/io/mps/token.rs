//! # Tokens used in MPS files

/// Indicates the start of a comment.
pub const COMMENT_INDICATOR: &str = "*";

/// Should be on the start of the first line of the non comment lines.
pub const NAME: &str = "NAME";

/// Section header.
pub const ROWS: &str = "ROWS";
/// Section header.
pub const COLUMNS: &str = "COLUMNS";
/// Section header.
pub const RHS: &str = "RHS";
/// Section header, the section is optional.
pub const RANGES: &str = "RANGES";
/// Section header, the section is optional.
pub const BOUNDS: &str = "BOUNDS";

/// Denotes the end of the file.
///
/// # Note
///
/// Notice the odd spelling.
pub const ENDATA: &str = "ENDATA";

/// Name of the cost row.
pub const COST_ROW: &str = "COST";

/// Name of the single right-hand side vector.
pub const RHS_NAME: &str = "RHS";

/// Name of the single range vector.
pub const RANGE_NAME: &str = "RANGE";

/// Name of the single bound vector.
pub const BOUND_NAME: &str = "BOUND";

/// Name in the first field of a marker line.
pub const MARKER_NAME: &str = "MARKER";

/// Indicates a line denoting a change in variable type.
///
/// This change is either from continuous to integer, or vice versa.
///
/// # Note
///
/// This token is expected only in the COLUMN section.
pub const COLUMN_SECTION_MARKER: &str = "'MARKER'";

/// Marks the start of the integer variables.
///
/// # Note
///
/// Expected only on a line with a `COLUMN_SECTION_MARKER`.
pub const START_OF_INTEGER: &str = "'INTORG'";

/// Indicates the end of the integer variables.
///
/// More data for continuous variables may follow.
///
/// # Note
///
/// Expected only on a line with a `COLUMN_SECTION_MARKER`.
pub const END_OF_INTEGER: &str = "'INTEND'";
