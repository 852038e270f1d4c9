//! Default file locations and the fixed layout of the action table.

/// Definitions document read when no `--input` is given.
pub const DEFAULT_INPUT: &str = "AgentLabDefsPS2.json";

/// Definition file written when no `--output` is given.
pub const DEFAULT_OUTPUT: &str = "AgentLab/ActionDefinitionsPs2.lab";

/// Output path value that sends the definitions to stdout.
pub const STDOUT_MARKER: &str = "-";

/// Number of action slots in the table. Size entries past this are ignored.
pub const ACTION_SLOTS: usize = 1024;

/// Largest command size accepted. Anything bigger is a corrupt table.
pub const MAX_COMMAND_SIZE: i64 = 0xFFFF;

/// Bytes of fixed header included in every command size.
pub const HEADER_SIZE: i64 = 0xC;

/// Width of one parameter slot in bytes.
pub const PARAM_WIDTH: i64 = 4;
