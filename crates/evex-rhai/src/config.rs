use std::time::Duration;

/// Limits applied to every evaluate/execute call.
///
/// The defaults are conservative enough for interactive use; hosts feeding
/// the provider untrusted input should tighten them further.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Maximum wall-clock duration for a single call.
    pub timeout: Duration,
    /// Maximum number of operations the engine may perform; 0 is unlimited.
    pub max_operations: u64,
    /// Maximum call stack depth.
    pub max_call_levels: usize,
    /// Maximum expression nesting depth.
    pub max_expr_depth: usize,
    /// Maximum nesting depth inside function bodies.
    pub max_function_expr_depth: usize,
    /// Maximum size of any string value.
    pub max_string_size: usize,
    /// Maximum length of any array.
    pub max_array_size: usize,
    /// Maximum number of entries in any map.
    pub max_map_size: usize,
    /// Maximum number of variables in scope.
    pub max_variables: usize,
    /// Maximum number of script-defined functions.
    pub max_functions: usize,
    /// Maximum number of modules a script may load.
    pub max_modules: usize,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            max_operations: 2_000_000,
            max_call_levels: 64,
            max_expr_depth: 64,
            max_function_expr_depth: 32,
            max_string_size: 1_000_000,
            max_array_size: 100_000,
            max_map_size: 100_000,
            max_variables: 10_000,
            max_functions: 1_000,
            max_modules: 8,
        }
    }
}
