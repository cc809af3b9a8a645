// src/config.rs - Run configuration from command-line arguments

/// Argument prefix carrying the comma-separated function list.
pub const FUNCTIONS_FLAG: &str = "--functions=";

/// Everything a run needs, computed once at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunConfig {
    /// Function names in the order given, duplicates kept.
    pub functions: Vec<String>,
}

impl RunConfig {
    pub fn new(functions: Vec<String>) -> Self {
        Self { functions }
    }

    /// Builds the config from the process arguments.
    pub fn from_env() -> Self {
        Self::from_args(
            std::env::args_os().map(|arg| arg.to_string_lossy().into_owned()),
        )
    }

    /// Scans `args` for `--functions=<a,b,...>`.
    ///
    /// Every argument is checked in order and a later match replaces an
    /// earlier one. Anything else, `--functions` without `=` included, is
    /// ignored. An empty value gives an empty list.
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut functions = Vec::new();
        for arg in args {
            if let Some(value) = arg.as_ref().strip_prefix(FUNCTIONS_FLAG) {
                functions = split_functions(value);
            }
        }
        Self { functions }
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

fn split_functions(value: &str) -> Vec<String> {
    if value.is_empty() {
        return Vec::new();
    }
    value.split(',').map(str::to_string).collect()
}
