use quick_error::quick_error;
use std::io::Error as IOError;
use std::path::PathBuf;

quick_error! {
    /// Error type for all error variants originated by this crate.
    #[derive(Debug)]
    pub enum VertexAreasError {
        /// No input surface matched the discovery patterns.
        NoInputFiles {
            display("No matching input files found")
        }

        /// A surface file name does not end with the expected input suffix.
        UnexpectedSurfaceName(path: PathBuf, suffix: String) {
            display("Surface file '{}' does not end with '{}'", path.display(), suffix)
        }

        /// Glob expansion needs UTF-8 paths.
        NonUtf8Path(path: PathBuf) {
            display("Path '{}' is not valid UTF-8", path.display())
        }

        /// Invalid discovery glob pattern.
        Pattern(err: glob::PatternError) {
            from()
            display("Invalid glob pattern: {}", err)
            source(err)
        }

        /// Invalid configuration file.
        Config(err: toml::de::Error) {
            from()
            display("Invalid configuration: {}", err)
            source(err)
        }

        /// The external tool could not be started.
        ToolSpawn(program: String, err: IOError) {
            display("Failed to run '{}': {}", program, err)
            source(err)
        }

        /// The external tool ran but reported failure.
        ToolFailed(program: String, operation: String, status: Option<i32>, stderr: String) {
            display("{} {} failed (exit status {}): {}",
                program,
                operation,
                status.map(|s| s.to_string()).unwrap_or_else(|| String::from("none")),
                stderr.trim())
        }

        /// The external tool succeeded but printed nothing usable.
        MissingToolOutput(operation: String) {
            display("{} produced no usable output", operation)
        }

        /// I/O Error
        Io(err: IOError) {
            from()
            source(err)
        }
    }
}

/// Alias type for results originated from this crate.
pub type Result<T> = ::std::result::Result<T, VertexAreasError>;
