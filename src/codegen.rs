//! Construction of the `gdbus-codegen` command line for Hwangsae1 interfaces
//!
//! Everything up to the actual spawn is pure: a [`GenerationRequest`] turns
//! four positional inputs into the generator's argument vector, so the
//! command-line shape can be tested without running anything.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use anyhow::{Context, Result};

/// Executable expected on the search path.
pub const GENERATOR: &str = "gdbus-codegen";

/// Namespace every Hwangsae1 D-Bus interface lives under.
pub const INTERFACE_PREFIX: &str = "org.hwangsaeul.Hwangsae1.";

/// C namespace for generated binding symbols.
pub const C_NAMESPACE: &str = "Hwangsae1DBus";

/// Annotation key that sets the C name of a generated interface.
const C_NAME_ANNOTATION: &str = "org.gtk.GDBus.C.Name";

/// One code-generation run, built from the CLI positionals.
///
/// Inputs are passed through untouched: no existence check on
/// `definition_path`, no shape check on `suffix`. The generator is the
/// authority on whether they are valid.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// Interface name suffix, e.g. `Manager` or `EdgeInterface`
    pub suffix: String,
    /// Base name of the generated C source (and matching header)
    pub output_file: String,
    /// Directory the generated code is written to
    pub output_dir: PathBuf,
    /// Path to the D-Bus interface definition XML
    pub definition_path: PathBuf,
}

impl GenerationRequest {
    /// Fully qualified D-Bus interface name for this suffix.
    pub fn interface_name(&self) -> String {
        format!("{INTERFACE_PREFIX}{}", self.suffix)
    }

    /// Where the generator writes the C source, joined with the platform's
    /// native separator.
    pub fn generated_code_path(&self) -> PathBuf {
        self.output_dir.join(&self.output_file)
    }

    /// Argument vector for the generator, in fixed order.
    ///
    /// `--annotate` consumes three consecutive slots: the interface name,
    /// the annotation key, and the raw suffix.
    pub fn generator_args(&self) -> Vec<OsString> {
        let name = self.interface_name();

        let mut generate_c_code = OsString::from("--generate-c-code=");
        generate_c_code.push(self.generated_code_path());

        vec![
            format!("--interface-prefix={name}.").into(),
            generate_c_code,
            format!("--c-namespace={C_NAMESPACE}").into(),
            "--annotate".into(),
            name.into(),
            C_NAME_ANNOTATION.into(),
            self.suffix.clone().into(),
            self.definition_path.clone().into(),
        ]
    }

    /// Run the generator at `generator` and hand back its exit status.
    ///
    /// Stdio is inherited, so the generator's diagnostics reach the caller
    /// unmodified. Blocks until the child exits; there is no timeout.
    pub fn invoke(&self, generator: &Path) -> Result<ExitStatus> {
        Command::new(generator)
            .args(self.generator_args())
            .status()
            .with_context(|| format!("Failed to run {}", generator.display()))
    }
}
