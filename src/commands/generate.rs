use anyhow::Result;
use hwangsae_dbus_codegen::codegen::{self, GenerationRequest};

/// Exit status when the generator executable is missing from PATH.
pub const EXIT_NOT_FOUND: i32 = 127;

/// Run one code-generation request and return the exit code to report.
///
/// The generator's exit code is forwarded verbatim; a child killed by a
/// signal has no code and maps to 1.
pub fn execute(request: GenerationRequest) -> Result<i32> {
    let generator = match which::which(codegen::GENERATOR) {
        Ok(path) => path,
        Err(_) => {
            eprintln!("{}: command not found", codegen::GENERATOR);
            return Ok(EXIT_NOT_FOUND);
        }
    };

    let status = request.invoke(&generator)?;
    Ok(status.code().unwrap_or(1))
}
