//! Output formatting for CLI responses.

use std::io::{self, Write};
use std::process::ExitCode;

use crate::github::{ApiResponse, ClientError};

/// Writes the response status and body to stdout.
///
/// # Errors
///
/// Returns [`ClientError::Io`] when stdout cannot be written.
pub fn write_response(response: &ApiResponse) -> Result<(), ClientError> {
    let mut stdout = io::stdout().lock();
    write_response_to(&mut stdout, response)
}

/// Writes the response status line, followed by the body bytes when there
/// are any.
///
/// # Errors
///
/// Returns [`ClientError::Io`] when the writer fails.
pub fn write_response_to<W: Write>(
    writer: &mut W,
    response: &ApiResponse,
) -> Result<(), ClientError> {
    writeln!(writer, "HTTP {}", response.status()).map_err(|e| io_error(&e))?;

    let body = response.body();
    if !body.is_empty() {
        writer.write_all(body).map_err(|e| io_error(&e))?;
        writer.write_all(b"\n").map_err(|e| io_error(&e))?;
    }

    Ok(())
}

/// Maps the response to the process exit code: success for 2xx, failure for
/// anything else.
#[must_use]
pub fn exit_code_for(response: &ApiResponse) -> ExitCode {
    if response.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn io_error(error: &io::Error) -> ClientError {
    ClientError::Io {
        message: error.to_string(),
    }
}
