//! age subprocess gateway
//!
//! Runs the `age` command-line tool with an argument vector (never a shell
//! string). Plaintext and ciphertext travel over stdin/stdout; nothing is
//! written to disk here, so a failed call can never leave a partial file.

use std::ffi::OsStr;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use tracing::debug;
use zeroize::Zeroizing;

use crate::config::{PaPaths, Settings};
use crate::error::{PaError, PaResult};

use super::{Cipher, Secret};

const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Cipher backed by the age CLI
#[derive(Debug, Clone)]
pub struct AgeCli {
    binary: String,
    recipients: PathBuf,
    identities: PathBuf,
    timeout: Duration,
}

impl AgeCli {
    pub fn new(
        binary: impl Into<String>,
        recipients: PathBuf,
        identities: PathBuf,
        timeout: Duration,
    ) -> Self {
        Self {
            binary: binary.into(),
            recipients,
            identities,
            timeout,
        }
    }

    /// Gateway using the store's key files and the configured tool
    pub fn from_config(paths: &PaPaths, settings: &Settings) -> Self {
        Self::new(
            settings.age_binary.clone(),
            paths.recipients_file(),
            paths.identities_file(),
            settings.crypto_timeout,
        )
    }

    /// Run the tool once, feeding `input` on stdin and returning stdout
    fn run(&self, args: &[&OsStr], input: &[u8]) -> PaResult<Zeroizing<Vec<u8>>> {
        debug!(binary = %self.binary, ?args, "invoking encryption tool");

        let mut child = Command::new(&self.binary)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| PaError::CryptoFailure(format!("Failed to run '{}': {}", self.binary, e)))?;

        let (mut stdin, mut stdout, mut stderr) =
            match (child.stdin.take(), child.stdout.take(), child.stderr.take()) {
                (Some(i), Some(o), Some(e)) => (i, o, e),
                _ => {
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(PaError::CryptoFailure(
                        "Failed to attach to encryption tool pipes".into(),
                    ));
                }
            };

        let input = Zeroizing::new(input.to_vec());
        let writer = thread::spawn(move || stdin.write_all(&input));
        let out_reader = thread::spawn(move || {
            let mut buf = Zeroizing::new(Vec::new());
            stdout.read_to_end(&mut buf).map(|_| buf)
        });
        let err_reader = thread::spawn(move || {
            let mut buf = Vec::new();
            stderr.read_to_end(&mut buf).map(|_| buf)
        });

        let status = self.wait_with_deadline(&mut child)?;

        let write_result = writer
            .join()
            .map_err(|_| PaError::CryptoFailure("Encryption tool input thread panicked".into()))?;
        let output = out_reader
            .join()
            .map_err(|_| PaError::CryptoFailure("Encryption tool output thread panicked".into()))?
            .map_err(|e| PaError::CryptoFailure(format!("Failed to read tool output: {}", e)))?;
        let diagnostics = err_reader.join().ok().and_then(|r| r.ok()).unwrap_or_default();

        if !status.success() {
            let message = String::from_utf8_lossy(&diagnostics).trim().to_string();
            return Err(PaError::CryptoFailure(if message.is_empty() {
                format!("'{}' exited with {}", self.binary, status)
            } else {
                message
            }));
        }

        write_result
            .map_err(|e| PaError::CryptoFailure(format!("Failed to send tool input: {}", e)))?;

        Ok(output)
    }

    fn wait_with_deadline(&self, child: &mut Child) -> PaResult<ExitStatus> {
        let deadline = Instant::now() + self.timeout;
        loop {
            if let Some(status) = child.try_wait()? {
                return Ok(status);
            }
            if Instant::now() >= deadline {
                let _ = child.kill();
                let _ = child.wait();
                return Err(PaError::CryptoTimeout {
                    seconds: self.timeout.as_secs(),
                });
            }
            thread::sleep(POLL_INTERVAL);
        }
    }
}

fn require_key_file(path: &Path, what: &str) -> PaResult<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(PaError::CryptoFailure(format!(
            "{} file not found: {}",
            what,
            path.display()
        )))
    }
}

impl Cipher for AgeCli {
    fn encrypt(&self, plaintext: &Secret) -> PaResult<Vec<u8>> {
        if plaintext.is_empty() {
            return Err(PaError::CryptoFailure(
                "Refusing to encrypt an empty secret".into(),
            ));
        }
        require_key_file(&self.recipients, "Recipients")?;

        let args = [
            OsStr::new("--encrypt"),
            OsStr::new("--recipients-file"),
            self.recipients.as_os_str(),
        ];
        let ciphertext = self.run(&args, plaintext.as_bytes())?;
        if ciphertext.is_empty() {
            return Err(PaError::CryptoFailure(
                "Encryption tool produced no output".into(),
            ));
        }
        Ok(ciphertext.to_vec())
    }

    fn decrypt(&self, ciphertext: &[u8]) -> PaResult<Secret> {
        if ciphertext.is_empty() {
            return Err(PaError::CryptoFailure("Ciphertext is empty".into()));
        }
        require_key_file(&self.identities, "Identities")?;

        let args = [
            OsStr::new("--decrypt"),
            OsStr::new("--identity"),
            self.identities.as_os_str(),
        ];
        let mut plaintext = self.run(&args, ciphertext)?;
        Secret::from_utf8(std::mem::take(&mut *plaintext))
    }
}
