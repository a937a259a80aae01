//! aesfile - encrypt and decrypt single files with a password
//!
//! Usage:
//!   aesfile encrypt <FILE>...   - write <FILE>.enc for each file
//!   aesfile decrypt <FILE>...   - write <FILE>.dec for each <FILE>.enc
//!   aesfile inspect <FILE>      - check container framing, show salt and IV
//!   aesfile                     - interactive menu

use aesfile::aliases::PasswordString;
use aesfile::consts::{DEFAULT_PBKDF2_ITERATIONS, ENCRYPTED_EXTENSION};
use aesfile::files::decrypted_output_path;
use aesfile::header::ContainerInfo;
use aesfile::{
    decrypt_file, decrypt_files, encrypt_file, encrypt_files, inspect_file, AesFileError,
    CryptoParams,
};
use anyhow::{anyhow, bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

/// Password-based AES-256 file encryption
#[derive(Parser)]
#[command(name = "aesfile", version)]
#[command(about = "Encrypt and decrypt files with a password (AES-256-CBC, PBKDF2-HMAC-SHA256)", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// PBKDF2 iteration count; decryption must use the value used to encrypt
    #[arg(long, global = true, default_value_t = DEFAULT_PBKDF2_ITERATIONS)]
    iterations: u32,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt files, writing <FILE>.enc next to each
    Encrypt(FileArgs),

    /// Decrypt .enc files, writing <FILE>.dec next to each
    Decrypt(FileArgs),

    /// Check that a file is a well-formed container without decrypting it
    Inspect {
        /// Container file
        file: PathBuf,
    },
}

#[derive(Args)]
struct FileArgs {
    /// Input files
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Explicit output path (single input only)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(format!("aesfile={log_level}").parse()?),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let params = CryptoParams::new().with_iterations(cli.iterations);
    params.validate()?;

    match cli.command {
        Some(Commands::Encrypt(args)) => cmd_encrypt(&args, &params),
        Some(Commands::Decrypt(args)) => cmd_decrypt(&args, &params),
        Some(Commands::Inspect { file }) => cmd_inspect(&file),
        None => cmd_interactive(&params),
    }
}

// ============ ENCRYPT COMMAND ============

fn cmd_encrypt(args: &FileArgs, params: &CryptoParams) -> Result<()> {
    check_inputs(args)?;
    let password = prompt_new_password()?;

    if let [file] = args.files.as_slice() {
        let output = encrypt_file(file, &password, params, args.output.as_deref())
            .with_context(|| format!("failed to encrypt {}", file.display()))?;
        println!("[+] File encrypted successfully: {}", output.display());
    } else {
        let outputs = encrypt_files(args.files.as_slice(), &password, params)
            .context("batch encryption failed")?;
        for output in outputs {
            println!("[+] File encrypted successfully: {}", output.display());
        }
    }
    Ok(())
}

// ============ DECRYPT COMMAND ============

fn cmd_decrypt(args: &FileArgs, params: &CryptoParams) -> Result<()> {
    check_inputs(args)?;
    if args.output.is_none() {
        for file in &args.files {
            decrypted_output_path(file).context("use --output to name the decrypted file")?;
        }
    }
    let password = prompt_password("Enter password: ")?;

    if let [file] = args.files.as_slice() {
        let output = decrypt_file(file, &password, params, args.output.as_deref())
            .map_err(|e| decrypt_failure(file, e))?;
        println!("[+] File decrypted successfully: {}", output.display());
    } else {
        let outputs = decrypt_files(args.files.as_slice(), &password, params)
            .map_err(|e| match e {
                AesFileError::InFile { path, source } => decrypt_failure(&path, *source),
                other => anyhow::Error::new(other).context("batch decryption failed"),
            })?;
        for output in outputs {
            println!("[+] File decrypted successfully: {}", output.display());
        }
    }
    Ok(())
}

// ============ INSPECT COMMAND ============

fn cmd_inspect(file: &Path) -> Result<()> {
    let info = inspect_file(file).with_context(|| format!("cannot inspect {}", file.display()))?;
    print!("{}", inspect_report(file, &info));
    Ok(())
}

fn inspect_report(file: &Path, info: &ContainerInfo) -> String {
    format!(
        "{}\n  salt:        {}\n  iv:          {}\n  ciphertext:  {} bytes ({} blocks)\n  plaintext:   {}..={} bytes\n",
        file.display(),
        hex::encode(info.header.salt),
        hex::encode(info.header.iv),
        info.ciphertext_len,
        info.blocks(),
        info.min_plaintext_len(),
        info.max_plaintext_len()
    )
}

// ============ INTERACTIVE MENU ============

fn cmd_interactive(params: &CryptoParams) -> Result<()> {
    println!("=== AES-256 File Encryptor / Decryptor ===");
    println!("1. Encrypt File");
    println!("2. Decrypt File");
    let choice = prompt_line("Select an option (1/2): ")?;

    if choice != "1" && choice != "2" {
        println!("[-] Invalid choice.");
        return Ok(());
    }

    let path = PathBuf::from(prompt_line("Enter file path: ")?);
    if !path.is_file() {
        println!("[-] File not found.");
        return Ok(());
    }

    if choice == "1" {
        let password = prompt_new_password()?;
        let output = encrypt_file(&path, &password, params, None)
            .with_context(|| format!("failed to encrypt {}", path.display()))?;
        println!("[+] File encrypted successfully: {}", output.display());
    } else {
        let explicit_output = match decrypted_output_path(&path) {
            Ok(_) => None,
            Err(_) => {
                println!("[!] {} does not end in .{ENCRYPTED_EXTENSION}", path.display());
                let answer = prompt_line("Enter output file path: ")?;
                if answer.is_empty() {
                    println!("[-] No output path given.");
                    return Ok(());
                }
                Some(PathBuf::from(answer))
            }
        };
        let password = prompt_password("Enter password: ")?;
        let output = decrypt_file(&path, &password, params, explicit_output.as_deref())
            .map_err(|e| decrypt_failure(&path, e))?;
        println!("[+] File decrypted successfully: {}", output.display());
    }
    Ok(())
}

// ============ HELPERS ============

fn check_inputs(args: &FileArgs) -> Result<()> {
    if args.output.is_some() && args.files.len() > 1 {
        bail!("--output can only be used with a single input file");
    }
    for file in &args.files {
        if !file.is_file() {
            bail!("file not found: {}", file.display());
        }
    }
    Ok(())
}

fn decrypt_failure(file: &Path, err: AesFileError) -> anyhow::Error {
    if err.is_rejected_input() {
        anyhow!(
            "[-] {}: {err} (wrong password, wrong --iterations, or not an encrypted file)",
            file.display()
        )
    } else {
        anyhow::Error::new(err).context(format!("failed to decrypt {}", file.display()))
    }
}

fn prompt_line(prompt: &str) -> Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("cannot read from stdin")?;
    Ok(line.trim().to_string())
}

fn prompt_password(prompt: &str) -> Result<PasswordString> {
    let password =
        PasswordString::new(rpassword::prompt_password(prompt).context("cannot read password")?);
    if password.is_empty() {
        bail!("password must not be empty");
    }
    Ok(password)
}

fn prompt_new_password() -> Result<PasswordString> {
    let password = prompt_password("Enter password: ")?;
    let confirm = prompt_password("Confirm password: ")?;
    if *password != *confirm {
        bail!("passwords do not match");
    }
    Ok(password)
}
