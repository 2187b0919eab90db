use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use num_bigint::BigUint;
use rand::rngs::OsRng;
use rsa_keygen::generate_key;

/// Prompts until the user enters something that parses as a non-negative
/// integer. Primality and the other pair checks are the pipeline's job.
fn prompt_integer(label: &str) -> io::Result<BigUint> {
    let stdin = io::stdin();

    loop {
        print!("Enter prime {label}: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "stdin closed before a value was entered",
            ));
        }

        match line.trim().parse::<BigUint>() {
            Ok(value) => return Ok(value),
            Err(_) => eprintln!("'{}' is not a non-negative integer.", line.trim()),
        }
    }
}

fn main() -> io::Result<ExitCode> {
    env_logger::init();

    let p = prompt_integer("p")?;
    let q = prompt_integer("q")?;

    match generate_key(&p, &q, &mut OsRng) {
        Ok(pair) => {
            println!();
            println!("Public key (n, e):  {}", pair.public_key());
            println!("Private key (n, d): {}", pair.private_key());
            Ok(ExitCode::SUCCESS)
        }
        Err(reason) => {
            eprintln!("Key generation rejected: {reason}");
            Ok(ExitCode::FAILURE)
        }
    }
}
