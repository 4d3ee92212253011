use std::env;
use std::process;

use anyhow::Context;
use log::{debug, info};
use textbook_rsa::util::{blocks_to_decimal, blocks_to_hex};
use textbook_rsa::RsaConfig;

const DEFAULT_MESSAGE: &str = "HELLO, TEXTBOOK RSA";

fn run() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let message = if args.is_empty() {
        DEFAULT_MESSAGE.to_string()
    } else {
        args.join(" ")
    };

    let config = RsaConfig::default();
    let mut rng = rand::thread_rng();

    info!("generating key pair with {} Miller-Rabin rounds", config.rounds);
    let keypair = config
        .generate_key_pair(&mut rng)
        .context("failed to generate RSA key pair")?;
    info!("generated {}-bit modulus", keypair.bit_length());
    let (n, e, d) = keypair.triple();
    debug!("private exponent d = {}", d);

    println!("n = {}", n);
    println!("e = {}", e);
    println!("{}", message);

    let cipher = keypair
        .public_key
        .encrypt(&message, config.block_size, &mut rng)
        .context("encryption failed")?;
    println!("{}", blocks_to_decimal(&cipher));
    for block in blocks_to_hex(&cipher) {
        println!("{}", block);
    }

    let deciphered = keypair
        .private_key
        .decrypt(&cipher, config.block_size)
        .context("decryption failed")?;
    println!("{}", deciphered);

    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error running application: {:#}", e);
        process::exit(1);
    }
}
