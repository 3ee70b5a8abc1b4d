use std::io::{BufRead, Write};

use rand::{CryptoRng, RngCore};
use tracing::info;

use crate::client::prompt::{self, MenuChoice};
use crate::common::encoding::encode_public_key;
use crate::common::error::Result;
use crate::common::keys::{fingerprint, generate_key_pair};
use crate::common::protect::protect_private_key;
use crate::common::storage::export_key_to_file;
use crate::common::types::BitLengthPolicy;
use crate::utils::config::Config;

/// Runs the interactive menu until the user exits or input ends.
///
/// Returns the number of key pairs written. Any generation, encryption or
/// file error ends the session with that error.
pub fn run<R, W, G>(
    input: &mut R,
    output: &mut W,
    rng: &mut G,
    config: &Config,
    policy: &BitLengthPolicy,
) -> Result<usize>
where
    R: BufRead,
    W: Write,
    G: CryptoRng + RngCore,
{
    writeln!(output, "Welcome to the custom RSA key generator!")?;
    writeln!(output, "-----------------------------------------")?;

    let bits_prompt = format!(
        "Enter the bit length for the key (e.g., {}): ",
        policy.example()
    );
    let mut generated = 0;

    loop {
        prompt::print_menu(output)?;
        if prompt::read_menu_choice(input, output)? == MenuChoice::Exit {
            break;
        }

        let Some(bits) = prompt::read_bit_length(input, output, &bits_prompt, policy)? else {
            break;
        };
        let pair = generate_key_pair(rng, bits)?;

        let password = prompt::read_password(input, output)?;
        let private_pem = protect_private_key(&pair.private_key, password.as_deref())?;
        let public_pem = encode_public_key(&pair.public_key, config.public_format)?;

        let public_path = config.public_key_path();
        let private_path = config.private_key_path();
        export_key_to_file(&public_path, public_pem.as_bytes())?;
        export_key_to_file(&private_path, private_pem.as_bytes())?;

        let key_fingerprint = fingerprint(&pair.public_key)?;
        info!(
            bits,
            encrypted = password.is_some(),
            fingerprint = %key_fingerprint,
            "key pair saved"
        );
        writeln!(
            output,
            "Your keys have been generated and saved to {} and {}.",
            public_path.display(),
            private_path.display()
        )?;
        writeln!(output, "Public key fingerprint: {}", key_fingerprint)?;
        generated += 1;
    }

    writeln!(output, "Goodbye!")?;
    Ok(generated)
}
