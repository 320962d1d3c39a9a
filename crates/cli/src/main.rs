use anyhow::Result;
use blsfix_corelib as core;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "blsfix", version, about = "BLS12-381 circuit fixture reference")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Hash a message to field elements under the signature suite
    MsgHash {
        /// Message, taken as Latin-1 text
        message: String,
        /// Emit 0x-prefixed hex instead of limb arrays
        #[arg(long)]
        hex: bool,
    },
    /// Run expand_message_xmd and print the expansion as hex
    Expand {
        /// Message, taken as Latin-1 text
        message: String,
        /// Domain separation tag
        #[arg(long, default_value = core::crypto::field::SIGNATURE_DST)]
        dst: String,
        /// Output length in bytes
        #[arg(long, default_value_t = 256)]
        len: usize,
    },
    /// Decompress a G1 public key and print its coordinate limb arrays
    PubkeyLimbs {
        /// 48-byte compressed point, hex
        pubkey: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Some(Commands::MsgHash { message, hex }) => {
            let msg = core::codec::string_to_bytes(&message)?;
            if hex {
                let out = core::fixture::msg_hash_hex(&msg)?;
                println!("{}", serde_json::to_string(&out)?);
            } else {
                let out = core::fixture::msg_hash_limbs(&msg)?;
                println!("{}", serde_json::to_string(&out)?);
            }
        }
        Some(Commands::Expand { message, dst, len }) => {
            let msg = core::codec::string_to_bytes(&message)?;
            let dst = core::codec::string_to_bytes(&dst)?;
            let bytes = core::crypto::expand::expand_message_xmd(&msg, &dst, len)?;
            println!("{}", core::codec::bytes_to_hex(&bytes));
        }
        Some(Commands::PubkeyLimbs { pubkey }) => {
            let point = core::curve::g1_from_compressed_hex(&pubkey)?;
            let limbs = core::fixture::g1_limbs(&point)?;
            println!("{}", serde_json::to_string(&limbs)?);
        }
        None => {
            println!("blsfix {} — ready", core::version());
            println!("Try: `blsfix msg-hash <msg>` or `blsfix pubkey-limbs <hex>`");
        }
    }
    Ok(())
}
